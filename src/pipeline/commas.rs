//! Heuristic comma insertion for casual speech.
//!
//! Conservative by intent: commas are only added after introductory
//! words, after short response phrases in lead-in position, and before a
//! coordinating conjunction that looks like it joins two clauses. Word
//! content is never altered.

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::pipeline::TranscriptStage;

/// Sentence-initial words and phrases that take a following comma.
const INTRO_PHRASES: &[&str] = &[
    "by the way",
    "in fact",
    "however",
    "actually",
    "honestly",
    "anyway",
    "well",
    "so",
];

/// Short response phrases that take a comma when used as a lead-in.
const RESPONSE_PHRASES: &[&str] = &[
    "thank you",
    "of course",
    "i think",
    "i believe",
    "i guess",
    "i mean",
];

/// Coordinating conjunctions that may join two independent clauses.
const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "yet", "for"];

/// Words that commonly open an independent clause. A conjunction only
/// gets a comma when followed by one of these, which keeps noun pairs
/// ("apples and bananas") unpunctuated.
const CLAUSE_OPENERS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "there", "that", "this",
];

/// Sentences shorter than this never get a conjunction comma.
const MIN_SENTENCE_WORDS: usize = 6;

/// Inserts commas into a filler-cleaned transcript.
pub struct CommaInserter {
    intro_regex: Regex,
    response_regex: Regex,
    conjunction_regex: Regex,
    doubled_comma_regex: Regex,
    space_before_comma_regex: Regex,
    space_after_comma_regex: Regex,
}

impl CommaInserter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            intro_regex: Regex::new(&format!(r"(?i)^(?:{})\b", INTRO_PHRASES.join("|")))?,
            response_regex: Regex::new(&format!(r"(?i)\b(?:{})\b", RESPONSE_PHRASES.join("|")))?,
            conjunction_regex: Regex::new(&format!(r"(?i)\b(?:{})\b", CONJUNCTIONS.join("|")))?,
            doubled_comma_regex: Regex::new(r",(\s*,)+")?,
            space_before_comma_regex: Regex::new(r"\s+,")?,
            // Letters only, so numerals like "1,000" keep their commas
            space_after_comma_regex: Regex::new(r",([A-Za-z])")?,
        })
    }

    /// Comma after a sentence-initial introductory word or phrase.
    fn insert_after_intro(&self, text: &str) -> String {
        if let Some(mat) = self.intro_regex.find(text) {
            let rest = &text[mat.end()..];
            let next = rest.trim_start();
            if !next.is_empty() && !next.starts_with(',') {
                return format!("{},{}", &text[..mat.end()], rest);
            }
        }
        text.to_string()
    }

    /// Comma after a response phrase at the start of the text or right
    /// after a comma. The lead-in check looks at the output built so far,
    /// so a comma inserted earlier in this same pass counts; chained
    /// phrases ("i think i believe ...") settle in one pass.
    fn insert_after_responses(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 4);
        let mut last_end = 0;
        for mat in self.response_regex.find_iter(text) {
            out.push_str(&text[last_end..mat.start()]);
            let before = out.trim_end();
            let lead_in = before.is_empty() || before.ends_with(',');
            out.push_str(mat.as_str());
            last_end = mat.end();

            let rest = text[mat.end()..].trim_start();
            if lead_in && !rest.is_empty() && !rest.starts_with(',') {
                out.push(',');
            }
        }
        out.push_str(&text[last_end..]);
        out
    }

    /// Comma before a coordinating conjunction that joins two clauses.
    fn insert_before_conjunctions(&self, text: &str) -> String {
        if text.split_whitespace().count() < MIN_SENTENCE_WORDS {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 4);
        let mut last_end = 0;
        for mat in self.conjunction_regex.find_iter(text) {
            let before = text[..mat.start()].trim_end();
            let after = text[mat.end()..].trim_start();
            let follower: String = after
                .chars()
                .take_while(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();

            let joins_clauses = !before.is_empty()
                && CLAUSE_OPENERS.contains(&follower.as_str());

            if joins_clauses && !before.ends_with(',') {
                out.push_str(text[last_end..mat.start()].trim_end());
                out.push_str(", ");
            } else {
                out.push_str(&text[last_end..mat.start()]);
            }
            out.push_str(mat.as_str());
            last_end = mat.end();
        }
        out.push_str(&text[last_end..]);
        out
    }

    /// Collapse doubled commas and fix comma spacing left by insertion.
    fn normalize_commas(&self, text: &str) -> String {
        let text = self.doubled_comma_regex.replace_all(text, ",");
        let text = self.space_before_comma_regex.replace_all(&text, ",");
        let text = self.space_after_comma_regex.replace_all(&text, ", $1");
        text.trim().to_string()
    }
}

impl TranscriptStage for CommaInserter {
    fn apply(&self, text: &str) -> String {
        let result = self.insert_after_intro(text);
        let result = self.insert_after_responses(&result);
        let result = self.insert_before_conjunctions(&result);
        let result = self.normalize_commas(&result);
        debug!("Comma insertion produced: {result:?}");
        result
    }

    fn name(&self) -> &'static str {
        "CommaInserter"
    }
}
