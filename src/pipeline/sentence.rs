//! Capitalization and terminal punctuation for cleaned transcripts.

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::pipeline::TranscriptStage;

/// Question words checked in sentence-initial position.
const INTERROGATIVES: &[&str] = &["who", "what", "when", "where", "why", "how"];

/// Auxiliary and modal verbs that open yes/no questions.
const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "do", "does", "did", "can", "could", "should",
    "would", "will", "have", "has", "had",
];

/// Capitalizes sentence starts and standalone "i", and appends terminal
/// punctuation when missing.
pub struct SentenceShaper {
    standalone_i_regex: Regex,
}

impl SentenceShaper {
    pub fn new() -> Result<Self> {
        // Case-sensitive on purpose: only a lowercase standalone "i"
        // (including "i'm", "i've") needs fixing.
        Ok(Self {
            standalone_i_regex: Regex::new(r"\bi\b")?,
        })
    }

    /// Decide whether the text reads as a question. The check is
    /// sentence-initial only: "what time is it" and "did you go" qualify,
    /// "I know why you are late" does not.
    fn is_question(&self, text: &str) -> bool {
        let first: String = match text.split_whitespace().next() {
            Some(word) => word
                .chars()
                .take_while(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase(),
            None => return false,
        };
        INTERROGATIVES.contains(&first.as_str()) || AUXILIARIES.contains(&first.as_str())
    }
}

impl TranscriptStage for SentenceShaper {
    fn apply(&self, text: &str) -> String {
        let capitalized = capitalize_sentences(text);
        let capitalized = self
            .standalone_i_regex
            .replace_all(&capitalized, "I")
            .into_owned();

        // A comma can only trail here if an upstream stage misfired;
        // strip it rather than emit ",." or ",?".
        let mut result = capitalized
            .trim_end()
            .trim_end_matches(',')
            .trim_end()
            .to_string();
        if result.is_empty() {
            return result;
        }

        if !result.ends_with(['.', '!', '?']) {
            let mark = if self.is_question(&result) { '?' } else { '.' };
            debug!("Appending terminal {mark:?}");
            result.push(mark);
        }
        result
    }

    fn name(&self) -> &'static str {
        "SentenceShaper"
    }
}

/// Capitalize the first alphabetic character and the first letter of each
/// sentence after `.`, `!` or `?`.
fn capitalize_sentences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for ch in text.chars() {
        if capitalize_next && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            if matches!(ch, '.' | '!' | '?') {
                capitalize_next = true;
            }
            out.push(ch);
        }
    }
    out
}
