//! Filler and duplicate removal for raw speech transcripts.
//!
//! Strips disfluency tokens ("um", "uh", ...) and collapses immediately
//! repeated words, leaving word content otherwise untouched.

use anyhow::Result;
use regex::Regex;
use tracing::debug;

use crate::pipeline::TranscriptStage;

/// Default filler vocabulary removed from transcripts.
/// "ah" is deliberately absent -- it is a meaningful interjection ("Ah, I see").
pub const DEFAULT_FILLER_WORDS: &[&str] = &["um", "uh", "hmm", "like", "you know", "er"];

/// Removes filler words and adjacent duplicate tokens from a transcript.
pub struct FillerScrubber {
    filler_regex: Option<Regex>,
    doubled_comma_regex: Regex,
    space_before_comma_regex: Regex,
}

impl FillerScrubber {
    /// Build a scrubber for the given filler vocabulary.
    /// Matching is case-insensitive and on whole words only, so fillers
    /// embedded in longer words ("umbrella") are never touched.
    pub fn new<S: AsRef<str>>(filler_words: &[S]) -> Result<Self> {
        let mut phrases: Vec<&str> = filler_words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .collect();
        // Longest first so multi-word phrases win over their prefixes
        phrases.sort_by_key(|w| std::cmp::Reverse(w.len()));

        let filler_regex = if phrases.is_empty() {
            None
        } else {
            let escaped: Vec<String> = phrases.iter().map(|w| regex::escape(w)).collect();
            Some(Regex::new(&format!(r"(?i)\b(?:{})\b", escaped.join("|")))?)
        };

        Ok(Self {
            filler_regex,
            doubled_comma_regex: Regex::new(r",(\s*,)+")?,
            space_before_comma_regex: Regex::new(r"\s+,")?,
        })
    }
}

impl TranscriptStage for FillerScrubber {
    fn apply(&self, text: &str) -> String {
        let collapsed = collapse_whitespace(text);

        let stripped = match &self.filler_regex {
            Some(re) => re.replace_all(&collapsed, " ").into_owned(),
            None => collapsed,
        };

        // Commas stranded by a removal ("um, I went" -> ", I went")
        let stripped = self.doubled_comma_regex.replace_all(&stripped, ",");
        let stripped = self.space_before_comma_regex.replace_all(&stripped, ",");
        let stripped = stripped
            .trim_start_matches(|c: char| c == ',' || c.is_whitespace())
            .trim_end_matches(|c: char| c == ',' || c.is_whitespace());

        let result = collapse_repeats(&collapse_whitespace(stripped));
        debug!(
            "Filler scrub reduced {} chars to {} chars",
            text.len(),
            result.len()
        );
        result
    }

    fn name(&self) -> &'static str {
        "FillerScrubber"
    }
}

/// Trim and collapse every internal whitespace run to a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse immediately repeated tokens ("you you are" -> "you are"),
/// case-insensitively. Only adjacent duplicates are collapsed; the first
/// occurrence is kept.
fn collapse_repeats(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for word in text.split_whitespace() {
        if kept
            .last()
            .is_some_and(|prev| prev.to_lowercase() == word.to_lowercase())
        {
            continue;
        }
        kept.push(word);
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrubber() -> FillerScrubber {
        FillerScrubber::new(DEFAULT_FILLER_WORDS).unwrap()
    }

    #[test]
    fn test_removes_simple_fillers() {
        assert_eq!(scrubber().apply("um I went to the store"), "I went to the store");
    }

    #[test]
    fn test_all_filler_input_reduces_to_empty() {
        assert_eq!(scrubber().apply("um uh like"), "");
        assert_eq!(scrubber().apply("  Um, uh, "), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(scrubber().apply("   "), "");
        assert_eq!(scrubber().apply(""), "");
    }

    #[test]
    fn test_fillers_inside_words_are_kept() {
        assert_eq!(scrubber().apply("the umbrella is huge"), "the umbrella is huge");
        assert_eq!(scrubber().apply("her answer was terse"), "her answer was terse");
    }

    #[test]
    fn test_removal_does_not_merge_neighbors() {
        assert_eq!(scrubber().apply("I um went"), "I went");
    }

    #[test]
    fn test_multi_word_filler() {
        assert_eq!(scrubber().apply("it was you know really good"), "it was really good");
    }

    #[test]
    fn test_adjacent_duplicates_collapsed() {
        assert_eq!(scrubber().apply("you you are late"), "you are late");
        assert_eq!(scrubber().apply("You you are late"), "You are late");
        assert_eq!(scrubber().apply("no no no stop"), "no stop");
    }

    #[test]
    fn test_non_adjacent_repeats_kept() {
        assert_eq!(
            scrubber().apply("I said what I said"),
            "I said what I said"
        );
    }

    #[test]
    fn test_stranded_commas_cleaned_up() {
        assert_eq!(scrubber().apply("Um, I went to the store"), "I went to the store");
        assert_eq!(scrubber().apply("I was, uh, thinking"), "I was, thinking");
    }

    #[test]
    fn test_trailing_filler_leaves_no_dangling_comma() {
        assert_eq!(scrubber().apply("so, um"), "so");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(scrubber().apply("  I    am   happy "), "I am happy");
    }

    #[test]
    fn test_idempotent() {
        let s = scrubber();
        let once = s.apply("um you you know like are uh late");
        assert_eq!(s.apply(&once), once);
    }

    #[test]
    fn test_empty_vocabulary_only_normalizes_whitespace() {
        let s = FillerScrubber::new::<&str>(&[]).unwrap();
        assert_eq!(s.apply("um  I went"), "um I went");
    }
}
