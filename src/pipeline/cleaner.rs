use anyhow::Result;
use tracing::debug;

use crate::config::CleanupConfig;
use crate::pipeline::{CommaInserter, FillerScrubber, SentenceShaper, TranscriptStage};

/// Runs the full transcript cleanup pipeline: filler removal, optional
/// comma insertion, then capitalization and terminal punctuation.
pub struct TranscriptCleaner {
    fillers: FillerScrubber,
    commas: Option<CommaInserter>,
    sentences: SentenceShaper,
}

impl TranscriptCleaner {
    /// Build a cleaner from cleanup configuration. Construction compiles
    /// the stage patterns; cleaning itself never fails.
    pub fn new(config: &CleanupConfig) -> Result<Self> {
        let commas = if config.insert_commas {
            Some(CommaInserter::new()?)
        } else {
            None
        };

        Ok(Self {
            fillers: FillerScrubber::new(&config.filler_words)?,
            commas,
            sentences: SentenceShaper::new()?,
        })
    }

    /// Build a cleaner with the default filler vocabulary and no comma
    /// insertion.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&CleanupConfig::default())
    }

    /// Clean one finalized transcript segment. Returns the empty string
    /// when the segment carries no meaningful content (empty, whitespace
    /// or nothing but filler words).
    pub fn clean(&self, raw: &str) -> String {
        debug!("Running {}", self.fillers.name());
        let stripped = self.fillers.apply(raw);
        if stripped.is_empty() {
            debug!("Transcript reduced to nothing after filler removal");
            return String::new();
        }

        let text = match &self.commas {
            Some(commas) => {
                debug!("Running {}", commas.name());
                commas.apply(&stripped)
            }
            None => stripped,
        };

        debug!("Running {}", self.sentences.name());
        self.sentences.apply(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> TranscriptCleaner {
        TranscriptCleaner::with_defaults().unwrap()
    }

    fn cleaner_with_commas() -> TranscriptCleaner {
        let config = CleanupConfig {
            insert_commas: true,
            ..CleanupConfig::default()
        };
        TranscriptCleaner::new(&config).unwrap()
    }

    #[test]
    fn test_empty_and_filler_only_short_circuit() {
        assert_eq!(cleaner().clean(""), "");
        assert_eq!(cleaner().clean("   "), "");
        assert_eq!(cleaner().clean("um uh like"), "");
    }

    #[test]
    fn test_plain_statement() {
        assert_eq!(cleaner().clean("i go to school"), "I go to school.");
    }

    #[test]
    fn test_question() {
        assert_eq!(cleaner().clean("what time is it"), "What time is it?");
    }

    #[test]
    fn test_duplicates_and_fillers_removed() {
        assert_eq!(cleaner().clean("you you are um late"), "You are late.");
    }

    #[test]
    fn test_comma_stage_enabled() {
        assert_eq!(
            cleaner_with_commas().clean("well I think it works"),
            "Well, I think, it works."
        );
    }

    #[test]
    fn test_comma_stage_disabled_by_default() {
        assert_eq!(
            cleaner().clean("well I think it works"),
            "Well I think it works."
        );
    }

    #[test]
    fn test_custom_filler_vocabulary() {
        let config = CleanupConfig {
            filler_words: vec!["basically".to_string()],
            ..CleanupConfig::default()
        };
        let cleaner = TranscriptCleaner::new(&config).unwrap();
        assert_eq!(cleaner.clean("basically um it works"), "Um it works.");
    }

    #[test]
    fn test_pipeline_is_a_fixed_point() {
        for cleaner in [cleaner(), cleaner_with_commas()] {
            for raw in [
                "um so i was you know thinking",
                "what time is it",
                "well I think it works but they do not agree",
                "  I    am   happy ",
            ] {
                let once = cleaner.clean(raw);
                assert_eq!(cleaner.clean(&once), once, "not stable for {raw:?}");
            }
        }
    }
}
