/// Trait for the individual text-cleanup stages of the transcript pipeline
pub trait TranscriptStage {
    /// Apply this stage's transformation to the text
    fn apply(&self, text: &str) -> String;

    /// Get the name of this stage for logging
    fn name(&self) -> &'static str;
}
