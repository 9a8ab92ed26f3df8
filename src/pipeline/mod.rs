mod cleaner;
mod commas;
mod fillers;
mod sentence;
mod stage;

pub use cleaner::TranscriptCleaner;
pub use commas::CommaInserter;
pub use fillers::{FillerScrubber, DEFAULT_FILLER_WORDS};
pub use sentence::SentenceShaper;
pub use stage::TranscriptStage;
