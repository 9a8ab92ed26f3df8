//! Cleans raw speech-to-text transcripts into presentable sentences:
//! filler removal, optional comma insertion, capitalization and terminal
//! punctuation.

pub mod cli;
pub mod config;
pub mod global;
pub mod pipeline;
