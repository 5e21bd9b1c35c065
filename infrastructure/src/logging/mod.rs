//! Transcript logging adapters

mod jsonl;

pub use jsonl::JsonlTranscriptLogger;
