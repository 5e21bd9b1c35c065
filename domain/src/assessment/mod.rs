//! Assessment value objects: difficulty tiers and interview phases

pub mod difficulty;
pub mod phase;

pub use difficulty::DifficultyTier;
pub use phase::InterviewPhase;
