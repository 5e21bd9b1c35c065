//! Domain layer for acumen
//!
//! This crate contains the core business logic, entities, and value objects
//! of the adaptive skills assessment. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Adaptive selection
//!
//! The next question combines a performance-driven difficulty target with a
//! preference for categories the candidate has not yet covered.
//!
//! ## Rubric scoring
//!
//! Every answer is judged along four weighted dimensions (technical, depth,
//! problem solving, communication). The overall score is always the fixed
//! weighted combination of the four — never stored independently.

pub mod assessment;
pub mod catalog;
pub mod core;
pub mod evaluation;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use assessment::{DifficultyTier, InterviewPhase};
pub use catalog::{CatalogStats, QuestionCatalog, QuestionRecord};
pub use core::DomainError;
pub use evaluation::{HiringRecommendation, InterviewEvaluation, QuestionEvaluation};
pub use scoring::{
    ImprovementTrend, RubricWeights, ScoreBreakdown, SkillLevel, consistency_score,
    improvement_trend, readiness_assessment,
};
pub use session::{ConversationRole, ConversationTurn, InterviewSession, QuestionResponse};
