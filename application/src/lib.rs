//! Application layer for acumen
//!
//! Coordinates the interview workflow on top of the domain layer: use cases
//! for per-answer scoring, interview-level aggregation, and the phase state
//! machine, plus the ports that infrastructure adapters implement (scoring
//! oracle, session store, transcript logger).

pub mod config;
pub mod ports;
pub mod use_cases;

pub use config::AssessmentParams;
pub use ports::{
    AnswerScores, DigestResponse, InterviewDigest, NoTranscriptLogger, OracleError, ScoreRequest,
    ScoringOracle, SessionStore, SummaryInsights, TranscriptEvent, TranscriptLogger,
};
pub use use_cases::{
    AnswerEvaluator, EvaluationSummary, InterviewEvaluator, InterviewOrchestrator,
    InterviewProgress, OrchestratorError, Reply, ReplyMetadata,
};
