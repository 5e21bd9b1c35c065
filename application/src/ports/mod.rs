//! Application ports — interfaces implemented by infrastructure adapters

pub mod scoring_oracle;
pub mod session_store;
pub mod transcript_logger;

pub use scoring_oracle::{
    AnswerScores, DigestResponse, InterviewDigest, OracleError, ScoreRequest, ScoringOracle,
    SummaryInsights,
};
pub use session_store::SessionStore;
pub use transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
