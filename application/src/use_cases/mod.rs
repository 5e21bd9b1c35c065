//! Application use cases

pub mod evaluate_answer;
pub mod evaluate_interview;
pub mod orchestrator;

pub use evaluate_answer::AnswerEvaluator;
pub use evaluate_interview::InterviewEvaluator;
pub use orchestrator::{
    EvaluationSummary, InterviewOrchestrator, InterviewProgress, OrchestratorError, Reply,
    ReplyMetadata,
};
