//! Interview session aggregate

pub mod entities;

pub use entities::{ConversationRole, ConversationTurn, InterviewSession, QuestionResponse};
