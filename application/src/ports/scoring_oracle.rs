//! Scoring oracle port.
//!
//! Defines the interface to the external language-model judge. The core
//! never depends on how the judge is reached — implementations (adapters)
//! live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur talking to the scoring oracle.
///
/// Every variant is recovered locally by the evaluator's fallback paths —
/// oracle trouble is never surfaced to the candidate.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Oracle request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed oracle response: {0}")]
    Malformed(String),

    #[error("Oracle timed out")]
    Timeout,

    #[error("Oracle unavailable: {0}")]
    Unavailable(String),
}

/// One answer to judge.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRequest {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expected_points: Vec<String>,
}

/// Raw rubric-shaped judgment from the oracle.
///
/// All fields default when missing: numeric scores to 0, lists to empty —
/// a sparse oracle reply still yields a usable judgment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerScores {
    pub technical_score: f64,
    pub depth_score: f64,
    pub problem_solving_score: f64,
    pub communication_score: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub follow_up_questions: Vec<String>,
}

/// Structured digest of a finished interview, sent to the summary endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewDigest {
    pub questions: usize,
    pub technical_avg: f64,
    pub depth_avg: f64,
    pub problem_solving_avg: f64,
    pub communication_avg: f64,
    pub overall_avg: f64,
    pub categories: HashMap<String, f64>,
    pub responses: Vec<DigestResponse>,
}

/// One response line in the digest.
#[derive(Debug, Clone, Serialize)]
pub struct DigestResponse {
    pub question: String,
    pub score: f64,
    pub category: String,
}

/// Narrative insights from the oracle's summary endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryInsights {
    pub key_strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub development_recommendations: Vec<String>,
}

/// External judge for candidate answers.
///
/// Three request/response operations; all are potentially long-latency
/// network calls and the only suspension points in the core.
#[async_trait]
pub trait ScoringOracle: Send + Sync {
    /// Judge one answer along the four rubric dimensions.
    async fn score_answer(&self, request: &ScoreRequest) -> Result<AnswerScores, OracleError>;

    /// Classify a candidate's free-text experience description into a
    /// one-line label (best effort).
    async fn classify_experience(&self, free_text: &str) -> Result<String, OracleError>;

    /// Produce narrative strengths/improvements/recommendations for a
    /// finished interview.
    async fn summarize_interview(
        &self,
        digest: &InterviewDigest,
    ) -> Result<SummaryInsights, OracleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_scores_default_missing_fields() {
        // A sparse oracle reply still deserializes, with zeros and empties
        let scores: AnswerScores =
            serde_json::from_str(r#"{"technical_score": 80.0, "feedback": "ok"}"#).unwrap();
        assert_eq!(scores.technical_score, 80.0);
        assert_eq!(scores.depth_score, 0.0);
        assert!(scores.strengths.is_empty());
        assert!(scores.follow_up_questions.is_empty());
    }

    #[test]
    fn test_summary_insights_default_missing_fields() {
        let insights: SummaryInsights =
            serde_json::from_str(r#"{"key_strengths": ["clear communication"]}"#).unwrap();
        assert_eq!(insights.key_strengths.len(), 1);
        assert!(insights.improvement_areas.is_empty());
    }
}
