//! Evaluation result entities.
//!
//! [`QuestionEvaluation`] is produced once per scored answer;
//! [`InterviewEvaluation`] is the final aggregate produced once when a
//! session concludes. Both are immutable after creation.

use crate::scoring::{ImprovementTrend, RubricWeights, ScoreBreakdown, SkillLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scoring result for one answered question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEvaluation {
    pub question_id: String,
    pub answer: String,
    pub scores: ScoreBreakdown,
    /// Weighted overall, derived from `scores` at construction time.
    pub overall: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub follow_up_suggestions: Vec<String>,
}

impl QuestionEvaluation {
    /// Build an evaluation, deriving the overall from the breakdown.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        question_id: impl Into<String>,
        answer: impl Into<String>,
        scores: ScoreBreakdown,
        weights: &RubricWeights,
        feedback: impl Into<String>,
        strengths: Vec<String>,
        improvements: Vec<String>,
        follow_up_suggestions: Vec<String>,
    ) -> Self {
        let overall = scores.overall(weights);
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
            scores,
            overall,
            feedback: feedback.into(),
            strengths,
            improvements,
            follow_up_suggestions,
        }
    }
}

/// Hire/no-hire style recommendation banded from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringRecommendation {
    StrongHire,
    Hire,
    Consider,
    NoHire,
}

impl HiringRecommendation {
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 85.0 {
            HiringRecommendation::StrongHire
        } else if overall >= 70.0 {
            HiringRecommendation::Hire
        } else if overall >= 55.0 {
            HiringRecommendation::Consider
        } else {
            HiringRecommendation::NoHire
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HiringRecommendation::StrongHire => "Strong Hire",
            HiringRecommendation::Hire => "Hire",
            HiringRecommendation::Consider => "Consider",
            HiringRecommendation::NoHire => "No Hire",
        }
    }
}

impl fmt::Display for HiringRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final aggregate evaluation for a completed interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewEvaluation {
    /// Per-dimension averages across all answers.
    pub overall_scores: ScoreBreakdown,
    /// Weighted overall computed from the averaged breakdown.
    pub overall: f64,
    pub skill_level: SkillLevel,
    pub category_performance: HashMap<String, f64>,
    pub key_strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendations: Vec<String>,
    pub consistency_score: f64,
    pub improvement_trend: ImprovementTrend,
    pub readiness_assessment: String,
}

impl InterviewEvaluation {
    pub fn hiring_recommendation(&self) -> HiringRecommendation {
        HiringRecommendation::from_overall(self.overall)
    }

    pub fn skill_level_description(&self) -> &'static str {
        self.skill_level.description()
    }
}
