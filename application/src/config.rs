//! Assessment parameters — interview loop control.
//!
//! [`AssessmentParams`] groups the static parameters that control one
//! interview: the question budget, rubric weights, and the latency bound on
//! oracle calls. These are application-layer concerns, not domain policy.

use acumen_domain::{DomainError, RubricWeights};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Interview loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentParams {
    /// Maximum number of questions per interview.
    pub max_questions: usize,
    /// Target interview duration in minutes (display only).
    pub target_duration_minutes: u64,
    /// Minimum overall score considered a passing signal.
    pub min_score_threshold: f64,
    /// The four rubric weights. Must sum to 1.0.
    pub weights: RubricWeights,
    /// Hard latency bound on each oracle call; a timed-out call takes the
    /// same fallback path as a failed one.
    pub oracle_timeout: Duration,
}

impl Default for AssessmentParams {
    fn default() -> Self {
        Self {
            max_questions: 15,
            target_duration_minutes: 25,
            min_score_threshold: 40.0,
            weights: RubricWeights::default(),
            oracle_timeout: Duration::from_secs(30),
        }
    }
}

impl AssessmentParams {
    // ==================== Builder Methods ====================

    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }

    pub fn with_weights(mut self, weights: RubricWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    /// Validate once at startup. Bad weights or a zero question budget must
    /// refuse to initialize rather than silently mis-score candidates.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.weights.validate()?;
        if self.max_questions == 0 {
            return Err(DomainError::InvalidConfiguration(
                "max_questions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AssessmentParams::default().validate().is_ok());
        assert_eq!(AssessmentParams::default().max_questions, 15);
    }

    #[test]
    fn test_zero_question_budget_rejected() {
        let params = AssessmentParams::default().with_max_questions(0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_bad_weights_rejected() {
        let params = AssessmentParams::default().with_weights(RubricWeights {
            technical: 0.9,
            depth: 0.9,
            problem_solving: 0.0,
            communication: 0.0,
        });
        assert!(params.validate().is_err());
    }
}
