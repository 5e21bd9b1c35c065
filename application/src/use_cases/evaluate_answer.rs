//! Per-answer evaluation use case.
//!
//! Sends one question/answer pair to the scoring oracle, normalizes the
//! rubric-shaped result into a [`QuestionEvaluation`], and falls back to a
//! deterministic heuristic when the oracle is unavailable. This path never
//! fails: a candidate always gets a usable judgment for every answer.

use crate::config::AssessmentParams;
use crate::ports::scoring_oracle::{ScoreRequest, ScoringOracle};
use acumen_domain::{DifficultyTier, QuestionCatalog, QuestionEvaluation, ScoreBreakdown};
use std::sync::Arc;
use tracing::{debug, warn};

/// Feedback text used on the heuristic fallback path.
const FALLBACK_FEEDBACK: &str =
    "Evaluation completed with basic analysis due to system limitations.";

/// Evaluates individual answers against the rubric.
pub struct AnswerEvaluator {
    oracle: Arc<dyn ScoringOracle>,
    catalog: Arc<QuestionCatalog>,
    params: AssessmentParams,
}

impl AnswerEvaluator {
    pub fn new(
        oracle: Arc<dyn ScoringOracle>,
        catalog: Arc<QuestionCatalog>,
        params: AssessmentParams,
    ) -> Self {
        Self {
            oracle,
            catalog,
            params,
        }
    }

    /// Score one answer.
    ///
    /// The oracle call is bounded by the configured timeout; any failure,
    /// timeout, or panic-free error collapses to the heuristic fallback.
    pub async fn evaluate_answer(
        &self,
        question_id: &str,
        question: &str,
        answer: &str,
        category: &str,
        difficulty: DifficultyTier,
        expected_points: &[String],
    ) -> QuestionEvaluation {
        let request = ScoreRequest {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
            expected_points: expected_points.to_vec(),
        };

        let result = tokio::time::timeout(
            self.params.oracle_timeout,
            self.oracle.score_answer(&request),
        )
        .await;

        match result {
            Ok(Ok(raw)) => {
                let scores = ScoreBreakdown::new(
                    raw.technical_score,
                    raw.depth_score,
                    raw.problem_solving_score,
                    raw.communication_score,
                );
                let feedback = if raw.feedback.is_empty() {
                    "No detailed feedback available".to_string()
                } else {
                    raw.feedback
                };
                debug!(
                    question_id,
                    technical = scores.technical,
                    "oracle scored answer"
                );
                QuestionEvaluation::new(
                    question_id,
                    answer,
                    scores,
                    &self.params.weights,
                    feedback,
                    raw.strengths,
                    raw.improvements,
                    raw.follow_up_questions,
                )
            }
            Ok(Err(e)) => {
                warn!(question_id, error = %e, "oracle scoring failed, using fallback");
                self.fallback_evaluation(question_id, answer)
            }
            Err(_) => {
                warn!(question_id, "oracle scoring timed out, using fallback");
                self.fallback_evaluation(question_id, answer)
            }
        }
    }

    /// Deterministic heuristic judgment for when the oracle is unreachable.
    ///
    /// Technical score grows with answer length up to 70; the remaining
    /// dimensions and the overall are fixed fractions of it. The overall is
    /// 0.88 × technical by definition here, not the weighted combination.
    fn fallback_evaluation(&self, question_id: &str, answer: &str) -> QuestionEvaluation {
        let technical = (answer.trim().chars().count() as f64 * 2.0).min(70.0);
        QuestionEvaluation {
            question_id: question_id.to_string(),
            answer: answer.to_string(),
            scores: ScoreBreakdown::new(
                technical,
                technical * 0.9,
                technical * 0.8,
                technical * 0.85,
            ),
            overall: technical * 0.88,
            feedback: FALLBACK_FEEDBACK.to_string(),
            strengths: vec!["Provided a response".to_string()],
            improvements: vec!["Could provide more detailed explanation".to_string()],
            follow_up_suggestions: vec![],
        }
    }

    /// Immediate feedback line shown after each answer. Pure banding.
    pub fn real_time_feedback(score: f64, category: &str) -> String {
        if score >= 85.0 {
            format!("Excellent answer! You demonstrate strong {} skills.", category)
        } else if score >= 70.0 {
            format!("Good response. Your {} knowledge is solid.", category)
        } else if score >= 55.0 {
            format!("Decent answer. Some areas in {} could be strengthened.", category)
        } else if score >= 40.0 {
            format!("Basic understanding shown. {} skills need development.", category)
        } else {
            format!("This area needs work. Consider reviewing {} concepts.", category)
        }
    }

    /// A follow-up prompt for strong answers, when the category has a pool.
    pub fn suggest_follow_up(&self, performance: f64, category: &str) -> Option<String> {
        self.catalog
            .follow_up(performance, category)
            .map(str::to_string)
    }

    pub fn params(&self) -> &AssessmentParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::scoring_oracle::{
        AnswerScores, InterviewDigest, OracleError, SummaryInsights,
    };
    use async_trait::async_trait;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    /// Oracle that always returns the same scores.
    struct FixedOracle {
        scores: AnswerScores,
    }

    #[async_trait]
    impl ScoringOracle for FixedOracle {
        async fn score_answer(&self, _request: &ScoreRequest) -> Result<AnswerScores, OracleError> {
            Ok(self.scores.clone())
        }

        async fn classify_experience(&self, _free_text: &str) -> Result<String, OracleError> {
            Ok("Intermediate".to_string())
        }

        async fn summarize_interview(
            &self,
            _digest: &InterviewDigest,
        ) -> Result<SummaryInsights, OracleError> {
            Ok(SummaryInsights::default())
        }
    }

    /// Oracle that always fails.
    struct FailingOracle;

    #[async_trait]
    impl ScoringOracle for FailingOracle {
        async fn score_answer(&self, _request: &ScoreRequest) -> Result<AnswerScores, OracleError> {
            Err(OracleError::Unavailable("connection refused".to_string()))
        }

        async fn classify_experience(&self, _free_text: &str) -> Result<String, OracleError> {
            Err(OracleError::Unavailable("connection refused".to_string()))
        }

        async fn summarize_interview(
            &self,
            _digest: &InterviewDigest,
        ) -> Result<SummaryInsights, OracleError> {
            Err(OracleError::Unavailable("connection refused".to_string()))
        }
    }

    /// Oracle that never responds within any reasonable test timeout.
    struct HangingOracle;

    #[async_trait]
    impl ScoringOracle for HangingOracle {
        async fn score_answer(&self, _request: &ScoreRequest) -> Result<AnswerScores, OracleError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(AnswerScores::default())
        }

        async fn classify_experience(&self, _free_text: &str) -> Result<String, OracleError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }

        async fn summarize_interview(
            &self,
            _digest: &InterviewDigest,
        ) -> Result<SummaryInsights, OracleError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(SummaryInsights::default())
        }
    }

    fn evaluator(oracle: impl ScoringOracle + 'static) -> AnswerEvaluator {
        AnswerEvaluator::new(
            Arc::new(oracle),
            Arc::new(QuestionCatalog::builtin_excel()),
            AssessmentParams::default(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_evaluate_answer_uses_oracle_scores() {
        let evaluator = evaluator(FixedOracle {
            scores: AnswerScores {
                technical_score: 80.0,
                depth_score: 70.0,
                problem_solving_score: 60.0,
                communication_score: 90.0,
                feedback: "solid".to_string(),
                strengths: vec!["syntax".to_string()],
                ..Default::default()
            },
        });

        let eval = evaluator
            .evaluate_answer("q1", "How?", "Use SUM.", "Formulas", DifficultyTier::Basic, &[])
            .await;

        let expected = 0.40 * 80.0 + 0.25 * 70.0 + 0.20 * 60.0 + 0.15 * 90.0;
        assert!((eval.overall - expected).abs() < 1e-9);
        assert_eq!(eval.feedback, "solid");
        assert_eq!(eval.strengths, vec!["syntax".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_oracle_fields_default_to_zero() {
        let evaluator = evaluator(FixedOracle {
            scores: AnswerScores {
                technical_score: 50.0,
                ..Default::default()
            },
        });

        let eval = evaluator
            .evaluate_answer("q1", "How?", "x", "Formulas", DifficultyTier::Basic, &[])
            .await;

        assert!((eval.scores.depth - 0.0).abs() < 1e-9);
        assert_eq!(eval.feedback, "No detailed feedback available");
    }

    #[tokio::test]
    async fn test_oracle_failure_falls_back_to_heuristic() {
        let evaluator = evaluator(FailingOracle);

        // 10 trimmed characters -> technical 20
        let eval = evaluator
            .evaluate_answer(
                "q1",
                "How?",
                "  use SUM()  ",
                "Formulas",
                DifficultyTier::Basic,
                &[],
            )
            .await;

        let technical = 2.0 * "use SUM()".chars().count() as f64;
        assert!((eval.scores.technical - technical).abs() < 1e-9);
        assert!((eval.scores.depth - technical * 0.9).abs() < 1e-9);
        assert!((eval.scores.problem_solving - technical * 0.8).abs() < 1e-9);
        assert!((eval.scores.communication - technical * 0.85).abs() < 1e-9);
        assert!((eval.overall - technical * 0.88).abs() < 1e-9);
        assert_eq!(eval.feedback, FALLBACK_FEEDBACK);
    }

    #[tokio::test]
    async fn test_fallback_technical_caps_at_70() {
        let evaluator = evaluator(FailingOracle);
        let long_answer = "a".repeat(500);

        let eval = evaluator
            .evaluate_answer("q1", "How?", &long_answer, "Formulas", DifficultyTier::Basic, &[])
            .await;

        assert!((eval.scores.technical - 70.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_oracle_timeout_falls_back() {
        let params = AssessmentParams::default().with_oracle_timeout(Duration::from_millis(10));
        let evaluator = AnswerEvaluator::new(
            Arc::new(HangingOracle),
            Arc::new(QuestionCatalog::builtin_excel()),
            params,
        );

        let eval = evaluator
            .evaluate_answer("q1", "How?", "hello", "Formulas", DifficultyTier::Basic, &[])
            .await;

        assert_eq!(eval.feedback, FALLBACK_FEEDBACK);
    }

    #[test]
    fn test_real_time_feedback_bands() {
        assert!(AnswerEvaluator::real_time_feedback(85.0, "Formulas").starts_with("Excellent"));
        assert!(AnswerEvaluator::real_time_feedback(70.0, "Formulas").starts_with("Good"));
        assert!(AnswerEvaluator::real_time_feedback(55.0, "Formulas").starts_with("Decent"));
        assert!(AnswerEvaluator::real_time_feedback(40.0, "Formulas").starts_with("Basic"));
        assert!(
            AnswerEvaluator::real_time_feedback(39.9, "Formulas").starts_with("This area needs")
        );
    }

    #[tokio::test]
    async fn test_suggest_follow_up_gated_on_performance() {
        let evaluator = evaluator(FailingOracle);
        assert!(evaluator.suggest_follow_up(80.0, "Pivot Tables").is_some());
        assert!(evaluator.suggest_follow_up(50.0, "Pivot Tables").is_none());
        assert!(evaluator.suggest_follow_up(80.0, "Unknown Category").is_none());
    }
}
