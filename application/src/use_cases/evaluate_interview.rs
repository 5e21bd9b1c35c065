//! Interview-level aggregation use case.
//!
//! Folds the per-question evaluations of a finished session into one
//! [`InterviewEvaluation`]: averaged sub-scores, skill banding, consistency,
//! trend, and oracle-provided narrative insights. Any failure along the way
//! collapses to a fixed minimal evaluation rather than partial output.

use crate::config::AssessmentParams;
use crate::ports::scoring_oracle::{DigestResponse, InterviewDigest, ScoringOracle};
use crate::use_cases::evaluate_answer::AnswerEvaluator;
use acumen_domain::{
    consistency_score, improvement_trend, readiness_assessment, ImprovementTrend,
    InterviewEvaluation, InterviewSession, QuestionEvaluation, ScoreBreakdown, SkillLevel,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Aggregates a whole session into a final evaluation.
pub struct InterviewEvaluator {
    oracle: Arc<dyn ScoringOracle>,
    answer_evaluator: Arc<AnswerEvaluator>,
    params: AssessmentParams,
}

impl InterviewEvaluator {
    pub fn new(
        oracle: Arc<dyn ScoringOracle>,
        answer_evaluator: Arc<AnswerEvaluator>,
        params: AssessmentParams,
    ) -> Self {
        Self {
            oracle,
            answer_evaluator,
            params,
        }
    }

    /// Produce the final aggregate evaluation for a session.
    ///
    /// A session with no recorded responses gets the minimal evaluation by
    /// definition; a session whose summary call fails gets it as a safe
    /// default. Neither case is an error to the caller.
    pub async fn evaluate_interview(&self, session: &InterviewSession) -> InterviewEvaluation {
        let evaluations = self.collect_evaluations(session).await;
        if evaluations.is_empty() {
            return Self::minimal_evaluation();
        }

        match self.aggregate(session, &evaluations).await {
            Some(evaluation) => {
                info!(
                    session_id = session.id(),
                    overall = evaluation.overall,
                    "interview aggregation complete"
                );
                evaluation
            }
            None => {
                warn!(
                    session_id = session.id(),
                    "interview summary failed, returning minimal evaluation"
                );
                Self::minimal_evaluation()
            }
        }
    }

    /// One evaluation per recorded response, in answer order. Live scoring
    /// caches its evaluations on the session; anything missing (a restored
    /// session, say) is re-scored.
    async fn collect_evaluations(&self, session: &InterviewSession) -> Vec<QuestionEvaluation> {
        let mut evaluations = Vec::with_capacity(session.responses().len());
        for response in session.responses() {
            if let Some(cached) = session.cached_evaluation_for(&response.question_id) {
                evaluations.push(cached.clone());
            } else {
                let evaluation = self
                    .answer_evaluator
                    .evaluate_answer(
                        &response.question_id,
                        &response.question,
                        &response.answer,
                        &response.category,
                        response.difficulty,
                        &[],
                    )
                    .await;
                evaluations.push(evaluation);
            }
        }
        evaluations
    }

    async fn aggregate(
        &self,
        session: &InterviewSession,
        evaluations: &[QuestionEvaluation],
    ) -> Option<InterviewEvaluation> {
        // Sub-scores are averaged first and the overall recomputed from the
        // averages; averaging the per-question overalls instead would apply
        // the weights twice.
        let breakdowns: Vec<ScoreBreakdown> = evaluations.iter().map(|e| e.scores).collect();
        let overall_scores = ScoreBreakdown::mean_of(&breakdowns)?;
        let overall = overall_scores.overall(&self.params.weights);

        let overalls: Vec<f64> = evaluations.iter().map(|e| e.overall).collect();
        let digest = Self::build_digest(session, evaluations, &overall_scores, overall);

        let insights = tokio::time::timeout(
            self.params.oracle_timeout,
            self.oracle.summarize_interview(&digest),
        )
        .await
        .ok()?
        .ok()?;

        Some(InterviewEvaluation {
            overall_scores,
            overall,
            skill_level: SkillLevel::from_overall(overall),
            category_performance: session.category_performance(),
            key_strengths: insights.key_strengths,
            areas_for_improvement: insights.improvement_areas,
            recommendations: insights.development_recommendations,
            consistency_score: consistency_score(&overalls),
            improvement_trend: improvement_trend(&overalls),
            readiness_assessment: readiness_assessment(overall).to_string(),
        })
    }

    fn build_digest(
        session: &InterviewSession,
        evaluations: &[QuestionEvaluation],
        overall_scores: &ScoreBreakdown,
        overall: f64,
    ) -> InterviewDigest {
        let responses = session
            .responses()
            .iter()
            .map(|r| DigestResponse {
                question: r.question.clone(),
                score: r.score,
                category: r.category.clone(),
            })
            .collect();
        InterviewDigest {
            questions: evaluations.len(),
            technical_avg: overall_scores.technical,
            depth_avg: overall_scores.depth,
            problem_solving_avg: overall_scores.problem_solving,
            communication_avg: overall_scores.communication,
            overall_avg: overall,
            categories: session.category_performance(),
            responses,
        }
    }

    /// Fixed safe default for empty sessions and aggregation failures.
    fn minimal_evaluation() -> InterviewEvaluation {
        InterviewEvaluation {
            overall_scores: ScoreBreakdown::uniform(50.0),
            overall: 50.0,
            skill_level: SkillLevel::Basic,
            category_performance: HashMap::new(),
            key_strengths: vec!["Participated in the interview".to_string()],
            areas_for_improvement: vec!["Continue practicing".to_string()],
            recommendations: vec!["Take additional training courses".to_string()],
            consistency_score: 50.0,
            improvement_trend: ImprovementTrend::Stable,
            readiness_assessment: readiness_assessment(50.0).to_string(),
        }
    }
}
