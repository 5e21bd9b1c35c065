//! Interview orchestration — the phase state machine.
//!
//! [`InterviewOrchestrator`] owns the full interview lifecycle: session
//! registration, the Introduction → Assessment → Conclusion → Completed
//! progression, per-answer scoring, difficulty adaptation, and the final
//! aggregation handoff. One candidate utterance is handled completely before
//! the next is accepted for that session; independent sessions share only
//! the immutable catalog.

use crate::config::AssessmentParams;
use crate::ports::scoring_oracle::ScoringOracle;
use crate::ports::session_store::SessionStore;
use crate::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use crate::use_cases::evaluate_answer::AnswerEvaluator;
use crate::use_cases::evaluate_interview::InterviewEvaluator;
use acumen_domain::{
    ConversationTurn, DifficultyTier, InterviewEvaluation, InterviewPhase, InterviewSession,
    QuestionCatalog, QuestionResponse,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced to the orchestrator's caller.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("session not found: {0}")]
    SessionNotFound(String),
}

/// What the caller renders after one `process_response` call.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Candidate-facing text.
    pub text: String,
    pub metadata: ReplyMetadata,
}

/// Structured companions to the reply text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplyMetadata {
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationSummary>,
}

/// Condensed final-evaluation view attached to the concluding reply.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSummary {
    pub overall: f64,
    pub skill_level: String,
    pub hiring_recommendation: String,
    pub key_strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendations: Vec<String>,
    pub readiness_assessment: String,
}

impl EvaluationSummary {
    fn from_evaluation(evaluation: &InterviewEvaluation) -> Self {
        Self {
            overall: evaluation.overall,
            skill_level: evaluation.skill_level.to_string(),
            hiring_recommendation: evaluation.hiring_recommendation().to_string(),
            key_strengths: evaluation.key_strengths.clone(),
            areas_for_improvement: evaluation.areas_for_improvement.clone(),
            recommendations: evaluation.recommendations.clone(),
            readiness_assessment: evaluation.readiness_assessment.clone(),
        }
    }
}

/// Read-only progress snapshot for a session in flight.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewProgress {
    pub phase: String,
    pub questions_answered: usize,
    pub current_score: f64,
    pub current_difficulty: String,
    pub elapsed_minutes: i64,
    pub category_performance: HashMap<String, f64>,
    pub completed: bool,
}

pub struct InterviewOrchestrator {
    store: Arc<dyn SessionStore>,
    oracle: Arc<dyn ScoringOracle>,
    catalog: Arc<QuestionCatalog>,
    answer_evaluator: Arc<AnswerEvaluator>,
    interview_evaluator: InterviewEvaluator,
    transcript: Arc<dyn TranscriptLogger>,
    params: AssessmentParams,
}

impl InterviewOrchestrator {
    pub fn new(
        store: Arc<dyn SessionStore>,
        oracle: Arc<dyn ScoringOracle>,
        catalog: Arc<QuestionCatalog>,
        transcript: Arc<dyn TranscriptLogger>,
        params: AssessmentParams,
    ) -> Self {
        let answer_evaluator = Arc::new(AnswerEvaluator::new(
            oracle.clone(),
            catalog.clone(),
            params.clone(),
        ));
        let interview_evaluator = InterviewEvaluator::new(
            oracle.clone(),
            answer_evaluator.clone(),
            params.clone(),
        );
        Self {
            store,
            oracle,
            catalog,
            answer_evaluator,
            interview_evaluator,
            transcript,
            params,
        }
    }

    // ==================== Lifecycle ====================

    /// Register a new session and return its id.
    pub async fn start_interview(
        &self,
        candidate_name: &str,
        candidate_email: Option<String>,
    ) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        let session = InterviewSession::new(&session_id, candidate_name, candidate_email);
        info!(session_id, candidate_name, "interview started");
        self.transcript.log(TranscriptEvent::new(
            "session_started",
            json!({
                "session_id": session_id,
                "candidate_name": candidate_name,
                "started_at": session.started_at().to_rfc3339(),
            }),
        ));
        self.store.put(session).await;
        session_id
    }

    /// The opening message shown before any candidate input.
    pub fn welcome_message(&self, candidate_name: &str) -> String {
        format!(
            "Hello {candidate_name}, and welcome to your Excel skills assessment!\n\
             I'll ask you up to {} questions, adjusting difficulty as we go. \
             Answer in as much detail as you like.\n\n\
             To get started, could you tell me a bit about your experience with Excel?",
            self.params.max_questions
        )
    }

    /// Handle one candidate utterance. Dispatch is purely on the session's
    /// current phase.
    pub async fn process_response(
        &self,
        session_id: &str,
        utterance: &str,
    ) -> Result<Reply, OrchestratorError> {
        let mut session = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(session_id.to_string()))?;

        session.add_turn(ConversationTurn::user(utterance));

        let reply = match session.phase() {
            InterviewPhase::Introduction => {
                self.handle_introduction(&mut session, utterance).await
            }
            InterviewPhase::Assessment => self.handle_assessment(&mut session, utterance).await,
            InterviewPhase::Conclusion => self.handle_conclusion(&mut session).await,
            InterviewPhase::Completed => Self::closing_reply(),
        };

        session.add_turn(ConversationTurn::assistant(&reply.text));
        self.store.put(session).await;
        Ok(reply)
    }

    // ==================== Phase Handlers ====================

    /// Map an experience label to the opening tier. Unrecognized labels
    /// default to Basic, and self-reported "advanced" starts at Intermediate
    /// so the first answers can earn the top tier rather than assume it.
    fn initial_difficulty_for(label: &str) -> DifficultyTier {
        let label = label.to_lowercase();
        if label.contains("beginner") || label.contains("new") {
            DifficultyTier::Basic
        } else if label.contains("advanced") || label.contains("expert") {
            DifficultyTier::Intermediate
        } else {
            DifficultyTier::Basic
        }
    }

    /// Introduction: classify experience, pick an initial tier, ask the
    /// first question.
    async fn handle_introduction(&self, session: &mut InterviewSession, utterance: &str) -> Reply {
        let label = match tokio::time::timeout(
            self.params.oracle_timeout,
            self.oracle.classify_experience(utterance),
        )
        .await
        {
            Ok(Ok(label)) => label,
            Ok(Err(e)) => {
                warn!(session_id = session.id(), error = %e, "experience classification failed");
                "intermediate".to_string()
            }
            Err(_) => {
                warn!(session_id = session.id(), "experience classification timed out");
                "intermediate".to_string()
            }
        };

        let difficulty = Self::initial_difficulty_for(&label);
        session.set_experience_level(&label);
        session.set_initial_difficulty(difficulty);

        let Some(question) = self
            .catalog
            .question(difficulty, None, session.used_question_ids())
            .cloned()
        else {
            // Phase stays at Introduction so a later attempt can retry.
            warn!(session_id = session.id(), "no opening question available");
            return Reply {
                text: "I'm sorry, I wasn't able to prepare a question for you right now. \
                       Please try again in a moment."
                    .to_string(),
                metadata: ReplyMetadata {
                    phase: session.phase().to_string(),
                    ..Default::default()
                },
            };
        };

        // advance_to cannot fail here: Assessment is Introduction's successor
        let _ = session.advance_to(InterviewPhase::Assessment);
        session.set_pending_question(question.clone());

        info!(
            session_id = session.id(),
            experience = label,
            difficulty = %difficulty,
            "assessment phase entered"
        );
        self.transcript.log(TranscriptEvent::new(
            "assessment_started",
            json!({
                "session_id": session.id(),
                "experience_level": label,
                "initial_difficulty": difficulty.to_string(),
            }),
        ));

        Reply {
            text: format!(
                "Thanks for sharing! Let's begin the assessment.\n\n{}",
                question.prompt
            ),
            metadata: ReplyMetadata {
                phase: session.phase().to_string(),
                question_number: Some(1),
                difficulty: Some(difficulty.to_string()),
                category: Some(question.category),
                experience_level: session.experience_level().map(str::to_string),
                ..Default::default()
            },
        }
    }

    /// Assessment steady state: score the answer, record it, adapt
    /// difficulty, ask the next question or conclude.
    async fn handle_assessment(&self, session: &mut InterviewSession, utterance: &str) -> Reply {
        let Some(question) = session.take_pending_question() else {
            // Lost track of the current question; recover by asking a fresh
            // one rather than surfacing an error to the candidate.
            warn!(session_id = session.id(), "no pending question in assessment phase");
            return self.ask_next_question(
                session,
                "Thank you for your response. Let me ask you another question.".to_string(),
                None,
            );
        };

        let evaluation = self
            .answer_evaluator
            .evaluate_answer(
                &question.id,
                &question.prompt,
                utterance,
                &question.category,
                question.difficulty,
                &question.expected_points,
            )
            .await;

        let feedback = AnswerEvaluator::real_time_feedback(evaluation.overall, &question.category);
        session.record_response(QuestionResponse {
            question_id: question.id.clone(),
            question: question.prompt.clone(),
            answer: utterance.to_string(),
            score: evaluation.overall,
            feedback: evaluation.feedback.clone(),
            category: question.category.clone(),
            difficulty: question.difficulty,
            answered_at: Utc::now(),
        });
        let follow_up = self
            .answer_evaluator
            .suggest_follow_up(evaluation.overall, &question.category);

        self.transcript.log(TranscriptEvent::new(
            "answer_scored",
            json!({
                "session_id": session.id(),
                "question_id": question.id,
                "category": question.category,
                "difficulty": question.difficulty.to_string(),
                "score": evaluation.overall,
            }),
        ));
        session.cache_evaluation(evaluation);

        if session.responses().len() >= self.params.max_questions {
            // advance_to cannot fail: Conclusion is Assessment's successor
            let _ = session.advance_to(InterviewPhase::Conclusion);
            info!(
                session_id = session.id(),
                answered = session.responses().len(),
                "question budget reached, concluding"
            );
            return Reply {
                text: format!(
                    "{feedback}\n\nThat completes the question portion of the assessment. \
                     Say anything when you're ready to see your results."
                ),
                metadata: ReplyMetadata {
                    phase: session.phase().to_string(),
                    ..Default::default()
                },
            };
        }

        // Escalate first; a fired escalation suppresses the de-escalation
        // check for this step.
        if session.should_increase_difficulty() {
            session.escalate();
            info!(
                session_id = session.id(),
                difficulty = %session.difficulty(),
                "difficulty escalated"
            );
        } else if session.should_decrease_difficulty() {
            session.de_escalate();
            info!(
                session_id = session.id(),
                difficulty = %session.difficulty(),
                "difficulty reduced"
            );
        }

        self.ask_next_question(session, feedback, follow_up)
    }

    /// Select the next adaptive question and attach it to `preamble`, or
    /// conclude when the catalog has nothing left at the target tier.
    fn ask_next_question(
        &self,
        session: &mut InterviewSession,
        preamble: String,
        follow_up: Option<String>,
    ) -> Reply {
        let next = self
            .catalog
            .adaptive_question(
                session.current_score(),
                session.difficulty(),
                &session.answered_categories(),
                session.used_question_ids(),
            )
            .cloned();

        match next {
            Some(question) => {
                session.set_pending_question(question.clone());
                Reply {
                    text: format!("{preamble}\n\nNext question:\n{}", question.prompt),
                    metadata: ReplyMetadata {
                        phase: session.phase().to_string(),
                        question_number: Some(session.responses().len() + 1),
                        difficulty: Some(question.difficulty.to_string()),
                        category: Some(question.category),
                        current_score: (!session.responses().is_empty())
                            .then(|| session.current_score()),
                        follow_up,
                        ..Default::default()
                    },
                }
            }
            None => {
                // Exhausted catalog is a normal termination, not a failure
                let _ = session.advance_to(InterviewPhase::Conclusion);
                info!(session_id = session.id(), "catalog exhausted, concluding");
                Reply {
                    text: format!(
                        "{preamble}\n\nWe've covered all the ground I had prepared. \
                         Say anything when you're ready to see your results."
                    ),
                    metadata: ReplyMetadata {
                        phase: session.phase().to_string(),
                        follow_up,
                        ..Default::default()
                    },
                }
            }
        }
    }

    /// Conclusion: aggregate, complete, and present the final evaluation.
    async fn handle_conclusion(&self, session: &mut InterviewSession) -> Reply {
        let evaluation = self.interview_evaluator.evaluate_interview(session).await;
        session.complete();
        // advance_to cannot fail: Completed is Conclusion's successor
        let _ = session.advance_to(InterviewPhase::Completed);

        let summary = EvaluationSummary::from_evaluation(&evaluation);
        self.transcript.log(TranscriptEvent::new(
            "interview_completed",
            json!({
                "session_id": session.id(),
                "overall": evaluation.overall,
                "skill_level": summary.skill_level,
                "questions_answered": session.responses().len(),
            }),
        ));
        info!(
            session_id = session.id(),
            overall = evaluation.overall,
            skill_level = %summary.skill_level,
            "interview completed"
        );

        Reply {
            text: Self::render_summary(session, &evaluation),
            metadata: ReplyMetadata {
                phase: session.phase().to_string(),
                evaluation: Some(summary),
                ..Default::default()
            },
        }
    }

    fn render_summary(session: &InterviewSession, evaluation: &InterviewEvaluation) -> String {
        let mut text = format!(
            "Thank you, {}! Here is your assessment summary.\n\n\
             Overall score: {:.1}/100\n\
             Skill level: {} — {}\n\
             Readiness: {}\n",
            session.candidate_name(),
            evaluation.overall,
            evaluation.skill_level,
            evaluation.skill_level_description(),
            evaluation.readiness_assessment,
        );
        if !evaluation.key_strengths.is_empty() {
            text.push_str("\nKey strengths:\n");
            for s in &evaluation.key_strengths {
                text.push_str(&format!("  - {s}\n"));
            }
        }
        if !evaluation.areas_for_improvement.is_empty() {
            text.push_str("\nAreas for improvement:\n");
            for a in &evaluation.areas_for_improvement {
                text.push_str(&format!("  - {a}\n"));
            }
        }
        if !evaluation.recommendations.is_empty() {
            text.push_str("\nRecommendations:\n");
            for r in &evaluation.recommendations {
                text.push_str(&format!("  - {r}\n"));
            }
        }
        text
    }

    fn closing_reply() -> Reply {
        Reply {
            text: "This assessment has already concluded. Thank you again for your time!"
                .to_string(),
            metadata: ReplyMetadata {
                phase: InterviewPhase::Completed.to_string(),
                ..Default::default()
            },
        }
    }

    // ==================== Queries ====================

    /// Snapshot of a session's progress.
    pub async fn progress(&self, session_id: &str) -> Result<InterviewProgress, OrchestratorError> {
        let session = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(session_id.to_string()))?;
        let elapsed = Utc::now() - session.started_at();
        Ok(InterviewProgress {
            phase: session.phase().to_string(),
            questions_answered: session.responses().len(),
            current_score: session.current_score(),
            current_difficulty: session.difficulty().to_string(),
            elapsed_minutes: elapsed.num_minutes(),
            category_performance: session.category_performance(),
            completed: session.is_completed(),
        })
    }

    /// Read-only copy of the full session, for report generation.
    pub async fn interview_state(
        &self,
        session_id: &str,
    ) -> Result<InterviewSession, OrchestratorError> {
        self.store
            .get(session_id)
            .await
            .ok_or_else(|| OrchestratorError::SessionNotFound(session_id.to_string()))
    }

    /// Evict a session. Unknown ids are a no-op.
    pub async fn cleanup_session(&self, session_id: &str) {
        if self.store.remove(session_id).await {
            info!(session_id, "session evicted");
        }
    }

    pub async fn active_sessions(&self) -> usize {
        self.store.active_count().await
    }
}
