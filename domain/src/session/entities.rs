//! Interview session entities.
//!
//! [`InterviewSession`] is the root mutable aggregate for one candidate's
//! assessment: phase, difficulty, transcript, recorded responses, and the
//! session-scoped bookkeeping the orchestrator drives (pending question,
//! used question ids).

use crate::assessment::{DifficultyTier, InterviewPhase};
use crate::catalog::QuestionRecord;
use crate::core::DomainError;
use crate::evaluation::QuestionEvaluation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Role of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationRole {
    User,
    Assistant,
}

/// One turn in the session transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: ConversationRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ConversationRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ConversationRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One answered question. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub question: String,
    pub answer: String,
    /// Weighted overall score for this answer, 0–100.
    pub score: f64,
    pub feedback: String,
    pub category: String,
    pub difficulty: DifficultyTier,
    pub answered_at: DateTime<Utc>,
}

/// The state of one candidate's interview.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    id: String,
    candidate_name: String,
    candidate_email: Option<String>,
    phase: InterviewPhase,
    difficulty: DifficultyTier,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    experience_level: Option<String>,
    responses: Vec<QuestionResponse>,
    transcript: Vec<ConversationTurn>,
    /// The question the candidate is currently answering. Set when a
    /// question is emitted, taken when the answer arrives.
    pending_question: Option<QuestionRecord>,
    /// Ids already asked in this session. Session-scoped so concurrent
    /// candidates draw independently from the shared catalog.
    used_question_ids: HashSet<String>,
    /// Full per-question evaluations cached from live scoring, so the final
    /// aggregation reuses them instead of re-asking the oracle.
    cached_evaluations: Vec<QuestionEvaluation>,
    completed: bool,
}

impl InterviewSession {
    pub fn new(
        id: impl Into<String>,
        candidate_name: impl Into<String>,
        candidate_email: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            candidate_name: candidate_name.into(),
            candidate_email,
            phase: InterviewPhase::Introduction,
            difficulty: DifficultyTier::Basic,
            started_at: Utc::now(),
            ended_at: None,
            experience_level: None,
            responses: Vec::new(),
            transcript: Vec::new(),
            pending_question: None,
            used_question_ids: HashSet::new(),
            cached_evaluations: Vec::new(),
            completed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn candidate_email(&self) -> Option<&str> {
        self.candidate_email.as_deref()
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn difficulty(&self) -> DifficultyTier {
        self.difficulty
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn experience_level(&self) -> Option<&str> {
        self.experience_level.as_deref()
    }

    pub fn responses(&self) -> &[QuestionResponse] {
        &self.responses
    }

    pub fn transcript(&self) -> &[ConversationTurn] {
        &self.transcript
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn used_question_ids(&self) -> &HashSet<String> {
        &self.used_question_ids
    }

    pub fn pending_question(&self) -> Option<&QuestionRecord> {
        self.pending_question.as_ref()
    }

    /// Advance the phase. Only the immediate next phase (or staying put)
    /// is a legal move — phases never go backward.
    pub fn advance_to(&mut self, target: InterviewPhase) -> Result<(), DomainError> {
        if !self.phase.can_advance_to(target) {
            return Err(DomainError::InvalidPhaseTransition {
                from: self.phase.to_string(),
                to: target.to_string(),
            });
        }
        self.phase = target;
        Ok(())
    }

    pub fn set_experience_level(&mut self, level: impl Into<String>) {
        self.experience_level = Some(level.into());
    }

    pub fn set_initial_difficulty(&mut self, difficulty: DifficultyTier) {
        self.difficulty = difficulty;
    }

    /// Record a question as emitted: remember it as pending and mark its id
    /// used for this session.
    pub fn set_pending_question(&mut self, question: QuestionRecord) {
        self.used_question_ids.insert(question.id.clone());
        self.pending_question = Some(question);
    }

    pub fn take_pending_question(&mut self) -> Option<QuestionRecord> {
        self.pending_question.take()
    }

    pub fn add_turn(&mut self, turn: ConversationTurn) {
        self.transcript.push(turn);
    }

    /// Append an answered question. Responses are only recorded during the
    /// Assessment phase; the list is frozen afterwards.
    pub fn record_response(&mut self, response: QuestionResponse) {
        debug_assert_eq!(self.phase, InterviewPhase::Assessment);
        self.responses.push(response);
    }

    /// Cache the full evaluation behind a recorded response.
    pub fn cache_evaluation(&mut self, evaluation: QuestionEvaluation) {
        self.cached_evaluations.push(evaluation);
    }

    /// Cached evaluations in answer order.
    pub fn cached_evaluations(&self) -> &[QuestionEvaluation] {
        &self.cached_evaluations
    }

    /// The cached evaluation for a given question id, if any.
    pub fn cached_evaluation_for(&self, question_id: &str) -> Option<&QuestionEvaluation> {
        self.cached_evaluations
            .iter()
            .find(|e| e.question_id == question_id)
    }

    /// Mark the interview finished.
    pub fn complete(&mut self) {
        self.completed = true;
        self.ended_at = Some(Utc::now());
    }

    /// Mean overall score across answered questions; 0.0 before any answer.
    pub fn current_score(&self) -> f64 {
        if self.responses.is_empty() {
            return 0.0;
        }
        self.responses.iter().map(|r| r.score).sum::<f64>() / self.responses.len() as f64
    }

    /// Mean overall score per category label.
    pub fn category_performance(&self) -> HashMap<String, f64> {
        let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
        for response in &self.responses {
            let entry = sums.entry(response.category.clone()).or_insert((0.0, 0));
            entry.0 += response.score;
            entry.1 += 1;
        }
        sums.into_iter()
            .map(|(category, (sum, count))| (category, sum / count as f64))
            .collect()
    }

    /// Distinct categories already covered.
    pub fn answered_categories(&self) -> HashSet<String> {
        self.responses
            .iter()
            .map(|r| r.category.clone())
            .collect()
    }

    fn recent_average(&self, window: usize) -> Option<f64> {
        if self.responses.len() < window {
            return None;
        }
        let recent = &self.responses[self.responses.len() - window..];
        Some(recent.iter().map(|r| r.score).sum::<f64>() / window as f64)
    }

    /// Whether the adaptation policy calls for stepping difficulty up:
    /// at least 3 answers, and the last 3 average ≥75 at Basic or ≥80 at
    /// Intermediate.
    pub fn should_increase_difficulty(&self) -> bool {
        let Some(avg) = self.recent_average(3) else {
            return false;
        };
        match self.difficulty {
            DifficultyTier::Basic => avg >= 75.0,
            DifficultyTier::Intermediate => avg >= 80.0,
            DifficultyTier::Advanced => false,
        }
    }

    /// Whether the adaptation policy calls for stepping difficulty down:
    /// at least 2 answers, and the last 2 average <60 at Advanced or <50 at
    /// Intermediate.
    pub fn should_decrease_difficulty(&self) -> bool {
        let Some(avg) = self.recent_average(2) else {
            return false;
        };
        match self.difficulty {
            DifficultyTier::Advanced => avg < 60.0,
            DifficultyTier::Intermediate => avg < 50.0,
            DifficultyTier::Basic => false,
        }
    }

    /// Step difficulty up one tier.
    pub fn escalate(&mut self) {
        self.difficulty = self.difficulty.step_up();
    }

    /// Step difficulty down one tier.
    pub fn de_escalate(&mut self) {
        self.difficulty = self.difficulty.step_down();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(score: f64, category: &str) -> QuestionResponse {
        QuestionResponse {
            question_id: "q".to_string(),
            question: "?".to_string(),
            answer: "a".to_string(),
            score,
            feedback: String::new(),
            category: category.to_string(),
            difficulty: DifficultyTier::Basic,
            answered_at: Utc::now(),
        }
    }

    fn session_with_scores(scores: &[f64]) -> InterviewSession {
        let mut session = InterviewSession::new("s1", "Jane Doe", None);
        session.advance_to(InterviewPhase::Assessment).unwrap();
        for score in scores {
            session.record_response(response(*score, "General"));
        }
        session
    }

    #[test]
    fn test_new_session_starts_in_introduction() {
        let session = InterviewSession::new("s1", "Jane Doe", None);
        assert_eq!(session.phase(), InterviewPhase::Introduction);
        assert_eq!(session.difficulty(), DifficultyTier::Basic);
        assert!(!session.is_completed());
        assert_eq!(session.current_score(), 0.0);
    }

    #[test]
    fn test_phase_never_goes_backward() {
        let mut session = InterviewSession::new("s1", "Jane Doe", None);
        session.advance_to(InterviewPhase::Assessment).unwrap();
        assert!(session.advance_to(InterviewPhase::Introduction).is_err());
        assert_eq!(session.phase(), InterviewPhase::Assessment);
    }

    #[test]
    fn test_current_score_is_mean_of_overalls() {
        let session = session_with_scores(&[80.0, 60.0]);
        assert!((session.current_score() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_performance_groups_by_label() {
        let mut session = InterviewSession::new("s1", "Jane Doe", None);
        session.advance_to(InterviewPhase::Assessment).unwrap();
        session.record_response(response(80.0, "Formulas"));
        session.record_response(response(60.0, "Formulas"));
        session.record_response(response(90.0, "Charts"));
        let perf = session.category_performance();
        assert!((perf["Formulas"] - 70.0).abs() < 1e-9);
        assert!((perf["Charts"] - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_escalation_needs_three_answers() {
        let session = session_with_scores(&[90.0, 90.0]);
        assert!(!session.should_increase_difficulty());
    }

    #[test]
    fn test_escalation_boundary_at_basic() {
        // Exactly 75 average fires; 74.999 does not
        let session = session_with_scores(&[75.0, 75.0, 75.0]);
        assert!(session.should_increase_difficulty());

        let session = session_with_scores(&[75.0, 75.0, 74.997]);
        assert!(!session.should_increase_difficulty());
    }

    #[test]
    fn test_escalation_threshold_higher_at_intermediate() {
        let mut session = session_with_scores(&[78.0, 78.0, 78.0]);
        session.set_initial_difficulty(DifficultyTier::Intermediate);
        assert!(!session.should_increase_difficulty());

        let mut session = session_with_scores(&[82.0, 82.0, 82.0]);
        session.set_initial_difficulty(DifficultyTier::Intermediate);
        assert!(session.should_increase_difficulty());
    }

    #[test]
    fn test_no_escalation_at_advanced() {
        let mut session = session_with_scores(&[95.0, 95.0, 95.0]);
        session.set_initial_difficulty(DifficultyTier::Advanced);
        assert!(!session.should_increase_difficulty());
    }

    #[test]
    fn test_de_escalation_needs_two_answers() {
        let mut session = session_with_scores(&[10.0]);
        session.set_initial_difficulty(DifficultyTier::Advanced);
        assert!(!session.should_decrease_difficulty());
    }

    #[test]
    fn test_de_escalation_thresholds() {
        let mut session = session_with_scores(&[55.0, 55.0]);
        session.set_initial_difficulty(DifficultyTier::Advanced);
        assert!(session.should_decrease_difficulty());

        let mut session = session_with_scores(&[55.0, 55.0]);
        session.set_initial_difficulty(DifficultyTier::Intermediate);
        assert!(!session.should_decrease_difficulty());

        let mut session = session_with_scores(&[45.0, 45.0]);
        session.set_initial_difficulty(DifficultyTier::Intermediate);
        assert!(session.should_decrease_difficulty());
    }

    #[test]
    fn test_no_de_escalation_at_basic() {
        let session = session_with_scores(&[10.0, 10.0]);
        assert!(!session.should_decrease_difficulty());
    }

    #[test]
    fn test_pending_question_marks_id_used() {
        let mut session = InterviewSession::new("s1", "Jane Doe", None);
        let question = QuestionRecord {
            id: "basic_001".to_string(),
            category: "Formulas & Functions".to_string(),
            difficulty: DifficultyTier::Basic,
            prompt: "How?".to_string(),
            expected_points: vec![],
            evaluation_criteria: String::new(),
        };
        session.set_pending_question(question.clone());
        assert!(session.used_question_ids().contains("basic_001"));
        let taken = session.take_pending_question().unwrap();
        assert_eq!(taken.id, question.id);
        assert!(session.take_pending_question().is_none());
        // Still used after being answered
        assert!(session.used_question_ids().contains("basic_001"));
    }

    #[test]
    fn test_complete_sets_end_time() {
        let mut session = InterviewSession::new("s1", "Jane Doe", None);
        session.complete();
        assert!(session.is_completed());
        assert!(session.ended_at().is_some());
    }
}
