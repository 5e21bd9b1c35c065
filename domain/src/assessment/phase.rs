//! Interview phase state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of an interview session.
///
/// Phases move strictly forward: Introduction → Assessment → Conclusion →
/// Completed. A session never returns to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewPhase {
    Introduction,
    Assessment,
    Conclusion,
    Completed,
}

impl InterviewPhase {
    /// Whether moving from `self` to `target` respects the forward-only order.
    ///
    /// Staying in the same phase is allowed; skipping forward (e.g.
    /// Assessment → Completed) is not part of the normal flow and is
    /// rejected alongside backward moves.
    pub fn can_advance_to(self, target: InterviewPhase) -> bool {
        target == self || target == self.next()
    }

    /// The next phase in the forward order. Completed is terminal.
    pub fn next(self) -> InterviewPhase {
        match self {
            InterviewPhase::Introduction => InterviewPhase::Assessment,
            InterviewPhase::Assessment => InterviewPhase::Conclusion,
            InterviewPhase::Conclusion | InterviewPhase::Completed => InterviewPhase::Completed,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == InterviewPhase::Completed
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewPhase::Introduction => "introduction",
            InterviewPhase::Assessment => "assessment",
            InterviewPhase::Conclusion => "conclusion",
            InterviewPhase::Completed => "completed",
        }
    }
}

impl fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_order() {
        assert!(InterviewPhase::Introduction < InterviewPhase::Assessment);
        assert!(InterviewPhase::Assessment < InterviewPhase::Conclusion);
        assert!(InterviewPhase::Conclusion < InterviewPhase::Completed);
    }

    #[test]
    fn test_can_advance_only_forward_by_one() {
        assert!(InterviewPhase::Introduction.can_advance_to(InterviewPhase::Assessment));
        assert!(InterviewPhase::Assessment.can_advance_to(InterviewPhase::Conclusion));
        assert!(InterviewPhase::Conclusion.can_advance_to(InterviewPhase::Completed));
        // Backward and skipping are rejected
        assert!(!InterviewPhase::Assessment.can_advance_to(InterviewPhase::Introduction));
        assert!(!InterviewPhase::Introduction.can_advance_to(InterviewPhase::Conclusion));
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(InterviewPhase::Completed.is_terminal());
        assert_eq!(InterviewPhase::Completed.next(), InterviewPhase::Completed);
    }
}
