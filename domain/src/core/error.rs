//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Question catalog is empty")]
    EmptyCatalog,

    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidPhaseTransition { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidPhaseTransition {
            from: "completed".to_string(),
            to: "assessment".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid phase transition: completed -> assessment"
        );
    }
}
