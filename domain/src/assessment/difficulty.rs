//! Difficulty tier value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question difficulty tier, totally ordered: Basic < Intermediate < Advanced.
///
/// Tier movement always happens one step at a time — the adaptation policy
/// never jumps from Basic straight to Advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Basic,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    /// One tier up, clamped at Advanced.
    pub fn step_up(self) -> Self {
        match self {
            DifficultyTier::Basic => DifficultyTier::Intermediate,
            DifficultyTier::Intermediate | DifficultyTier::Advanced => DifficultyTier::Advanced,
        }
    }

    /// One tier down, clamped at Basic.
    pub fn step_down(self) -> Self {
        match self {
            DifficultyTier::Advanced => DifficultyTier::Intermediate,
            DifficultyTier::Intermediate | DifficultyTier::Basic => DifficultyTier::Basic,
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> [DifficultyTier; 3] {
        [
            DifficultyTier::Basic,
            DifficultyTier::Intermediate,
            DifficultyTier::Advanced,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Basic => "basic",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(DifficultyTier::Basic),
            "intermediate" => Ok(DifficultyTier::Intermediate),
            "advanced" => Ok(DifficultyTier::Advanced),
            other => Err(format!("unknown difficulty tier: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(DifficultyTier::Basic < DifficultyTier::Intermediate);
        assert!(DifficultyTier::Intermediate < DifficultyTier::Advanced);
    }

    #[test]
    fn test_step_up_moves_one_level() {
        assert_eq!(DifficultyTier::Basic.step_up(), DifficultyTier::Intermediate);
        assert_eq!(
            DifficultyTier::Intermediate.step_up(),
            DifficultyTier::Advanced
        );
        assert_eq!(DifficultyTier::Advanced.step_up(), DifficultyTier::Advanced);
    }

    #[test]
    fn test_step_down_moves_one_level() {
        assert_eq!(
            DifficultyTier::Advanced.step_down(),
            DifficultyTier::Intermediate
        );
        assert_eq!(
            DifficultyTier::Intermediate.step_down(),
            DifficultyTier::Basic
        );
        assert_eq!(DifficultyTier::Basic.step_down(), DifficultyTier::Basic);
    }

    #[test]
    fn test_parse_round_trip() {
        for tier in DifficultyTier::all() {
            let parsed: DifficultyTier = tier.as_str().parse().unwrap();
            assert_eq!(parsed, tier);
        }
        assert!("expert".parse::<DifficultyTier>().is_err());
    }
}
