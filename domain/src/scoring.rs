//! Rubric scoring math.
//!
//! Pure functions and value objects for turning per-question sub-scores into
//! weighted overalls, skill-level bands, consistency and trend statistics.
//! Everything here is deterministic and side-effect free; the scoring oracle
//! only ever supplies the four raw sub-scores.

use crate::core::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for the weight-sum check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fixed coefficients applied to the four rubric dimensions.
///
/// The four weights must sum to 1.0. Validated once at startup — a bad set
/// of weights refuses to initialize rather than silently mis-scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RubricWeights {
    pub technical: f64,
    pub depth: f64,
    pub problem_solving: f64,
    pub communication: f64,
}

impl Default for RubricWeights {
    fn default() -> Self {
        Self {
            technical: 0.40,
            depth: 0.25,
            problem_solving: 0.20,
            communication: 0.15,
        }
    }
}

impl RubricWeights {
    /// Check that the weights sum to 1.0 (within floating tolerance) and are
    /// individually non-negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        let sum = self.technical + self.depth + self.problem_solving + self.communication;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DomainError::InvalidConfiguration(format!(
                "rubric weights must sum to 1.0, got {:.6}",
                sum
            )));
        }
        for (name, w) in [
            ("technical", self.technical),
            ("depth", self.depth),
            ("problem_solving", self.problem_solving),
            ("communication", self.communication),
        ] {
            if w < 0.0 {
                return Err(DomainError::InvalidConfiguration(format!(
                    "rubric weight '{}' must be non-negative, got {}",
                    name, w
                )));
            }
        }
        Ok(())
    }
}

/// The four rubric sub-scores for one answer, each 0–100.
///
/// The overall score is never stored: it is always recomputed from the four
/// components via [`ScoreBreakdown::overall`], so the weighted-sum invariant
/// cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub technical: f64,
    pub depth: f64,
    pub problem_solving: f64,
    pub communication: f64,
}

impl ScoreBreakdown {
    /// Create a breakdown, clamping each sub-score into 0–100.
    pub fn new(technical: f64, depth: f64, problem_solving: f64, communication: f64) -> Self {
        Self {
            technical: technical.clamp(0.0, 100.0),
            depth: depth.clamp(0.0, 100.0),
            problem_solving: problem_solving.clamp(0.0, 100.0),
            communication: communication.clamp(0.0, 100.0),
        }
    }

    /// A flat breakdown with every dimension at the same value.
    pub fn uniform(score: f64) -> Self {
        Self::new(score, score, score, score)
    }

    /// The weighted overall score for this breakdown.
    pub fn overall(&self, weights: &RubricWeights) -> f64 {
        self.technical * weights.technical
            + self.depth * weights.depth
            + self.problem_solving * weights.problem_solving
            + self.communication * weights.communication
    }

    /// Arithmetic mean of each sub-score across many breakdowns.
    ///
    /// Averaging happens per dimension; the caller derives the aggregate
    /// overall from the averaged breakdown. Averaging already-weighted
    /// overalls instead would apply the weights twice.
    pub fn mean_of(breakdowns: &[ScoreBreakdown]) -> Option<ScoreBreakdown> {
        if breakdowns.is_empty() {
            return None;
        }
        let n = breakdowns.len() as f64;
        let mut sum = (0.0, 0.0, 0.0, 0.0);
        for b in breakdowns {
            sum.0 += b.technical;
            sum.1 += b.depth;
            sum.2 += b.problem_solving;
            sum.3 += b.communication;
        }
        Some(ScoreBreakdown {
            technical: sum.0 / n,
            depth: sum.1 / n,
            problem_solving: sum.2 / n,
            communication: sum.3 / n,
        })
    }
}

/// Banded skill level derived from an aggregate overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Novice,
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Band an overall score. Bands are half-open `[threshold, next)`:
    /// ≥90 Expert, ≥75 Advanced, ≥60 Intermediate, ≥40 Basic, else Novice.
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 90.0 {
            SkillLevel::Expert
        } else if overall >= 75.0 {
            SkillLevel::Advanced
        } else if overall >= 60.0 {
            SkillLevel::Intermediate
        } else if overall >= 40.0 {
            SkillLevel::Basic
        } else {
            SkillLevel::Novice
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Novice => "novice",
            SkillLevel::Basic => "basic",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Expert => "expert",
        }
    }

    /// Short human description of the band.
    pub fn description(&self) -> &'static str {
        match self {
            SkillLevel::Novice => "New to the domain with basic understanding",
            SkillLevel::Basic => "Foundational skills, can handle simple tasks",
            SkillLevel::Intermediate => "Competent user with good practical skills",
            SkillLevel::Advanced => "Strong skills suitable for professional roles",
            SkillLevel::Expert => "Expert-level proficiency with advanced capabilities",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of score movement across an interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementTrend {
    Improving,
    Declining,
    Stable,
}

impl ImprovementTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementTrend::Improving => "improving",
            ImprovementTrend::Declining => "declining",
            ImprovementTrend::Stable => "stable",
        }
    }
}

impl fmt::Display for ImprovementTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Consistency of performance across answers, scaled 0–100.
///
/// `max(0, 100 − 4·stddev)` where stddev is the population standard
/// deviation of the per-question overall scores. Fewer than two scores is
/// defined as perfectly consistent (100).
pub fn consistency_score(scores: &[f64]) -> f64 {
    if scores.len() < 2 {
        return 100.0;
    }
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    (100.0 - std_dev * 4.0).max(0.0)
}

/// Classify the score trajectory across an ordered score sequence.
///
/// Fewer than 3 scores is always Stable. Otherwise the first ⌊n/3⌋ and last
/// ⌊n/3⌋ scores are averaged (a middle remainder is excluded from both):
/// a difference above +5 is Improving, below −5 Declining, else Stable.
pub fn improvement_trend(scores: &[f64]) -> ImprovementTrend {
    if scores.len() < 3 {
        return ImprovementTrend::Stable;
    }
    let third = scores.len() / 3;
    let first_avg = scores[..third].iter().sum::<f64>() / third as f64;
    let last_avg = scores[scores.len() - third..].iter().sum::<f64>() / third as f64;
    let diff = last_avg - first_avg;
    if diff > 5.0 {
        ImprovementTrend::Improving
    } else if diff < -5.0 {
        ImprovementTrend::Declining
    } else {
        ImprovementTrend::Stable
    }
}

/// Banded role-readiness text for an aggregate overall score.
pub fn readiness_assessment(overall: f64) -> &'static str {
    if overall >= 85.0 {
        "Ready for senior-level roles with minimal training"
    } else if overall >= 70.0 {
        "Ready for intermediate roles, some advanced training beneficial"
    } else if overall >= 55.0 {
        "Ready for entry-level roles with structured training program"
    } else if overall >= 40.0 {
        "Requires significant training before role placement"
    } else {
        "Not ready for role placement, comprehensive training needed"
    }
}
