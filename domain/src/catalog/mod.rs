//! Question catalog: static question records with random and adaptive selection.
//!
//! The catalog itself is immutable and freely shared across concurrent
//! sessions. "Already used" tracking is session-scoped: callers pass the
//! session's used-id set into each selection, so two candidates can be asked
//! the same question but one candidate never sees a repeat.

mod builtin;

use crate::assessment::DifficultyTier;
use crate::core::DomainError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// One immutable question in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub category: String,
    pub difficulty: DifficultyTier,
    pub prompt: String,
    #[serde(default)]
    pub expected_points: Vec<String>,
    #[serde(default)]
    pub evaluation_criteria: String,
}

/// Catalog-wide counts for introspection.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_questions: usize,
    pub by_difficulty: BTreeMap<DifficultyTier, usize>,
    pub by_category: BTreeMap<String, usize>,
}

/// Static store of questions grouped by difficulty tier.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    by_tier: BTreeMap<DifficultyTier, Vec<QuestionRecord>>,
    follow_ups: HashMap<String, Vec<String>>,
}

impl QuestionCatalog {
    /// Build a catalog from a flat list of records.
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, DomainError> {
        if records.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        let mut by_tier: BTreeMap<DifficultyTier, Vec<QuestionRecord>> = BTreeMap::new();
        for record in records {
            by_tier.entry(record.difficulty).or_default().push(record);
        }
        Ok(Self {
            by_tier,
            follow_ups: HashMap::new(),
        })
    }

    /// The built-in Excel proficiency question set, with follow-up pools.
    pub fn builtin_excel() -> Self {
        let mut catalog = Self::from_records(builtin::excel_questions())
            .unwrap_or_else(|_| unreachable!("built-in catalog is non-empty"));
        catalog.follow_ups = builtin::follow_up_pools();
        catalog
    }

    /// Pick a question at the given tier, uniformly at random.
    ///
    /// An optional category filters by case-insensitive exact match. Ids in
    /// `used` are excluded. Returns `None` when the filtered set is empty —
    /// exhaustion is a normal outcome, not an error.
    pub fn question(
        &self,
        difficulty: DifficultyTier,
        category: Option<&str>,
        used: &HashSet<String>,
    ) -> Option<&QuestionRecord> {
        let pool = self.by_tier.get(&difficulty)?;
        let candidates: Vec<&QuestionRecord> = pool
            .iter()
            .filter(|q| match category {
                Some(c) => q.category.eq_ignore_ascii_case(c),
                None => true,
            })
            .filter(|q| !used.contains(&q.id))
            .collect();
        candidates.choose(&mut rand::thread_rng()).copied()
    }

    /// Pick the next question adaptively.
    ///
    /// The target tier steps one level up when performance ≥ 80 (unless
    /// already Advanced) and one level down when performance < 50 (unless
    /// already Basic). An unexplored category is preferred when one exists;
    /// otherwise any question at the target tier. `None` only when the
    /// target tier is exhausted.
    pub fn adaptive_question(
        &self,
        current_performance: f64,
        current_difficulty: DifficultyTier,
        answered_categories: &HashSet<String>,
        used: &HashSet<String>,
    ) -> Option<&QuestionRecord> {
        let target = Self::target_tier(current_performance, current_difficulty);

        let unexplored: Vec<&String> = self
            .all_categories()
            .into_iter()
            .filter(|c| !answered_categories.contains(*c))
            .collect();

        if let Some(category) = unexplored.choose(&mut rand::thread_rng())
            && let Some(question) = self.question(target, Some(category.as_str()), used)
        {
            return Some(question);
        }

        self.question(target, None, used)
    }

    /// The performance-driven tier target. Moves at most one level per call.
    pub fn target_tier(current_performance: f64, current: DifficultyTier) -> DifficultyTier {
        if current_performance >= 80.0 && current != DifficultyTier::Advanced {
            current.step_up()
        } else if current_performance < 50.0 && current != DifficultyTier::Basic {
            current.step_down()
        } else {
            current
        }
    }

    /// Distinct categories available at a tier.
    pub fn categories(&self, difficulty: DifficultyTier) -> Vec<String> {
        let mut set = BTreeSet::new();
        if let Some(pool) = self.by_tier.get(&difficulty) {
            for q in pool {
                set.insert(q.category.clone());
            }
        }
        set.into_iter().collect()
    }

    /// Distinct categories across the whole catalog.
    pub fn all_categories(&self) -> Vec<&String> {
        let mut set = BTreeSet::new();
        for pool in self.by_tier.values() {
            for q in pool {
                set.insert(&q.category);
            }
        }
        set.into_iter().collect()
    }

    /// A registered follow-up prompt for strong answers.
    ///
    /// Only applicable when performance is above 60 and the category has a
    /// follow-up pool; picks uniformly at random from the pool.
    pub fn follow_up(&self, performance: f64, category: &str) -> Option<&str> {
        if performance <= 60.0 {
            return None;
        }
        self.follow_ups
            .get(category)?
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }

    /// Counts by tier and category.
    pub fn stats(&self) -> CatalogStats {
        let mut by_difficulty = BTreeMap::new();
        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut total = 0;
        for (tier, pool) in &self.by_tier {
            by_difficulty.insert(*tier, pool.len());
            total += pool.len();
            for q in pool {
                *by_category.entry(q.category.clone()).or_default() += 1;
            }
        }
        CatalogStats {
            total_questions: total,
            by_difficulty,
            by_category,
        }
    }
}
