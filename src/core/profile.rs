use super::constants::{STARTING_EXP_TO_NEXT_LEVEL, STARTING_LEVEL};
use super::error::ProgressionError;
use crate::character::rank::{rank_for_level, Rank};
use crate::character::stats::Stats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The hunter's full progression state.
///
/// This is the only persisted entity. Engine operations never mutate a
/// profile in place; they borrow one and return a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunterProfile {
    pub name: String,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next_level: u64,
    pub stats: Stats,
    pub stat_points: u32,
    pub rank: Rank,
    pub streak_days: u32,
    pub last_active_date: NaiveDate,
    pub join_date: NaiveDate,
}

impl HunterProfile {
    /// Creates a fresh level 1 hunter who joined (and was last active) on `today`.
    pub fn new(name: String, today: NaiveDate) -> Self {
        Self {
            name,
            level: STARTING_LEVEL,
            exp: 0,
            exp_to_next_level: STARTING_EXP_TO_NEXT_LEVEL,
            stats: Stats::new(),
            stat_points: 0,
            rank: rank_for_level(STARTING_LEVEL),
            streak_days: 0,
            last_active_date: today,
            join_date: today,
        }
    }

    /// Fraction of the way to the next level, in `0.0..1.0`.
    pub fn exp_progress(&self) -> f64 {
        if self.exp_to_next_level == 0 {
            return 0.0;
        }
        self.exp as f64 / self.exp_to_next_level as f64
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Checks the invariants a settled snapshot must satisfy.
    ///
    /// A threshold that differs from the current curve is accepted so that
    /// snapshots written under older balancing still load.
    pub fn validate(&self) -> Result<(), ProgressionError> {
        if self.level < STARTING_LEVEL {
            return Err(corrupt(format!("level {} is below 1", self.level)));
        }
        if self.exp_to_next_level == 0 {
            return Err(corrupt("expToNextLevel must be positive".to_string()));
        }
        if self.exp >= self.exp_to_next_level {
            return Err(corrupt(format!(
                "exp {} is not below expToNextLevel {}",
                self.exp, self.exp_to_next_level
            )));
        }
        let expected_rank = rank_for_level(self.level);
        if self.rank != expected_rank {
            return Err(corrupt(format!(
                "rank {} does not match level {} (expected {})",
                self.rank, self.level, expected_rank
            )));
        }
        Ok(())
    }
}

fn corrupt(reason: String) -> ProgressionError {
    ProgressionError::CorruptSnapshot(reason)
}
