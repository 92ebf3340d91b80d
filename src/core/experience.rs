use super::constants::{EXP_CURVE_BASE, EXP_CURVE_GROWTH, LEVEL_UP_STAT_POINTS};
use super::error::ProgressionError;
use super::profile::HunterProfile;
use crate::character::rank::{rank_for_level, Rank};

/// Calculates the EXP required to advance past `level`.
///
/// `floor(100 * 1.1^level)`. Very large levels saturate at `u64::MAX`.
pub fn exp_for_next_level(level: u32) -> u64 {
    (EXP_CURVE_BASE * f64::powf(EXP_CURVE_GROWTH, level as f64)) as u64
}

/// What a single experience award did to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpReport {
    pub exp_gained: u64,
    pub levels_gained: u32,
    pub stat_points_granted: u32,
    pub level_before: u32,
    pub level_after: u32,
    pub rank_before: Rank,
    pub rank_after: Rank,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }

    pub fn rank_changed(&self) -> bool {
        self.rank_before != self.rank_after
    }
}

/// Applies an experience award and resolves every level-up it pays for.
///
/// Returns the new snapshot and a report. A negative `amount` is rejected
/// with `InvalidAmount`. An award of zero is a no-op.
pub fn apply_experience(
    profile: &HunterProfile,
    amount: i64,
) -> Result<(HunterProfile, LevelUpReport), ProgressionError> {
    let gained = u64::try_from(amount).map_err(|_| ProgressionError::InvalidAmount(amount))?;

    let mut next = profile.clone();
    next.exp = next.exp.saturating_add(gained);

    let mut levels_gained = 0;
    while next.exp >= next.exp_to_next_level {
        next.exp -= next.exp_to_next_level;
        next.level = next.level.saturating_add(1);
        next.stat_points = next.stat_points.saturating_add(LEVEL_UP_STAT_POINTS);
        next.exp_to_next_level = exp_for_next_level(next.level).max(1);
        levels_gained += 1;
    }

    next.rank = rank_for_level(next.level);

    let report = LevelUpReport {
        exp_gained: gained,
        levels_gained,
        stat_points_granted: levels_gained * LEVEL_UP_STAT_POINTS,
        level_before: profile.level,
        level_after: next.level,
        rank_before: profile.rank,
        rank_after: next.rank,
    };

    Ok((next, report))
}
