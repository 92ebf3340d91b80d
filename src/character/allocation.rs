use super::stats::StatType;
use crate::core::error::ProgressionError;
use crate::core::profile::HunterProfile;

/// Spends one stat point on `stat`.
///
/// Fails with `NoStatPointsAvailable` when the hunter has no unspent points.
pub fn allocate_stat(
    profile: &HunterProfile,
    stat: StatType,
) -> Result<HunterProfile, ProgressionError> {
    if profile.stat_points == 0 {
        return Err(ProgressionError::NoStatPointsAvailable);
    }

    let mut next = profile.clone();
    next.stats.increment(stat);
    next.stat_points -= 1;
    Ok(next)
}

/// Free-text variant of [`allocate_stat`] for names typed by a user.
///
/// The name is resolved first, so an unknown name reports `UnknownStat`
/// even when no points are available.
pub fn allocate_stat_by_name(
    profile: &HunterProfile,
    name: &str,
) -> Result<HunterProfile, ProgressionError> {
    let stat: StatType = name.parse()?;
    allocate_stat(profile, stat)
}
