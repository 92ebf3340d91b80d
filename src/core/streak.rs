//! Daily activity streaks.
//!
//! The caller supplies "today"; nothing here reads a clock.

use super::profile::HunterProfile;
use chrono::NaiveDate;

/// How a check-in affected the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already checked in today.
    Unchanged,
    /// Checked in the day after the last activity.
    Extended { streak_days: u32 },
    /// A day was missed (or the date went backwards); the streak restarts at 1.
    Reset { previous: u32 },
}

impl StreakChange {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, StreakChange::Unchanged)
    }
}

/// Records activity on `today` and returns the updated snapshot.
pub fn update_streak(profile: &HunterProfile, today: NaiveDate) -> (HunterProfile, StreakChange) {
    let last = profile.last_active_date;
    if today == last {
        return (profile.clone(), StreakChange::Unchanged);
    }

    let mut next = profile.clone();
    next.last_active_date = today;

    let change = if last.succ_opt() == Some(today) {
        next.streak_days = profile.streak_days.saturating_add(1);
        StreakChange::Extended {
            streak_days: next.streak_days,
        }
    } else {
        next.streak_days = 1;
        StreakChange::Reset {
            previous: profile.streak_days,
        }
    };

    (next, change)
}
