//! One-event-at-a-time dispatch over a profile snapshot.
//!
//! `apply_event` is the single entry point a host uses. It routes each
//! event to the matching transition and reports what changed, so the host
//! can decide whether the snapshot needs saving.

use super::error::ProgressionError;
use super::experience::{apply_experience, LevelUpReport};
use super::profile::HunterProfile;
use super::streak::{update_streak, StreakChange};
use crate::character::allocation::allocate_stat;
use crate::character::stats::StatType;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HunterEvent {
    AddExperience(i64),
    AllocateStat(StatType),
    UpdateStreak(NaiveDate),
    SetHunterName(String),
    /// Replace the current snapshot with one read from storage.
    LoadProfile(HunterProfile),
}

impl HunterEvent {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            HunterEvent::AddExperience(_) => "add_experience",
            HunterEvent::AllocateStat(_) => "allocate_stat",
            HunterEvent::UpdateStreak(_) => "update_streak",
            HunterEvent::SetHunterName(_) => "set_hunter_name",
            HunterEvent::LoadProfile(_) => "load_profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventEffect {
    Experience(LevelUpReport),
    StatAllocated { stat: StatType, new_value: u32 },
    Streak(StreakChange),
    Renamed { previous: String },
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    pub profile: HunterProfile,
    pub effect: EventEffect,
}

impl EventOutcome {
    /// True when the new snapshot differs from the one the event was applied to.
    pub fn changed(&self) -> bool {
        match &self.effect {
            EventEffect::Experience(report) => report.exp_gained > 0,
            EventEffect::StatAllocated { .. } => true,
            EventEffect::Streak(change) => !change.is_unchanged(),
            EventEffect::Renamed { previous } => *previous != self.profile.name,
            EventEffect::Loaded => true,
        }
    }
}

/// Trims a requested hunter name and rejects it if nothing is left.
pub fn validate_name(name: &str) -> Result<String, ProgressionError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProgressionError::InvalidName);
    }
    Ok(trimmed.to_string())
}

/// Applies one event to `profile`.
///
/// On error no new snapshot exists and `profile` is still the current state.
pub fn apply_event(
    profile: &HunterProfile,
    event: HunterEvent,
) -> Result<EventOutcome, ProgressionError> {
    let outcome = match event {
        HunterEvent::AddExperience(amount) => {
            let (next, report) = apply_experience(profile, amount)?;
            EventOutcome {
                profile: next,
                effect: EventEffect::Experience(report),
            }
        }
        HunterEvent::AllocateStat(stat) => {
            let next = allocate_stat(profile, stat)?;
            let new_value = next.stats.get(stat);
            EventOutcome {
                profile: next,
                effect: EventEffect::StatAllocated { stat, new_value },
            }
        }
        HunterEvent::UpdateStreak(today) => {
            let (next, change) = update_streak(profile, today);
            EventOutcome {
                profile: next,
                effect: EventEffect::Streak(change),
            }
        }
        HunterEvent::SetHunterName(name) => {
            let name = validate_name(&name)?;
            let mut next = profile.clone();
            let previous = std::mem::replace(&mut next.name, name);
            EventOutcome {
                profile: next,
                effect: EventEffect::Renamed { previous },
            }
        }
        HunterEvent::LoadProfile(snapshot) => {
            snapshot.validate()?;
            EventOutcome {
                profile: snapshot,
                effect: EventEffect::Loaded,
            }
        }
    };
    Ok(outcome)
}
