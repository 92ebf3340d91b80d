//! Single-writer host around the progression engine.
//!
//! `HunterSession` owns the one authoritative snapshot and its store.
//! Events go through `dispatch` one at a time; `&mut self` keeps a second
//! writer out.

use crate::character::stats::StatType;
use crate::core::error::ProgressionError;
use crate::core::events::{apply_event, EventEffect, EventOutcome, HunterEvent};
use crate::core::profile::HunterProfile;
use crate::utils::persistence::{ProfileStore, StoreError};
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Rejected(#[from] ProgressionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct HunterSession<S: ProfileStore> {
    store: S,
    profile: HunterProfile,
}

impl<S: ProfileStore> HunterSession<S> {
    /// Loads the stored profile, or creates and saves a fresh one dated `today`.
    pub fn open(mut store: S, today: NaiveDate) -> Result<Self, SessionError> {
        let profile = match store.load()? {
            Some(profile) => {
                tracing::debug!(
                    "Loaded hunter {:?} at level {} ({})",
                    profile.name,
                    profile.level,
                    profile.rank
                );
                profile
            }
            None => {
                let profile = HunterProfile::new(String::new(), today);
                store.save(&profile)?;
                tracing::info!("Created new hunter profile (joined {})", today);
                profile
            }
        };
        Ok(Self { store, profile })
    }

    pub fn profile(&self) -> &HunterProfile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies one event and persists the result if anything changed.
    ///
    /// A rejected event leaves both the snapshot and the store untouched.
    /// If saving fails the in-memory snapshot is not advanced either.
    pub fn dispatch(&mut self, event: HunterEvent) -> Result<EventEffect, SessionError> {
        let kind = event.kind();
        tracing::debug!("Dispatching {}", kind);

        let outcome = match apply_event(&self.profile, event) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Rejected {}: {}", kind, e);
                return Err(e.into());
            }
        };

        if outcome.changed() {
            self.store.save(&outcome.profile)?;
        }
        log_effect(&outcome);

        let EventOutcome { profile, effect } = outcome;
        self.profile = profile;
        Ok(effect)
    }

    /// Spends `count` points on `stat`, one `AllocateStat` event per point.
    ///
    /// Fails with `NoStatPointsAvailable` before spending anything if fewer
    /// than `count` points are banked. Returns the stat's new value.
    pub fn allocate_points(&mut self, stat: StatType, count: u32) -> Result<u32, SessionError> {
        let available = self.profile.stat_points;
        if count > available {
            tracing::warn!(
                "Rejected allocating {} points to {}: only {} available",
                count,
                stat,
                available
            );
            return Err(ProgressionError::NoStatPointsAvailable.into());
        }
        for _ in 0..count {
            self.dispatch(HunterEvent::AllocateStat(stat))?;
        }
        Ok(self.profile.stats.get(stat))
    }
}

fn log_effect(outcome: &EventOutcome) {
    match &outcome.effect {
        EventEffect::Experience(report) if report.leveled_up() => {
            tracing::info!(
                "Level up! {} -> {} (+{} stat points)",
                report.level_before,
                report.level_after,
                report.stat_points_granted
            );
            if report.rank_changed() {
                tracing::info!("Promoted to {}", report.rank_after.title());
            }
        }
        EventEffect::Streak(change) if !change.is_unchanged() => {
            tracing::debug!("Streak now {} days", outcome.profile.streak_days);
        }
        EventEffect::Renamed { previous } if outcome.changed() => {
            tracing::info!("Hunter renamed from {:?} to {:?}", previous, outcome.profile.name);
        }
        _ => {}
    }
}
