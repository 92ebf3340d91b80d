//! Hunter profile and the pure transitions applied to it.

pub mod constants;
pub mod error;
pub mod events;
pub mod experience;
pub mod profile;
pub mod streak;

pub use error::ProgressionError;
pub use events::{apply_event, EventEffect, EventOutcome, HunterEvent};
pub use experience::{apply_experience, exp_for_next_level, LevelUpReport};
pub use profile::HunterProfile;
pub use streak::{update_streak, StreakChange};
