//! Hunter - progression engine for a gamified habit tracker.
//!
//! Experience turns into levels, levels into ranks and stat points, and
//! daily check-ins into streaks. Every transition is a pure function from
//! a profile snapshot to a new snapshot; `session` hosts them over a store.

pub mod character;
pub mod core;
pub mod session;
pub mod utils;

// Re-export commonly used types at the crate root
pub use crate::character::{Rank, StatType, Stats};
pub use crate::core::{HunterEvent, HunterProfile, ProgressionError};
pub use crate::session::{HunterSession, SessionError};
