//! Rejections raised by the progression engine.
//!
//! Every variant is recoverable: an operation that returns one of these
//! has not produced a new snapshot, so the caller's profile is unchanged.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("Experience amount must be non-negative, got {0}")]
    InvalidAmount(i64),

    #[error("No stat points available")]
    NoStatPointsAvailable,

    #[error("Unknown stat: {0:?} (expected strength, intelligence, endurance, charisma or luck)")]
    UnknownStat(String),

    #[error("Hunter name cannot be empty")]
    InvalidName,

    #[error("Corrupt profile snapshot: {0}")]
    CorruptSnapshot(String),
}
