//! Character stats, ranks, and stat point spending.

pub mod allocation;
pub mod rank;
pub mod stats;

pub use allocation::{allocate_stat, allocate_stat_by_name};
pub use rank::{rank_for_level, Rank};
pub use stats::{StatType, Stats};
