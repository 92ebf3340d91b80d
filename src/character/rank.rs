use crate::core::constants::{
    RANK_A_MIN_LEVEL, RANK_B_MIN_LEVEL, RANK_C_MIN_LEVEL, RANK_D_MIN_LEVEL, RANK_S_MIN_LEVEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hunter rank, ordered from lowest (E) to highest (S).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    #[serde(rename = "E-Rank")]
    E,
    #[serde(rename = "D-Rank")]
    D,
    #[serde(rename = "C-Rank")]
    C,
    #[serde(rename = "B-Rank")]
    B,
    #[serde(rename = "A-Rank")]
    A,
    #[serde(rename = "S-Rank")]
    S,
}

impl Rank {
    pub fn all() -> [Rank; 6] {
        [Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S]
    }

    /// Short label, also the persisted form ("C-Rank").
    pub fn label(&self) -> &'static str {
        match self {
            Rank::E => "E-Rank",
            Rank::D => "D-Rank",
            Rank::C => "C-Rank",
            Rank::B => "B-Rank",
            Rank::A => "A-Rank",
            Rank::S => "S-Rank",
        }
    }

    /// Full title shown on the profile card ("C-Rank Hunter").
    pub fn title(&self) -> String {
        format!("{} Hunter", self.label())
    }

    /// Lowest level that carries this rank.
    pub fn min_level(&self) -> u32 {
        match self {
            Rank::E => 0,
            Rank::D => RANK_D_MIN_LEVEL,
            Rank::C => RANK_C_MIN_LEVEL,
            Rank::B => RANK_B_MIN_LEVEL,
            Rank::A => RANK_A_MIN_LEVEL,
            Rank::S => RANK_S_MIN_LEVEL,
        }
    }

    /// The rank above this one, or `None` at S.
    pub fn next(&self) -> Option<Rank> {
        match self {
            Rank::E => Some(Rank::D),
            Rank::D => Some(Rank::C),
            Rank::C => Some(Rank::B),
            Rank::B => Some(Rank::A),
            Rank::A => Some(Rank::S),
            Rank::S => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gets the rank for a given level.
///
/// Thresholds are checked from the top down:
/// - 20+: S
/// - 15-19: A
/// - 10-14: B
/// - 5-9: C
/// - 3-4: D
/// - below 3: E
pub fn rank_for_level(level: u32) -> Rank {
    if level >= RANK_S_MIN_LEVEL {
        Rank::S
    } else if level >= RANK_A_MIN_LEVEL {
        Rank::A
    } else if level >= RANK_B_MIN_LEVEL {
        Rank::B
    } else if level >= RANK_C_MIN_LEVEL {
        Rank::C
    } else if level >= RANK_D_MIN_LEVEL {
        Rank::D
    } else {
        Rank::E
    }
}

/// Levels still needed before the next rank, or `None` at S.
pub fn levels_until_next_rank(level: u32) -> Option<u32> {
    rank_for_level(level)
        .next()
        .map(|next| next.min_level().saturating_sub(level))
}
