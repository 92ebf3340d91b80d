use crate::core::constants::{BASE_STAT_VALUE, NUM_STATS};
use crate::core::error::ProgressionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Strength,
    Intelligence,
    Endurance,
    Charisma,
    Luck,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Intelligence,
            StatType::Endurance,
            StatType::Charisma,
            StatType::Luck,
        ]
    }

    /// Key used in persisted snapshots and accepted by `from_str`.
    pub fn key(&self) -> &'static str {
        match self {
            StatType::Strength => "strength",
            StatType::Intelligence => "intelligence",
            StatType::Endurance => "endurance",
            StatType::Charisma => "charisma",
            StatType::Luck => "luck",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatType::Strength => "Strength",
            StatType::Intelligence => "Intelligence",
            StatType::Endurance => "Endurance",
            StatType::Charisma => "Charisma",
            StatType::Luck => "Luck",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatType::Strength => {
                "Physical power and endurance. Boosts exercise and physical activity quests."
            }
            StatType::Intelligence => {
                "Mental acuity and knowledge. Improves study-related quests."
            }
            StatType::Endurance => {
                "Stamina and resilience. Lets you finish more tasks before tiring."
            }
            StatType::Charisma => {
                "Social influence and communication. Enhances social quest rewards."
            }
            StatType::Luck => "Fortune and opportunity. Raises the chance of random bonuses.",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parses free-text stat names. Case and surrounding whitespace are ignored.
impl FromStr for StatType {
    type Err = ProgressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StatType::all()
            .into_iter()
            .find(|stat| stat.key() == wanted)
            .ok_or_else(|| ProgressionError::UnknownStat(s.to_string()))
    }
}

/// The five hunter stats. Serialized as an object keyed by stat name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Stats {
    pub strength: u32,
    pub intelligence: u32,
    pub endurance: u32,
    pub charisma: u32,
    pub luck: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            strength: BASE_STAT_VALUE,
            intelligence: BASE_STAT_VALUE,
            endurance: BASE_STAT_VALUE,
            charisma: BASE_STAT_VALUE,
            luck: BASE_STAT_VALUE,
        }
    }

    pub fn get(&self, stat: StatType) -> u32 {
        match stat {
            StatType::Strength => self.strength,
            StatType::Intelligence => self.intelligence,
            StatType::Endurance => self.endurance,
            StatType::Charisma => self.charisma,
            StatType::Luck => self.luck,
        }
    }

    fn slot_mut(&mut self, stat: StatType) -> &mut u32 {
        match stat {
            StatType::Strength => &mut self.strength,
            StatType::Intelligence => &mut self.intelligence,
            StatType::Endurance => &mut self.endurance,
            StatType::Charisma => &mut self.charisma,
            StatType::Luck => &mut self.luck,
        }
    }

    pub fn set(&mut self, stat: StatType, value: u32) {
        *self.slot_mut(stat) = value;
    }

    pub fn increment(&mut self, stat: StatType) {
        let slot = self.slot_mut(stat);
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        StatType::all()
            .iter()
            .map(|stat| self.get(*stat) as u64)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatType, u32)> + '_ {
        StatType::all()
            .into_iter()
            .map(move |stat| (stat, self.get(stat)))
    }
}
