// Experience curve: floor(EXP_CURVE_BASE * EXP_CURVE_GROWTH^level)
pub const EXP_CURVE_BASE: f64 = 100.0;
pub const EXP_CURVE_GROWTH: f64 = 1.1;
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_EXP_TO_NEXT_LEVEL: u64 = 100;

// Stats
pub const BASE_STAT_VALUE: u32 = 5;
pub const NUM_STATS: usize = 5;
pub const LEVEL_UP_STAT_POINTS: u32 = 3;

// Rank thresholds (minimum level for each rank)
pub const RANK_D_MIN_LEVEL: u32 = 3;
pub const RANK_C_MIN_LEVEL: u32 = 5;
pub const RANK_B_MIN_LEVEL: u32 = 10;
pub const RANK_A_MIN_LEVEL: u32 = 15;
pub const RANK_S_MIN_LEVEL: u32 = 20;

// Persistence
pub const PROFILE_FILENAME: &str = "profile.json";
pub const DATA_DIR_NAME: &str = ".hunter";
pub const DATA_DIR_ENV: &str = "HUNTER_HOME";
