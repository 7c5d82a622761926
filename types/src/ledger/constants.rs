/// Maximum name length for player registration
pub const MAX_NAME_LENGTH: usize = 48;

/// Number of ranks that receive a point award (rank 1 through 5)
pub const RANKED_DEPTH: usize = 5;

/// Default point award table, rank 1 first
pub const DEFAULT_POINT_TABLE: [u64; RANKED_DEPTH] = [8, 5, 3, 2, 1];

/// Default cashback rate on eligible receipt spend (percent)
pub const DEFAULT_BASE_EARN_RATE_PERCENT: u64 = 5;

/// Multiplier applied to all point awards on a double-point day
pub const DEFAULT_DOUBLE_POINT_MULTIPLIER: u64 = 2;

/// Lifetime CP required for the silver tier
pub const DEFAULT_SILVER_CP: u64 = 100;

/// Lifetime CP required for the gold tier
pub const DEFAULT_GOLD_CP: u64 = 500;

/// Lifetime CP required for the platinum tier
pub const DEFAULT_PLATINUM_CP: u64 = 2_000;
