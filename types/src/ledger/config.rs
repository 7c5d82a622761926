use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{
    DEFAULT_BASE_EARN_RATE_PERCENT, DEFAULT_DOUBLE_POINT_MULTIPLIER, DEFAULT_GOLD_CP,
    DEFAULT_PLATINUM_CP, DEFAULT_POINT_TABLE, DEFAULT_SILVER_CP, RANKED_DEPTH,
};

/// Point awards per rank, rank 1 first. Ranks beyond the table earn nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    pub awards: [u64; RANKED_DEPTH],
}

impl PointTable {
    /// Award for a 1-based rank before any day multiplier.
    pub fn points_for_rank(&self, rank: u32) -> u64 {
        match rank {
            0 => 0,
            r if (r as usize) <= RANKED_DEPTH => self.awards[r as usize - 1],
            _ => 0,
        }
    }
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            awards: DEFAULT_POINT_TABLE,
        }
    }
}

/// Lifetime-CP requirement per tier. Must be non-decreasing from silver up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub silver: u64,
    pub gold: u64,
    pub platinum: u64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            silver: DEFAULT_SILVER_CP,
            gold: DEFAULT_GOLD_CP,
            platinum: DEFAULT_PLATINUM_CP,
        }
    }
}

/// Which receipt lines accrue cashback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarnScope {
    #[default]
    All,
    StackPurchasesOnly,
}

/// Venue rules injected into every computation. The engine never reads
/// configuration from ambient state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    pub point_table: PointTable,
    pub double_point_days: BTreeSet<NaiveDate>,
    pub double_point_multiplier: u64,
    pub base_earn_rate_percent: u64,
    pub earn_rate_overrides: BTreeMap<NaiveDate, u64>,
    pub earn_scope: EarnScope,
    pub tier_thresholds: TierThresholds,
}

impl VenueConfig {
    /// Point multiplier for a date: the configured multiplier on a
    /// double-point day, 1 otherwise.
    pub fn multiplier_for(&self, date: NaiveDate) -> u64 {
        if self.double_point_days.contains(&date) {
            self.double_point_multiplier
        } else {
            1
        }
    }

    /// Cashback rate for a date: the per-date override if present, else the
    /// base rate.
    pub fn earn_rate_for(&self, date: NaiveDate) -> u64 {
        self.earn_rate_overrides
            .get(&date)
            .copied()
            .unwrap_or(self.base_earn_rate_percent)
    }
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            point_table: PointTable::default(),
            double_point_days: BTreeSet::new(),
            double_point_multiplier: DEFAULT_DOUBLE_POINT_MULTIPLIER,
            base_earn_rate_percent: DEFAULT_BASE_EARN_RATE_PERCENT,
            earn_rate_overrides: BTreeMap::new(),
            earn_scope: EarnScope::All,
            tier_thresholds: TierThresholds::default(),
        }
    }
}
