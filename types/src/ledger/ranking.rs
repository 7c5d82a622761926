use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// One row of a daily ranking.
///
/// Tied profits share a rank and a point award (dense ranking: profits
/// `[500, 500, 300]` rank as `[1, 1, 2]`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub profit: i64,
    pub rank: u32,
    pub points: u64,
}

/// The ranked result of one business day.
///
/// Lifecycle: written provisional any number of times (each write replaces
/// the whole entry list), then confirmed exactly once by settlement.
/// A confirmed ranking is immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRanking {
    pub date: NaiveDate,
    pub entries: Vec<RankedEntry>,
    pub is_confirmed: bool,
    pub point_multiplier: u64,
}

impl DailyRanking {
    pub fn entry_for(&self, player_id: &PlayerId) -> Option<&RankedEntry> {
        self.entries.iter().find(|e| &e.player_id == player_id)
    }
}
