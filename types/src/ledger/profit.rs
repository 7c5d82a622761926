use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PlayerId;

/// One finished game participation from the game-settlement feed.
///
/// `final_stack` is optional on the wire: a missing stack rejects the
/// record rather than zero-filling a player's result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettlement {
    pub player_id: PlayerId,
    pub player_name: String,
    pub buy_in: u64,
    pub rebuys: u64,
    pub final_stack: Option<u64>,
    pub played_at: DateTime<Utc>,
}

/// One settled game participation, immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitRecord {
    pub player_id: PlayerId,
    pub player_name: String,
    pub buy_in: u64,
    pub rebuys: u64,
    pub final_stack: u64,
    pub recorded_at: DateTime<Utc>,
}

impl ProfitRecord {
    /// Net profit for the participation: final stack minus total invested.
    pub fn profit(&self) -> i64 {
        self.final_stack as i64 - (self.buy_in as i64 + self.rebuys as i64)
    }
}

/// Per-player net profit for one day, produced by the profit aggregator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitTotal {
    pub player_id: PlayerId,
    pub player_name: String,
    pub profit: i64,
}
