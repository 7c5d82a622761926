use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MembershipTier, MonthKey, PlayerId, ReceiptId};

/// Observable state change produced by a committed unit of work.
///
/// Events are logged by the engine; callers that need change notification
/// may poll the query operations instead — the push transport is outside
/// this crate's contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    PlayerRegistered {
        player_id: PlayerId,
        name: String,
    },
    GameRecorded {
        player_id: PlayerId,
        date: NaiveDate,
        profit: i64,
    },
    RankingRecomputed {
        date: NaiveDate,
        players: usize,
    },
    DaySettled {
        date: NaiveDate,
        month: MonthKey,
        receipts_settled: usize,
    },
    PointsEarned {
        player_id: PlayerId,
        amount: u64,
        balance_after: u64,
    },
    PointsUsed {
        player_id: PlayerId,
        amount: u64,
        balance_after: u64,
    },
    TierChanged {
        player_id: PlayerId,
        from: MembershipTier,
        to: MembershipTier,
    },
    MembershipReset {
        player_id: PlayerId,
        cleared_balance: bool,
    },
    ReceiptRecorded {
        receipt_id: ReceiptId,
        player_id: PlayerId,
        points_used: u64,
        points_earned: u64,
    },
}
