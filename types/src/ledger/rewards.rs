use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PlayerId, ReceiptId};

/// Direction of a point transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointDirection {
    Earn,
    Use,
}

/// One append-only entry of a player's point ledger.
///
/// `balance_before`/`balance_after` snapshot the materialized balance at
/// append time; the log fold is the authoritative balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTransaction {
    pub id: String,
    pub player_id: PlayerId,
    pub direction: PointDirection,
    pub amount: u64,
    pub reason: String,
    pub balance_before: u64,
    pub balance_after: u64,
    pub related_receipt_id: Option<ReceiptId>,
    pub created_at: DateTime<Utc>,
}

impl PointTransaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_id: PlayerId,
        direction: PointDirection,
        amount: u64,
        reason: String,
        balance_before: u64,
        balance_after: u64,
        related_receipt_id: Option<ReceiptId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_id,
            direction,
            amount,
            reason,
            balance_before,
            balance_after,
            related_receipt_id,
            created_at: Utc::now(),
        }
    }
}

/// A player's full point history. Entries are never modified or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLog {
    pub entries: Vec<PointTransaction>,
}

impl TransactionLog {
    /// Authoritative balance: the fold of the log.
    pub fn balance(&self) -> u64 {
        self.entries.iter().fold(0u64, |acc, tx| match tx.direction {
            PointDirection::Earn => acc + tx.amount,
            PointDirection::Use => acc - tx.amount,
        })
    }

    /// Lifetime earned points: the fold of earn entries only.
    pub fn lifetime_earned(&self) -> u64 {
        self.entries
            .iter()
            .filter(|tx| tx.direction == PointDirection::Earn)
            .map(|tx| tx.amount)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
