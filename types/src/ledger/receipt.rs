use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PlayerId, PointTransaction};

/// Opaque receipt identifier, assigned by the point-of-sale subsystem.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Category tag on a receipt line item. Stack, tournament-entry, and rebuy
/// purchases count toward cashback under the restricted earn scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    Stack,
    TournamentEntry,
    Rebuy,
    Food,
    Beverage,
    Merchandise,
    Other,
}

impl LineCategory {
    pub fn is_stack_purchase(&self) -> bool {
        matches!(
            self,
            LineCategory::Stack | LineCategory::TournamentEntry | LineCategory::Rebuy
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub description: String,
    pub category: LineCategory,
    pub amount: u64,
}

/// Receipt-completion event from the point-of-sale subsystem: triggers a
/// point use (if requested) followed by a cashback earn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptCompletion {
    pub receipt_id: ReceiptId,
    pub player_id: PlayerId,
    pub lines: Vec<ReceiptLine>,
    pub points_to_use: u64,
    pub completed_at: DateTime<Utc>,
}

impl ReceiptCompletion {
    /// Full spend across all line items.
    pub fn line_total(&self) -> u64 {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Subtotal of stack, tournament-entry, and rebuy lines.
    pub fn stack_total(&self) -> u64 {
        self.lines
            .iter()
            .filter(|l| l.category.is_stack_purchase())
            .map(|l| l.amount)
            .sum()
    }
}

/// The ledger's record of a completed receipt. `settled` flips when the
/// business day is settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: ReceiptId,
    pub player_id: PlayerId,
    pub date: NaiveDate,
    pub lines: Vec<ReceiptLine>,
    pub total_amount: u64,
    pub points_used: u64,
    pub points_earned: u64,
    pub settled: bool,
    pub completed_at: DateTime<Utc>,
}

/// Result of settling one receipt against the rewards ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptOutcome {
    pub receipt: Receipt,
    pub used: Option<PointTransaction>,
    pub earned: Option<PointTransaction>,
}
