use chrono::NaiveDate;
use thiserror::Error;

use crate::ledger::{PlayerId, ReceiptId};

/// Error taxonomy for all ledger operations.
///
/// Every mutating operation is all-or-nothing: an error means no partial
/// transaction, balance update, or ranking write took place.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("final stack missing for player {player_id}")]
    MissingFinalStack { player_id: PlayerId },

    #[error("point amount must be positive")]
    ZeroAmount,

    #[error("player name must be between 1 and {limit} characters (got {len})")]
    InvalidName { len: usize, limit: usize },

    #[error("{year}-{month:02} is not a valid calendar month")]
    InvalidMonth { year: i32, month: u32 },

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("no ranking recorded for {date}")]
    RankingNotFound { date: NaiveDate },

    #[error("receipt {0} already recorded")]
    DuplicateReceipt(ReceiptId),

    #[error("ranking for {date} is already confirmed")]
    AlreadyConfirmed { date: NaiveDate },

    #[error(
        "insufficient point balance for {player_id}: balance {balance}, requested {requested}"
    )]
    InsufficientBalance {
        player_id: PlayerId,
        balance: u64,
        requested: u64,
    },

    #[error("commit conflict persisted after {attempts} attempts")]
    Conflict { attempts: u32 },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
