//! Fixtures shared by engine tests.

use chrono::{DateTime, TimeZone, Utc};

use baize_types::ledger::{
    EarnScope, GameSettlement, LineCategory, PlayerAccount, PointTable, ReceiptCompletion,
    ReceiptId, ReceiptLine, TierThresholds, VenueConfig,
};

/// Venue rules with thresholds small enough to cross in a test.
pub fn test_config() -> VenueConfig {
    VenueConfig {
        point_table: PointTable {
            awards: [8, 5, 3, 2, 1],
        },
        double_point_days: Default::default(),
        double_point_multiplier: 2,
        base_earn_rate_percent: 5,
        earn_rate_overrides: Default::default(),
        earn_scope: EarnScope::All,
        tier_thresholds: TierThresholds {
            silver: 50,
            gold: 150,
            platinum: 400,
        },
    }
}

pub fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn settlement(
    account: &PlayerAccount,
    buy_in: u64,
    rebuys: u64,
    final_stack: u64,
    played_at: DateTime<Utc>,
) -> GameSettlement {
    GameSettlement {
        player_id: account.id.clone(),
        player_name: account.name.clone(),
        buy_in,
        rebuys,
        final_stack: Some(final_stack),
        played_at,
    }
}

pub fn line(category: LineCategory, amount: u64) -> ReceiptLine {
    ReceiptLine {
        description: String::new(),
        category,
        amount,
    }
}

pub fn completion(
    account: &PlayerAccount,
    receipt_id: &str,
    lines: Vec<ReceiptLine>,
    points_to_use: u64,
    completed_at: DateTime<Utc>,
) -> ReceiptCompletion {
    ReceiptCompletion {
        receipt_id: ReceiptId::from(receipt_id),
        player_id: account.id.clone(),
        lines,
        points_to_use,
        completed_at,
    }
}
