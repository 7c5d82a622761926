use std::collections::BTreeMap;

use baize_types::ledger::{PlayerId, ProfitRecord, ProfitTotal};

/// Reduce a day's profit records to per-player net totals.
///
/// Zero-profit players are kept — they still rank. Output is ordered by
/// profit descending, ties by player id, so ranking is deterministic.
pub fn aggregate_day(records: &[ProfitRecord]) -> Vec<ProfitTotal> {
    let mut totals: BTreeMap<PlayerId, ProfitTotal> = BTreeMap::new();
    for record in records {
        let entry = totals
            .entry(record.player_id.clone())
            .or_insert_with(|| ProfitTotal {
                player_id: record.player_id.clone(),
                player_name: record.player_name.clone(),
                profit: 0,
            });
        entry.profit += record.profit();
    }

    let mut totals: Vec<ProfitTotal> = totals.into_values().collect();
    totals.sort_by(|a, b| {
        b.profit
            .cmp(&a.profit)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(player: &str, buy_in: u64, rebuys: u64, final_stack: u64) -> ProfitRecord {
        ProfitRecord {
            player_id: PlayerId::from(player),
            player_name: player.to_string(),
            buy_in,
            rebuys,
            final_stack,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_groups_and_sums_by_player() {
        let records = vec![
            record("p1", 300, 0, 500),  // +200
            record("p2", 300, 300, 400), // -200
            record("p1", 300, 0, 200),  // -100
        ];

        let totals = aggregate_day(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].player_id, PlayerId::from("p1"));
        assert_eq!(totals[0].profit, 100);
        assert_eq!(totals[1].profit, -200);
    }

    #[test]
    fn test_zero_profit_players_are_kept() {
        let records = vec![record("p1", 300, 0, 300)];
        let totals = aggregate_day(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].profit, 0);
    }

    #[test]
    fn test_empty_day() {
        assert!(aggregate_day(&[]).is_empty());
    }

    #[test]
    fn test_ties_order_by_player_id() {
        let records = vec![record("p2", 100, 0, 300), record("p1", 100, 0, 300)];
        let totals = aggregate_day(&records);
        assert_eq!(totals[0].player_id, PlayerId::from("p1"));
        assert_eq!(totals[1].player_id, PlayerId::from("p2"));
    }
}
