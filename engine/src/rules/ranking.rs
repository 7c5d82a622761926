use chrono::NaiveDate;

use baize_types::ledger::{DailyRanking, PointTable, ProfitTotal, RankedEntry};

/// Build a provisional daily ranking from per-player profit totals.
///
/// Ranks are dense with tie-grouping: equal profits share a rank and an
/// award, the next distinct profit takes the next rank index — profits
/// `[500, 500, 300]` rank `[1, 1, 2]`. The day multiplier scales the table
/// award after lookup; it never shifts the rank.
pub fn build_ranking(
    date: NaiveDate,
    mut totals: Vec<ProfitTotal>,
    table: &PointTable,
    multiplier: u64,
) -> DailyRanking {
    totals.sort_by(|a, b| {
        b.profit
            .cmp(&a.profit)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    let mut entries = Vec::with_capacity(totals.len());
    let mut rank = 0u32;
    let mut previous_profit: Option<i64> = None;
    for total in totals {
        if previous_profit != Some(total.profit) {
            rank += 1;
            previous_profit = Some(total.profit);
        }
        entries.push(RankedEntry {
            player_id: total.player_id,
            player_name: total.player_name,
            profit: total.profit,
            rank,
            points: table.points_for_rank(rank) * multiplier,
        });
    }

    DailyRanking {
        date,
        entries,
        is_confirmed: false,
        point_multiplier: multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baize_types::ledger::PlayerId;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
    }

    fn table() -> PointTable {
        PointTable {
            awards: [8, 5, 3, 2, 1],
        }
    }

    fn total(player: &str, profit: i64) -> ProfitTotal {
        ProfitTotal {
            player_id: PlayerId::from(player),
            player_name: player.to_string(),
            profit,
        }
    }

    #[test]
    fn test_tied_profits_share_rank_and_points() {
        let ranking = build_ranking(
            date(),
            vec![total("p1", 500), total("p2", 500), total("p3", 300)],
            &table(),
            1,
        );

        let ranks: Vec<u32> = ranking.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 1, 2]);

        let points: Vec<u64> = ranking.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![8, 8, 5]);
    }

    #[test]
    fn test_double_point_day_scales_awards() {
        let ranking = build_ranking(date(), vec![total("p1", 500), total("p2", 300)], &table(), 2);
        let points: Vec<u64> = ranking.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![16, 10]);
        assert_eq!(ranking.point_multiplier, 2);
    }

    #[test]
    fn test_ranks_beyond_table_earn_nothing() {
        let totals = (0..7).map(|i| total(&format!("p{i}"), 700 - i * 100)).collect();
        let ranking = build_ranking(date(), totals, &table(), 1);
        let points: Vec<u64> = ranking.entries.iter().map(|e| e.points).collect();
        assert_eq!(points, vec![8, 5, 3, 2, 1, 0, 0]);
    }

    #[test]
    fn test_losing_days_still_rank() {
        let ranking = build_ranking(
            date(),
            vec![total("p1", -100), total("p2", -400), total("p3", 0)],
            &table(),
            1,
        );
        let ordered: Vec<(i64, u32)> =
            ranking.entries.iter().map(|e| (e.profit, e.rank)).collect();
        assert_eq!(ordered, vec![(0, 1), (-100, 2), (-400, 3)]);
    }

    #[test]
    fn test_empty_day_ranks_nobody() {
        let ranking = build_ranking(date(), vec![], &table(), 1);
        assert!(ranking.entries.is_empty());
        assert!(!ranking.is_confirmed);
    }

    proptest! {
        // Dense-rank structure: ranks start at 1, never skip, and move
        // exactly on strict profit decreases.
        #[test]
        fn prop_ranks_are_dense(profits in proptest::collection::vec(-1_000i64..1_000, 1..40)) {
            let totals = profits
                .iter()
                .enumerate()
                .map(|(i, &p)| total(&format!("p{i:02}"), p))
                .collect();
            let ranking = build_ranking(date(), totals, &table(), 1);

            prop_assert_eq!(ranking.entries[0].rank, 1);
            for pair in ranking.entries.windows(2) {
                prop_assert!(pair[0].profit >= pair[1].profit);
                if pair[0].profit == pair[1].profit {
                    prop_assert_eq!(pair[0].rank, pair[1].rank);
                    prop_assert_eq!(pair[0].points, pair[1].points);
                } else {
                    prop_assert_eq!(pair[1].rank, pair[0].rank + 1);
                }
            }
        }

        // The multiplier scales every award uniformly.
        #[test]
        fn prop_multiplier_scales_linearly(
            profits in proptest::collection::vec(-500i64..500, 1..20),
            multiplier in 1u64..5,
        ) {
            let totals: Vec<ProfitTotal> = profits
                .iter()
                .enumerate()
                .map(|(i, &p)| total(&format!("p{i:02}"), p))
                .collect();
            let base = build_ranking(date(), totals.clone(), &table(), 1);
            let scaled = build_ranking(date(), totals, &table(), multiplier);
            for (b, s) in base.entries.iter().zip(scaled.entries.iter()) {
                prop_assert_eq!(b.points * multiplier, s.points);
            }
        }
    }
}
