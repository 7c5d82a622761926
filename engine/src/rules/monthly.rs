use std::collections::BTreeMap;

use baize_types::ledger::{DailyRanking, MonthKey, MonthlyLeaderboard, MonthlyPoints, PlayerId};

/// Fold confirmed daily rankings into the month's standings.
///
/// Unconfirmed rankings and rankings outside the month are ignored. The
/// result replaces the month document wholesale, so totals always equal
/// this fold exactly regardless of confirmation order.
pub fn refold(key: MonthKey, rankings: &[DailyRanking]) -> MonthlyLeaderboard {
    let mut totals: BTreeMap<PlayerId, MonthlyPoints> = BTreeMap::new();
    for ranking in rankings {
        if !ranking.is_confirmed || !key.contains(ranking.date) {
            continue;
        }
        for entry in &ranking.entries {
            let slot = totals
                .entry(entry.player_id.clone())
                .or_insert_with(|| MonthlyPoints {
                    player_id: entry.player_id.clone(),
                    player_name: entry.player_name.clone(),
                    total_points: 0,
                    games_played: 0,
                });
            slot.total_points += entry.points;
            slot.games_played += 1;
        }
    }

    let mut standings: Vec<MonthlyPoints> = totals.into_values().collect();
    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    MonthlyLeaderboard { key, standings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baize_types::ledger::RankedEntry;
    use chrono::NaiveDate;

    fn ranking(day: u32, confirmed: bool, entries: Vec<(&str, u64)>) -> DailyRanking {
        DailyRanking {
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            entries: entries
                .into_iter()
                .enumerate()
                .map(|(i, (player, points))| RankedEntry {
                    player_id: PlayerId::from(player),
                    player_name: player.to_string(),
                    profit: 100 - i as i64,
                    rank: i as u32 + 1,
                    points,
                })
                .collect(),
            is_confirmed: confirmed,
            point_multiplier: 1,
        }
    }

    #[test]
    fn test_folds_confirmed_days_only() {
        let month = MonthKey::new(2026, 8).unwrap();
        let rankings = vec![
            ranking(1, true, vec![("p1", 8), ("p2", 5)]),
            ranking(2, true, vec![("p1", 5), ("p2", 8)]),
            ranking(3, false, vec![("p1", 8)]),
            ranking(4, true, vec![("p1", 3)]),
        ];

        let board = refold(month, &rankings);
        let p1 = board.standing_for(&PlayerId::from("p1")).unwrap();
        assert_eq!(p1.total_points, 16);
        assert_eq!(p1.games_played, 3);
        let p2 = board.standing_for(&PlayerId::from("p2")).unwrap();
        assert_eq!(p2.total_points, 13);
        assert_eq!(p2.games_played, 2);

        // p1 leads the month.
        assert_eq!(board.champion().unwrap().player_id, PlayerId::from("p1"));
    }

    #[test]
    fn test_ignores_rankings_outside_the_month() {
        let month = MonthKey::new(2026, 9).unwrap();
        let board = refold(month, &[ranking(1, true, vec![("p1", 8)])]);
        assert!(board.standings.is_empty());
        assert!(board.champion().is_none());
    }

    #[test]
    fn test_refold_is_reproducible() {
        let month = MonthKey::new(2026, 8).unwrap();
        let rankings = vec![
            ranking(1, true, vec![("p1", 8)]),
            ranking(2, true, vec![("p1", 5)]),
        ];
        let once = refold(month, &rankings);
        let twice = refold(month, &rankings);
        assert_eq!(once, twice);
    }
}
