use chrono::NaiveDate;

use baize_types::ledger::{DailyRanking, Event};
use baize_types::LedgerError;

use crate::layer::Layer;
use crate::rules;
use crate::store::{Key, Store, Value};

impl<'a, S: Store> Layer<'a, S> {
    /// Recompute the provisional ranking for a date, replacing any prior
    /// provisional result in full. A confirmed day is immutable: it has
    /// already been folded into monthly totals.
    pub(crate) async fn handle_recompute_ranking(
        &mut self,
        date: NaiveDate,
    ) -> Result<DailyRanking, LedgerError> {
        if let Some(Value::Ranking(existing)) = self.get(&Key::Ranking(date)).await? {
            if existing.is_confirmed {
                return Err(LedgerError::AlreadyConfirmed { date });
            }
        }

        let ranking = self.build_provisional(date).await?;
        self.insert(Key::Ranking(date), Value::Ranking(ranking.clone()));

        self.emit(Event::RankingRecomputed {
            date,
            players: ranking.entries.len(),
        });
        Ok(ranking)
    }

    pub(in crate::layer) async fn build_provisional(
        &mut self,
        date: NaiveDate,
    ) -> Result<DailyRanking, LedgerError> {
        let records = self.load_profit_day(date).await?;
        let totals = rules::profit::aggregate_day(&records);
        let multiplier = self.config().multiplier_for(date);
        Ok(rules::ranking::build_ranking(
            date,
            totals,
            &self.config().point_table,
            multiplier,
        ))
    }
}
