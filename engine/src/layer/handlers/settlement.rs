use chrono::NaiveDate;

use baize_types::ledger::{DailyRanking, Event, MonthKey, MonthlyLeaderboard};
use baize_types::LedgerError;

use crate::layer::Layer;
use crate::rules;
use crate::store::{Key, Store, Value};

impl<'a, S: Store> Layer<'a, S> {
    /// Settle a business day: confirm the ranking, refold the month, and
    /// mark the day's receipts settled — one unit of work.
    ///
    /// Returns the confirmed ranking and whether this call performed the
    /// settlement. An already-confirmed day is returned as-is with no
    /// staged writes, so a repeated settle never re-awards monthly points.
    pub(crate) async fn handle_settle(
        &mut self,
        date: NaiveDate,
    ) -> Result<(DailyRanking, bool), LedgerError> {
        let existing = match self.get(&Key::Ranking(date)).await? {
            Some(Value::Ranking(ranking)) => Some(ranking),
            _ => None,
        };
        if let Some(ranking) = &existing {
            if ranking.is_confirmed {
                return Ok((ranking.clone(), false));
            }
        }

        let mut ranking = match existing {
            Some(provisional) => provisional,
            None => self.build_provisional(date).await?,
        };
        ranking.is_confirmed = true;
        self.insert(Key::Ranking(date), Value::Ranking(ranking.clone()));

        let month = MonthKey::of(date);
        self.refold_month(month).await?;

        let receipts_settled = self.mark_day_receipts_settled(date).await?;

        self.emit(Event::DaySettled {
            date,
            month,
            receipts_settled,
        });
        Ok((ranking, true))
    }

    /// Rebuild the month's standings from every confirmed ranking of the
    /// month. Full replace: re-running after any correction converges.
    pub(in crate::layer) async fn refold_month(
        &mut self,
        month: MonthKey,
    ) -> Result<MonthlyLeaderboard, LedgerError> {
        let mut confirmed = Vec::new();
        for day in month.days() {
            if let Some(Value::Ranking(ranking)) = self.get(&Key::Ranking(day)).await? {
                if ranking.is_confirmed {
                    confirmed.push(ranking);
                }
            }
        }
        let leaderboard = rules::monthly::refold(month, &confirmed);
        self.insert(Key::Monthly(month), Value::Monthly(leaderboard.clone()));
        Ok(leaderboard)
    }

    async fn mark_day_receipts_settled(&mut self, date: NaiveDate) -> Result<usize, LedgerError> {
        let ids = match self.get(&Key::ReceiptDay(date)).await? {
            Some(Value::ReceiptDay(ids)) => ids,
            _ => Vec::new(),
        };
        let mut settled = 0;
        for id in ids {
            if let Some(Value::Receipt(mut receipt)) = self.get(&Key::Receipt(id.clone())).await? {
                if !receipt.settled {
                    receipt.settled = true;
                    self.insert(Key::Receipt(id), Value::Receipt(receipt));
                    settled += 1;
                }
            }
        }
        Ok(settled)
    }
}
