use chrono::NaiveDate;

use baize_types::ledger::{Event, GameSettlement, ProfitRecord};
use baize_types::LedgerError;

use crate::layer::Layer;
use crate::store::{Key, Store, Value};

impl<'a, S: Store> Layer<'a, S> {
    /// Ingest one game-settlement event into the day's profit records.
    ///
    /// A missing final stack rejects the event outright: zero-filling would
    /// silently misrepresent the player's result.
    pub(crate) async fn handle_record_settlement(
        &mut self,
        settlement: GameSettlement,
    ) -> Result<ProfitRecord, LedgerError> {
        let final_stack = settlement
            .final_stack
            .ok_or_else(|| LedgerError::MissingFinalStack {
                player_id: settlement.player_id.clone(),
            })?;

        self.load_player(&settlement.player_id).await?;

        let date = settlement.played_at.date_naive();
        let record = ProfitRecord {
            player_id: settlement.player_id,
            player_name: settlement.player_name,
            buy_in: settlement.buy_in,
            rebuys: settlement.rebuys,
            final_stack,
            recorded_at: settlement.played_at,
        };

        let mut day = self.load_profit_day(date).await?;
        day.push(record.clone());
        self.insert(Key::ProfitDay(date), Value::ProfitDay(day));

        self.emit(Event::GameRecorded {
            player_id: record.player_id.clone(),
            date,
            profit: record.profit(),
        });
        Ok(record)
    }

    pub(in crate::layer) async fn load_profit_day(
        &mut self,
        date: NaiveDate,
    ) -> Result<Vec<ProfitRecord>, LedgerError> {
        match self.get(&Key::ProfitDay(date)).await? {
            Some(Value::ProfitDay(records)) => Ok(records),
            _ => Ok(Vec::new()),
        }
    }
}
