use chrono::NaiveDate;
use tracing::{debug, info};

use baize_types::ledger::{
    DailyRanking, GameSettlement, MembershipTier, MonthKey, MonthlyLeaderboard, PlayerAccount,
    PlayerId, PointTransaction, ProfitRecord, Receipt, ReceiptCompletion, ReceiptId,
    ReceiptOutcome, TransactionLog, VenueConfig,
};
use baize_types::LedgerError;

use crate::layer::Layer;
use crate::store::{Key, Store, StoreError, Value};

/// Commit attempts per operation before a conflict surfaces to the caller
/// as transient. Bounded: a retry only loses when another unit of work
/// committed, so this is only reachable under sustained contention.
const MAX_COMMIT_ATTEMPTS: u32 = 8;

/// Target of a membership reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetTarget {
    /// Account cancellation: clears tier, lifetime CP, and the spendable
    /// balance.
    Player(PlayerId),
    /// Venue-wide program reset: clears tier and lifetime CP for every
    /// registered player; spendable balances are preserved.
    All,
}

/// Run one handler inside a fresh [`Layer`] and commit it, retrying the
/// whole read-modify-write when the commit loses a revision race.
macro_rules! transact {
    ($engine:expr, |$layer:ident| $body:expr) => {{
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let mut $layer = Layer::new(&$engine.store, &$engine.config);
            let value = match $body {
                Ok(value) => value,
                Err(err) => break Err(err),
            };
            match $layer.commit().await {
                Ok(events) => {
                    for event in &events {
                        debug!(?event, "ledger event");
                    }
                    break Ok(value);
                }
                Err(StoreError::Conflict(key)) if attempts < MAX_COMMIT_ATTEMPTS => {
                    debug!(?key, attempts, "commit conflict, retrying");
                }
                Err(StoreError::Conflict(_)) => break Err(LedgerError::Conflict { attempts }),
                Err(StoreError::Unavailable(message)) => {
                    break Err(LedgerError::Unavailable(message))
                }
            }
        }
    }};
}

/// Facade over the ranking and loyalty-points ledger.
///
/// Venue rules are injected at construction and passed explicitly into
/// every computation; the engine holds no other mutable state of its own.
pub struct LedgerEngine<S: Store> {
    store: S,
    config: VenueConfig,
}

impl<S: Store> LedgerEngine<S> {
    pub fn new(store: S, config: VenueConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &VenueConfig {
        &self.config
    }

    // === Mutations ===

    pub async fn register_player(&self, name: &str) -> Result<PlayerAccount, LedgerError> {
        let account: PlayerAccount =
            transact!(self, |layer| layer.handle_register_player(name).await)?;
        info!(player_id = %account.id, name = %account.name, "player registered");
        Ok(account)
    }

    /// Ingest one game-settlement event from the feed.
    pub async fn record_settlement(
        &self,
        settlement: GameSettlement,
    ) -> Result<ProfitRecord, LedgerError> {
        transact!(self, |layer| {
            layer.handle_record_settlement(settlement.clone()).await
        })
    }

    /// Recompute the provisional ranking for a date, replacing any prior
    /// provisional result. Fails with `AlreadyConfirmed` once the day has
    /// been settled.
    pub async fn recompute_ranking(&self, date: NaiveDate) -> Result<DailyRanking, LedgerError> {
        transact!(self, |layer| layer.handle_recompute_ranking(date).await)
    }

    /// Settle a business day: confirm the ranking (computing it fresh if no
    /// provisional one exists), refold the month, and mark the day's
    /// receipts settled. Idempotent: settling a confirmed day returns the
    /// stored ranking without side effects.
    pub async fn settle(&self, date: NaiveDate) -> Result<DailyRanking, LedgerError> {
        let (ranking, settled_now): (DailyRanking, bool) =
            transact!(self, |layer| layer.handle_settle(date).await)?;
        if settled_now {
            info!(%date, players = ranking.entries.len(), "business day settled");
        } else {
            debug!(%date, "settle skipped, day already confirmed");
        }
        Ok(ranking)
    }

    pub async fn earn_points(
        &self,
        player_id: PlayerId,
        amount: u64,
        reason: &str,
        receipt_id: Option<ReceiptId>,
    ) -> Result<PointTransaction, LedgerError> {
        transact!(self, |layer| {
            layer
                .handle_earn(
                    player_id.clone(),
                    amount,
                    reason.to_string(),
                    receipt_id.clone(),
                )
                .await
        })
    }

    pub async fn use_points(
        &self,
        player_id: PlayerId,
        amount: u64,
        reason: &str,
        receipt_id: Option<ReceiptId>,
    ) -> Result<PointTransaction, LedgerError> {
        transact!(self, |layer| {
            layer
                .handle_use(
                    player_id.clone(),
                    amount,
                    reason.to_string(),
                    receipt_id.clone(),
                )
                .await
        })
    }

    /// Settle a completed receipt: spend the requested points, then award
    /// cashback on the eligible amount. All-or-nothing.
    pub async fn settle_receipt(
        &self,
        completion: ReceiptCompletion,
    ) -> Result<ReceiptOutcome, LedgerError> {
        transact!(self, |layer| {
            layer.handle_settle_receipt(completion.clone()).await
        })
    }

    /// Reset membership standing. Returns the number of players reset.
    pub async fn reset_membership(&self, target: ResetTarget) -> Result<u32, LedgerError> {
        let count: u32 = transact!(self, |layer| layer.handle_reset(&target).await)?;
        info!(players = count, "membership reset");
        Ok(count)
    }

    // === Queries ===

    pub async fn player(&self, player_id: &PlayerId) -> Result<PlayerAccount, LedgerError> {
        match self.store.get(&Key::Player(player_id.clone())).await? {
            Some((_, Value::Player(account))) => Ok(account),
            _ => Err(LedgerError::PlayerNotFound(player_id.clone())),
        }
    }

    pub async fn tier(&self, player_id: &PlayerId) -> Result<MembershipTier, LedgerError> {
        Ok(self.player(player_id).await?.tier)
    }

    pub async fn transactions(&self, player_id: &PlayerId) -> Result<TransactionLog, LedgerError> {
        self.player(player_id).await?;
        match self.store.get(&Key::Log(player_id.clone())).await? {
            Some((_, Value::Log(log))) => Ok(log),
            _ => Ok(TransactionLog::default()),
        }
    }

    pub async fn daily_ranking(&self, date: NaiveDate) -> Result<Option<DailyRanking>, LedgerError> {
        match self.store.get(&Key::Ranking(date)).await? {
            Some((_, Value::Ranking(ranking))) => Ok(Some(ranking)),
            _ => Ok(None),
        }
    }

    pub async fn receipt(&self, receipt_id: &ReceiptId) -> Result<Option<Receipt>, LedgerError> {
        match self.store.get(&Key::Receipt(receipt_id.clone())).await? {
            Some((_, Value::Receipt(receipt))) => Ok(Some(receipt)),
            _ => Ok(None),
        }
    }

    pub async fn monthly_totals(
        &self,
        year: i32,
        month: u32,
    ) -> Result<MonthlyLeaderboard, LedgerError> {
        let key = MonthKey::new(year, month).ok_or(LedgerError::InvalidMonth { year, month })?;
        match self.store.get(&Key::Monthly(key)).await? {
            Some((_, Value::Monthly(leaderboard))) => Ok(leaderboard),
            _ => Ok(MonthlyLeaderboard::empty(key)),
        }
    }
}
