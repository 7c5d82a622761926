use baize_types::ledger::{
    Event, MembershipTier, PlayerAccount, PlayerId, PointDirection, PointTransaction,
    TransactionLog, MAX_NAME_LENGTH,
};
use baize_types::LedgerError;

use crate::engine::ResetTarget;
use crate::layer::Layer;
use crate::store::{Key, Store, Value};

impl<'a, S: Store> Layer<'a, S> {
    pub(crate) async fn handle_register_player(
        &mut self,
        name: &str,
    ) -> Result<PlayerAccount, LedgerError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
            return Err(LedgerError::InvalidName {
                len: name.chars().count(),
                limit: MAX_NAME_LENGTH,
            });
        }

        let account = PlayerAccount::new(name.to_string());

        let mut index = self.load_player_index().await?;
        index.push(account.id.clone());
        self.insert(Key::PlayerIndex, Value::PlayerIndex(index));

        self.insert(
            Key::Log(account.id.clone()),
            Value::Log(TransactionLog::default()),
        );
        self.insert(
            Key::Player(account.id.clone()),
            Value::Player(account.clone()),
        );

        self.emit(Event::PlayerRegistered {
            player_id: account.id.clone(),
            name: account.name.clone(),
        });
        Ok(account)
    }

    pub(in crate::layer) async fn load_player(
        &mut self,
        player_id: &PlayerId,
    ) -> Result<PlayerAccount, LedgerError> {
        match self.get(&Key::Player(player_id.clone())).await? {
            Some(Value::Player(account)) => Ok(account),
            _ => Err(LedgerError::PlayerNotFound(player_id.clone())),
        }
    }

    pub(in crate::layer) async fn load_log(
        &mut self,
        player_id: &PlayerId,
    ) -> Result<TransactionLog, LedgerError> {
        match self.get(&Key::Log(player_id.clone())).await? {
            Some(Value::Log(log)) => Ok(log),
            _ => Ok(TransactionLog::default()),
        }
    }

    pub(in crate::layer) async fn load_player_index(
        &mut self,
    ) -> Result<Vec<PlayerId>, LedgerError> {
        match self.get(&Key::PlayerIndex).await? {
            Some(Value::PlayerIndex(index)) => Ok(index),
            _ => Ok(Vec::new()),
        }
    }

    /// Reset membership standing for one player or the whole venue.
    /// Returns the number of accounts reset.
    pub(crate) async fn handle_reset(
        &mut self,
        target: &ResetTarget,
    ) -> Result<u32, LedgerError> {
        match target {
            ResetTarget::Player(player_id) => {
                self.reset_account(player_id, true).await?;
                Ok(1)
            }
            ResetTarget::All => {
                let index = self.load_player_index().await?;
                for player_id in &index {
                    self.reset_account(player_id, false).await?;
                }
                Ok(index.len() as u32)
            }
        }
    }

    /// Clear a player's membership standing. Account cancellation
    /// (`clear_balance`) also forfeits the spendable balance, recorded as a
    /// `Use` entry so the log fold still matches the materialized balance.
    async fn reset_account(
        &mut self,
        player_id: &PlayerId,
        clear_balance: bool,
    ) -> Result<(), LedgerError> {
        let mut account = self.load_player(player_id).await?;

        let forfeited = clear_balance && account.reward_balance > 0;
        if forfeited {
            let balance_before = account.reward_balance;
            let mut log = self.load_log(player_id).await?;
            log.entries.push(PointTransaction::new(
                player_id.clone(),
                PointDirection::Use,
                balance_before,
                "membership cancelled".to_string(),
                balance_before,
                0,
                None,
            ));
            self.insert(Key::Log(player_id.clone()), Value::Log(log));
            account.reward_balance = 0;
        }

        account.total_cp_earned = 0;
        account.tier = MembershipTier::None;
        self.insert(Key::Player(player_id.clone()), Value::Player(account));

        self.emit(Event::MembershipReset {
            player_id: player_id.clone(),
            cleared_balance: clear_balance,
        });
        Ok(())
    }
}
