use baize_types::ledger::{
    Event, PlayerId, PointDirection, PointTransaction, Receipt, ReceiptCompletion, ReceiptId,
    ReceiptOutcome,
};
use baize_types::LedgerError;

use crate::layer::Layer;
use crate::rules;
use crate::store::{Key, Store, Value};

impl<'a, S: Store> Layer<'a, S> {
    /// Append an earn transaction: balance and lifetime CP move together,
    /// and the tier is re-evaluated, all in this unit of work.
    pub(crate) async fn handle_earn(
        &mut self,
        player_id: PlayerId,
        amount: u64,
        reason: String,
        related_receipt_id: Option<ReceiptId>,
    ) -> Result<PointTransaction, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let mut account = self.load_player(&player_id).await?;
        let mut log = self.load_log(&player_id).await?;

        let balance_before = account.reward_balance;
        let balance_after = balance_before + amount;
        let transaction = PointTransaction::new(
            player_id.clone(),
            PointDirection::Earn,
            amount,
            reason,
            balance_before,
            balance_after,
            related_receipt_id,
        );
        log.entries.push(transaction.clone());

        account.reward_balance = balance_after;
        account.total_cp_earned += amount;

        let tier = rules::membership::evaluate(
            account.total_cp_earned,
            &self.config().tier_thresholds,
        );
        if tier != account.tier {
            self.emit(Event::TierChanged {
                player_id: player_id.clone(),
                from: account.tier,
                to: tier,
            });
            account.tier = tier;
        }

        self.insert(Key::Log(player_id.clone()), Value::Log(log));
        self.insert(Key::Player(player_id.clone()), Value::Player(account));

        self.emit(Event::PointsEarned {
            player_id,
            amount,
            balance_after,
        });
        Ok(transaction)
    }

    /// Append a use transaction: balance decreases, lifetime CP and tier
    /// are untouched. A use beyond the balance fails with no effect.
    pub(crate) async fn handle_use(
        &mut self,
        player_id: PlayerId,
        amount: u64,
        reason: String,
        related_receipt_id: Option<ReceiptId>,
    ) -> Result<PointTransaction, LedgerError> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let mut account = self.load_player(&player_id).await?;
        if amount > account.reward_balance {
            return Err(LedgerError::InsufficientBalance {
                player_id,
                balance: account.reward_balance,
                requested: amount,
            });
        }
        let mut log = self.load_log(&player_id).await?;

        let balance_before = account.reward_balance;
        let balance_after = balance_before - amount;
        let transaction = PointTransaction::new(
            player_id.clone(),
            PointDirection::Use,
            amount,
            reason,
            balance_before,
            balance_after,
            related_receipt_id,
        );
        log.entries.push(transaction.clone());
        account.reward_balance = balance_after;

        self.insert(Key::Log(player_id.clone()), Value::Log(log));
        self.insert(Key::Player(player_id.clone()), Value::Player(account));

        self.emit(Event::PointsUsed {
            player_id,
            amount,
            balance_after,
        });
        Ok(transaction)
    }

    /// Settle a completed receipt against the rewards ledger: spend the
    /// requested points first, then award cashback on the eligible spend.
    pub(crate) async fn handle_settle_receipt(
        &mut self,
        completion: ReceiptCompletion,
    ) -> Result<ReceiptOutcome, LedgerError> {
        if self
            .get(&Key::Receipt(completion.receipt_id.clone()))
            .await?
            .is_some()
        {
            return Err(LedgerError::DuplicateReceipt(completion.receipt_id));
        }
        self.load_player(&completion.player_id).await?;

        let date = completion.completed_at.date_naive();

        let used = if completion.points_to_use > 0 {
            Some(
                self.handle_use(
                    completion.player_id.clone(),
                    completion.points_to_use,
                    "receipt payment".to_string(),
                    Some(completion.receipt_id.clone()),
                )
                .await?,
            )
        } else {
            None
        };

        let rate = self.config().earn_rate_for(date);
        let eligible = rules::rewards::eligible_amount(&completion, self.config().earn_scope);
        let award = rules::rewards::cashback(eligible, rate);
        let earned = if award > 0 {
            Some(
                self.handle_earn(
                    completion.player_id.clone(),
                    award,
                    "cashback".to_string(),
                    Some(completion.receipt_id.clone()),
                )
                .await?,
            )
        } else {
            None
        };

        let receipt = Receipt {
            id: completion.receipt_id.clone(),
            player_id: completion.player_id.clone(),
            date,
            total_amount: completion.line_total(),
            points_used: completion.points_to_use,
            points_earned: award,
            settled: false,
            completed_at: completion.completed_at,
            lines: completion.lines,
        };

        let mut day_index = match self.get(&Key::ReceiptDay(date)).await? {
            Some(Value::ReceiptDay(ids)) => ids,
            _ => Vec::new(),
        };
        day_index.push(receipt.id.clone());
        self.insert(Key::ReceiptDay(date), Value::ReceiptDay(day_index));
        self.insert(
            Key::Receipt(receipt.id.clone()),
            Value::Receipt(receipt.clone()),
        );

        self.emit(Event::ReceiptRecorded {
            receipt_id: receipt.id.clone(),
            player_id: receipt.player_id.clone(),
            points_used: receipt.points_used,
            points_earned: receipt.points_earned,
        });
        Ok(ReceiptOutcome {
            receipt,
            used,
            earned,
        })
    }
}
