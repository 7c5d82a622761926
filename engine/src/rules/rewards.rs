use baize_types::ledger::{EarnScope, ReceiptCompletion};

/// Receipt spend eligible for cashback under the configured scope.
pub fn eligible_amount(completion: &ReceiptCompletion, scope: EarnScope) -> u64 {
    match scope {
        EarnScope::All => completion.line_total(),
        EarnScope::StackPurchasesOnly => completion.stack_total(),
    }
}

/// Cashback award: `floor(eligible * rate / 100)`.
pub fn cashback(eligible: u64, rate_percent: u64) -> u64 {
    (eligible as u128 * rate_percent as u128 / 100) as u64
}
