use baize_types::ledger::{MembershipTier, TierThresholds};

/// Derive a membership tier from lifetime earned CP.
///
/// Thresholds are walked highest to lowest; the first requirement met
/// wins. With valid (non-decreasing) thresholds this function never
/// regresses a player whose CP only grows.
pub fn evaluate(total_cp_earned: u64, thresholds: &TierThresholds) -> MembershipTier {
    if total_cp_earned >= thresholds.platinum {
        MembershipTier::Platinum
    } else if total_cp_earned >= thresholds.gold {
        MembershipTier::Gold
    } else if total_cp_earned >= thresholds.silver {
        MembershipTier::Silver
    } else {
        MembershipTier::None
    }
}
