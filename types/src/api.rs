//! Request and response bodies for the staff-facing HTTP surface.
//!
//! Inbound events (`GameSettlement`, `ReceiptCompletion`) and ledger
//! documents serialize directly; the types here cover the remaining
//! request shapes and projections.

use serde::{Deserialize, Serialize};

use crate::ledger::{MembershipTier, PlayerId, ReceiptId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPlayer {
    pub name: String,
}

/// Body for the earn and use endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsRequest {
    pub amount: u64,
    pub reason: String,
    #[serde(default)]
    pub receipt_id: Option<ReceiptId>,
}

/// Body for the membership-reset endpoint. A missing `player_id` resets the
/// whole venue (tier and lifetime CP only); naming a player cancels that
/// account's membership, clearing its balance as well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub player_id: Option<PlayerId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub players_reset: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierResponse {
    pub player_id: PlayerId,
    pub tier: MembershipTier,
    pub total_cp_earned: u64,
}

/// Uniform error body returned for every failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
