use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque player identifier (uuid string at registration).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Membership tier, ordered lowest to highest.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MembershipTier {
    #[default]
    None,
    Silver,
    Gold,
    Platinum,
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MembershipTier::None => "none",
            MembershipTier::Silver => "silver",
            MembershipTier::Gold => "gold",
            MembershipTier::Platinum => "platinum",
        };
        f.write_str(name)
    }
}

/// Player account document.
///
/// `reward_balance` is a materialized view of the player's transaction log
/// and must always equal its fold; both are written in the same unit of work.
/// `total_cp_earned` only ever grows, except on explicit membership reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAccount {
    pub id: PlayerId,
    pub name: String,
    pub reward_balance: u64,
    pub total_cp_earned: u64,
    pub tier: MembershipTier,
    pub created_at: DateTime<Utc>,
}

impl PlayerAccount {
    pub fn new(name: String) -> Self {
        Self {
            id: PlayerId::generate(),
            name,
            reward_balance: 0,
            total_cp_earned: 0,
            tier: MembershipTier::None,
            created_at: Utc::now(),
        }
    }
}
