use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::PlayerId;

/// Calendar month key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Returns `None` for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every calendar date of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let (year, month) = (self.year, self.month);
        (1..=31).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Per-player accumulation of one month's confirmed rankings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoints {
    pub player_id: PlayerId,
    pub player_name: String,
    pub total_points: u64,
    pub games_played: u32,
}

/// The full monthly standings document, replaced wholesale on every refold
/// so totals always reproduce the confirmed rankings exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLeaderboard {
    pub key: MonthKey,
    pub standings: Vec<MonthlyPoints>,
}

impl MonthlyLeaderboard {
    pub fn empty(key: MonthKey) -> Self {
        Self {
            key,
            standings: Vec::new(),
        }
    }

    /// Top standing of the month, if any day has been confirmed.
    pub fn champion(&self) -> Option<&MonthlyPoints> {
        self.standings.first()
    }

    pub fn standing_for(&self, player_id: &PlayerId) -> Option<&MonthlyPoints> {
        self.standings.iter().find(|s| &s.player_id == player_id)
    }
}
