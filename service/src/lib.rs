use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

use baize_types::ledger::VenueConfig;

pub mod api;

pub use api::Api;

/// On-disk configuration for the service binary.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub venue: VenueConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            venue: VenueConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("point multiplier must be at least 1 (got {value})")]
    InvalidMultiplier { value: u64 },
    #[error("{field} must be at most 100 percent (got {value})")]
    InvalidRate { field: &'static str, value: u64 },
    #[error(
        "tier thresholds must be non-decreasing (silver {silver}, gold {gold}, platinum {platinum})"
    )]
    NonMonotonicTiers {
        silver: u64,
        gold: u64,
        platinum: u64,
    },
}

pub struct ValidatedConfig {
    pub log_level: Level,
    pub venue: VenueConfig,
}

impl Config {
    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        let log_level = Level::from_str(&self.log_level).map_err(|_| {
            ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            }
        })?;

        let venue = self.venue;
        if venue.double_point_multiplier == 0 {
            return Err(ConfigError::InvalidMultiplier {
                value: venue.double_point_multiplier,
            });
        }
        if venue.base_earn_rate_percent > 100 {
            return Err(ConfigError::InvalidRate {
                field: "base earn rate",
                value: venue.base_earn_rate_percent,
            });
        }
        if let Some(rate) = venue.earn_rate_overrides.values().find(|&&rate| rate > 100) {
            return Err(ConfigError::InvalidRate {
                field: "earn rate override",
                value: *rate,
            });
        }
        let thresholds = venue.tier_thresholds;
        if thresholds.silver > thresholds.gold || thresholds.gold > thresholds.platinum {
            return Err(ConfigError::NonMonotonicTiers {
                silver: thresholds.silver,
                gold: thresholds.gold,
                platinum: thresholds.platinum,
            });
        }

        Ok(ValidatedConfig { log_level, venue })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_validate() {
        let validated = Config::default().validate().unwrap();
        assert_eq!(validated.log_level, Level::INFO);
    }

    #[test]
    fn test_config_parses_yaml() {
        let raw = r#"
log_level: debug
venue:
  point_table:
    awards: [10, 7, 5, 3, 1]
  double_point_days: ["2026-08-08"]
  double_point_multiplier: 2
  base_earn_rate_percent: 3
  earn_scope: stack_purchases_only
  tier_thresholds:
    silver: 100
    gold: 500
    platinum: 2000
"#;
        let config: Config = serde_yaml::from_str(raw).unwrap();
        let validated = config.validate().unwrap();
        assert_eq!(validated.log_level, Level::DEBUG);
        assert_eq!(validated.venue.point_table.awards, [10, 7, 5, 3, 1]);
        assert_eq!(validated.venue.double_point_days.len(), 1);
        assert_eq!(
            validated.venue.earn_scope,
            baize_types::ledger::EarnScope::StackPurchasesOnly
        );
    }

    #[test]
    fn test_zero_multiplier_is_rejected() {
        let mut config = Config::default();
        config.venue.double_point_multiplier = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMultiplier { value: 0 })
        ));
    }

    #[test]
    fn test_non_monotonic_tiers_are_rejected() {
        let mut config = Config::default();
        config.venue.tier_thresholds.gold = config.venue.tier_thresholds.silver - 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonMonotonicTiers { .. })
        ));
    }

    #[test]
    fn test_rate_above_hundred_is_rejected() {
        let mut config = Config::default();
        config.venue.base_earn_rate_percent = 101;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let config = Config {
            log_level: "chatty".to_string(),
            venue: VenueConfig::default(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
    }
}
