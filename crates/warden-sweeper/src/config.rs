//! Configuration for Sweeper operations
//!
//! Defines the claim TTL and the sweep interval.

use crate::SweeperError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Sweeper service
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use warden_sweeper::SweeperConfig;
///
/// let config = SweeperConfig::default();
/// assert_eq!(config.sweep_interval(), Duration::from_secs(60));
/// assert_eq!(config.claim_ttl(), Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweeperConfig {
    /// How often to run the sweep cycle (in seconds)
    /// Default: 60 (once per minute)
    pub sweep_interval_secs: u64,

    /// Age at which a claim becomes eligible for eviction (in minutes)
    /// Default: 60
    pub claim_ttl_minutes: u64,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            sweep_interval_secs: 60,
            claim_ttl_minutes: 60,
        }
    }
}

impl SweeperConfig {
    /// Get sweep interval as Duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Get claim TTL as Duration
    pub fn claim_ttl(&self) -> Duration {
        Duration::from_secs(self.claim_ttl_minutes.saturating_mul(60))
    }

    /// Reject zero interval or zero TTL
    pub fn validate(&self) -> Result<(), SweeperError> {
        if self.sweep_interval_secs == 0 {
            return Err(SweeperError::Config(
                "sweep_interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.claim_ttl_minutes == 0 {
            return Err(SweeperError::Config(
                "claim_ttl_minutes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SweeperConfig::default();
        assert_eq!(config.sweep_interval_secs, 60);
        assert_eq!(config.claim_ttl_minutes, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duration_conversions() {
        let config = SweeperConfig {
            sweep_interval_secs: 30,
            claim_ttl_minutes: 90,
        };
        assert_eq!(config.sweep_interval(), Duration::from_secs(30));
        assert_eq!(config.claim_ttl(), Duration::from_secs(90 * 60));
    }

    #[test]
    fn test_claim_ttl_saturates() {
        let config = SweeperConfig {
            claim_ttl_minutes: u64::MAX,
            ..Default::default()
        };
        assert_eq!(config.claim_ttl(), Duration::from_secs(u64::MAX));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = SweeperConfig {
            sweep_interval_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SweeperError::Config(_))));

        let config = SweeperConfig {
            claim_ttl_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_partial() {
        let config: SweeperConfig = serde_json::from_str(r#"{"claim_ttl_minutes": 30}"#).unwrap();
        assert_eq!(config.claim_ttl_minutes, 30);
        assert_eq!(config.sweep_interval_secs, 60);
    }
}
