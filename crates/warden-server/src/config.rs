//! Configuration file parsing for the server.
//!
//! Loads bind address, outbound endpoint, resolver and sweeper settings and
//! the static POI catalog from a TOML file.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use warden_domain::{Catalog, CatalogError, Poi};
use warden_resolver::{ResolverConfig, ResolverError};
use warden_sweeper::{SweeperConfig, SweeperError};

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid POI catalog
    #[error("Invalid POI catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Invalid resolver settings
    #[error("Invalid resolver settings: {0}")]
    Resolver(#[from] ResolverError),

    /// Invalid sweeper settings
    #[error("Invalid sweeper settings: {0}")]
    Sweeper(#[from] SweeperError),

    /// Any other out-of-range value
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 8080)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Game-server chat endpoint for outbound messages; log-only when absent
    #[serde(default)]
    pub outbound_url: Option<String>,

    /// Outbound request timeout in seconds (default: 5)
    #[serde(default = "default_outbound_timeout")]
    pub outbound_timeout_secs: u64,

    /// Maximum webhook calls handled at once (default: 32)
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,

    /// Name resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Expiry sweep settings
    #[serde(default)]
    pub sweeper: SweeperConfig,

    /// Static POI catalog, in listing order
    #[serde(default)]
    pub pois: Vec<Poi>,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8080
}

fn default_outbound_timeout() -> u64 {
    5
}

fn default_max_concurrent_requests() -> usize {
    32
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_requests must be greater than zero".to_string(),
            ));
        }
        self.resolver.validate()?;
        self.sweeper.validate()?;
        self.catalog()?;
        Ok(())
    }

    /// Build the POI catalog
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.pois.clone())
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            outbound_url: None,
            outbound_timeout_secs: default_outbound_timeout(),
            max_concurrent_requests: default_max_concurrent_requests(),
            resolver: ResolverConfig::default(),
            sweeper: SweeperConfig::default(),
            pois: vec![
                Poi::new("tisy-t4", &["Tisy Power Plant T4", "Tisy"]),
                Poi::new("nwaf", &["Northwest Airfield", "NWAF"]),
                Poi::new("trader", &["Green Mountain Trader"]).excluded(),
            ],
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.pois.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            outbound_url = "http://localhost:7000/chat"
            max_concurrent_requests = 8

            [resolver]
            threshold = 0.7

            [sweeper]
            sweep_interval_secs = 30
            claim_ttl_minutes = 45

            [[pois]]
            id = "tisy-t4"
            aliases = ["Tisy Power Plant T4", "Tisy"]

            [[pois]]
            id = "trader"
            aliases = ["Green Mountain Trader"]
            excluded = true
        "#;

        let config = ServerConfig::parse(toml).unwrap();
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.outbound_url.as_deref(), Some("http://localhost:7000/chat"));
        assert_eq!(config.outbound_timeout_secs, 5);
        assert_eq!(config.max_concurrent_requests, 8);
        assert_eq!(config.resolver.threshold, 0.7);
        assert_eq!(config.sweeper.claim_ttl_minutes, 45);
        assert_eq!(config.pois.len(), 2);
        assert!(config.pois[1].excluded);
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080

            [[pois]]
            id = "tisy"
        "#;

        let config = ServerConfig::parse(toml).unwrap();
        assert!(config.outbound_url.is_none());
        assert_eq!(config.max_concurrent_requests, 32);
        assert_eq!(config.resolver.threshold, 0.6);
        assert_eq!(config.sweeper.sweep_interval_secs, 60);
        assert_eq!(config.sweeper.claim_ttl_minutes, 60);
    }

    #[test]
    fn test_catalog_only_config_uses_bind_defaults() {
        let toml = r#"
            [[pois]]
            id = "nwaf"
            aliases = ["Northwest Airfield"]
        "#;

        let config = ServerConfig::parse(toml).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080
        "#;
        assert!(matches!(
            ServerConfig::parse(toml),
            Err(ConfigError::Catalog(CatalogError::Empty))
        ));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080

            [resolver]
            threshold = 2.0

            [[pois]]
            id = "tisy"
        "#;
        assert!(matches!(ServerConfig::parse(toml), Err(ConfigError::Resolver(_))));
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let mut config = ServerConfig::default_test_config();
        config.max_concurrent_requests = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
