//! Configuration management for aviary
//!
//! This module handles loading, validation, and management of
//! aviary configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::ConfigError;

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Simulated provisioning timings for bulk registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisioningConfig {
    /// Per-account delay while a batch is being generated, in milliseconds
    #[serde(default = "default_account_delay_ms")]
    pub account_delay_ms: u64,
    /// Delay before a completed batch transitions to active, in milliseconds
    #[serde(default = "default_activation_delay_ms")]
    pub activation_delay_ms: u64,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            account_delay_ms: default_account_delay_ms(),
            activation_delay_ms: default_activation_delay_ms(),
        }
    }
}

fn default_account_delay_ms() -> u64 {
    500
}

fn default_activation_delay_ms() -> u64 {
    2000
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Download filename prefix: `<prefix>-<epoch-millis>.json`
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: default_filename_prefix(),
        }
    }
}

fn default_filename_prefix() -> String {
    "twitter-accounts".to_string()
}

/// Registry seeding toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start the registry with the demo account
    #[serde(default = "default_true")]
    pub demo_account: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_account: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Simulated provisioning timings
    #[serde(default)]
    pub provisioning: ProvisioningConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Registry seeding
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::IoError
            }
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|_| ConfigError::InvalidYaml)?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    ///
    /// The dashboard must run with zero setup, so a missing config file is
    /// not an error. Any other failure (bad YAML, invalid values) still is.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(ConfigError::FileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.export.filename_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.filename_prefix".to_string(),
                reason: "Filename prefix must not be empty".to_string(),
            });
        }

        // Ten minutes; anything above that is a typo, not a simulation
        if self.provisioning.activation_delay_ms > 600_000 {
            return Err(ConfigError::InvalidValue {
                field: "provisioning.activation_delay_ms".to_string(),
                reason: "Activation delay must be at most 600000 ms".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.provisioning.account_delay_ms, 500);
        assert_eq!(config.provisioning.activation_delay_ms, 2000);
        assert_eq!(config.export.filename_prefix, "twitter-accounts");
        assert!(config.seed.demo_account);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.provisioning.account_delay_ms, 500);
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let mut config = Config::default();
        config.export.filename_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_absurd_activation_delay() {
        let mut config = Config::default();
        config.provisioning.activation_delay_ms = 600_001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = serde_yaml::from_str(Config::generate_default()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_error_codes() {
        let err = ConfigError::FileNotFound {
            path: "config.yaml".to_string(),
        };
        assert_eq!(err.code(), error::ConfigErrorCode::FileNotFound);
        assert_eq!(err.severity(), error::ConfigErrorSeverity::Warning);

        let err = ConfigError::InvalidValue {
            field: "server.port".to_string(),
            reason: "Port must be greater than 0".to_string(),
        };
        assert_eq!(err.code(), error::ConfigErrorCode::InvalidValue);
        assert_eq!(err.severity(), error::ConfigErrorSeverity::Critical);
    }
}
