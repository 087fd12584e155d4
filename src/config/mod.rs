//! Configuration layers
//!
//! Precedence, lowest first:
//! 1. Built-in defaults
//! 2. Config file (`--config <path>`, TOML)
//! 3. CLI flags

use std::fs;
use std::io;
use std::path::Path;

use msgpair_server::ServerConfig;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::host::DEFAULT_CANNED_RESPONSE;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `tracing` filter directives used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Bytes the canned transport answers with
    pub canned_response: String,

    /// Server settings for loopback and `serve`
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            canned_response: String::from_utf8_lossy(DEFAULT_CANNED_RESPONSE).into_owned(),
            server: ServerConfig::default(),
        }
    }
}

/// Values supplied on the command line (layer 3)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_filter: Option<String>,
    pub canned_response: Option<String>,
}

impl Config {
    /// Parse and validate a TOML document; absent keys keep their defaults
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Built-in defaults, overlaid with `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI flags on top and re-validate
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Result<Self, ConfigError> {
        if let Some(log_filter) = overrides.log_filter {
            self.log_filter = log_filter;
        }
        if let Some(canned_response) = overrides.canned_response {
            self.canned_response = canned_response;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            ConfigError::ValidationError(format!("invalid log_filter '{}': {}", self.log_filter, e))
        })?;

        if self.server.max_request_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "server.max_request_bytes must be greater than 0".to_string(),
            ));
        }

        if self.server.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.canned_response, "1.95");
        assert_eq!(config.server, ServerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full() {
        let content = r#"
            log_filter = "msgpair=debug"
            canned_response = "50.0"

            [server]
            name = "bar"
            max_request_bytes = 4096
        "#;

        let config = Config::parse(content).unwrap();
        assert_eq!(config.log_filter, "msgpair=debug");
        assert_eq!(config.canned_response, "50.0");
        assert_eq!(config.server.name, "bar");
        assert_eq!(config.server.max_request_bytes, 4096);
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = Config::parse("canned_response = \"2\"").unwrap();
        assert_eq!(config.canned_response, "2");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::parse("canned = \"2\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_request_limit_rejected() {
        let result = Config::parse("[server]\nmax_request_bytes = 0");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_log_filter_rejected() {
        let result = Config::default().with_overrides(CliOverrides {
            log_filter: Some("msgpair=loud".to_string()),
            ..CliOverrides::default()
        });
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::parse("canned_response = \"2\"")
            .unwrap()
            .with_overrides(CliOverrides {
                log_filter: Some("debug".to_string()),
                canned_response: Some("3".to_string()),
            })
            .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.canned_response, "3");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nname = \"from-file\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.name, "from-file");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/msgpair.toml")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
