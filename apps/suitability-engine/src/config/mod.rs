//! Configuration module for the suitability engine.
//!
//! YAML configuration with environment variable interpolation and
//! validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use suitability_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod auth;
mod observability;
mod report;
mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::AuthConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, MetricsSettings, ObservabilityConfig};
pub use report::ReportConfig;
pub use server::ServerConfig;

/// Path read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// True when the file itself does not exist.
    #[must_use]
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::ReadError { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Report presentation.
    #[serde(default)]
    pub report: ReportConfig,
    /// Bearer tokens.
    #[serde(default)]
    pub auth: AuthConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. An unset or empty
/// variable without a default becomes the empty string.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    let metrics = &config.observability.metrics;
    if metrics.enabled && metrics.listen_port == config.server.http_port {
        return Err(ConfigError::ValidationError(
            "observability.metrics.listen_port and server.http_port must be different".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    if config.report.currency_symbol.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.currency_symbol must not be empty".to_string(),
        ));
    }

    for (token, owner) in &config.auth.tokens {
        if token.trim().is_empty() || owner.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "auth.tokens entries need a non-empty token and owner id".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.listen_address(), "0.0.0.0:8080");
        assert_eq!(config.observability.logging.format, "json");
        assert!(!config.observability.metrics.enabled);
        assert_eq!(config.observability.metrics.listen_port, 9090);
        assert_eq!(config.report.currency_symbol, "R$");
        assert!(config.auth.tokens.is_empty());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_mapping_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.server.http_port, 8080);
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r#"
server:
  http_port: 3000
  bind_address: "127.0.0.1"
observability:
  logging:
    level: debug
    format: pretty
    include_spans: false
  metrics:
    enabled: true
    listen_port: 9100
report:
  currency_symbol: "US$"
  institution: "Example Brokerage"
  system_version: "2.1.0"
auth:
  tokens:
    secret-1: advisor-1
"#;

        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.server.listen_address(), "127.0.0.1:3000");
        assert_eq!(config.observability.logging.level, "debug");
        assert!(!config.observability.logging.include_spans);
        assert!(config.observability.metrics.enabled);
        assert_eq!(config.report.institution, "Example Brokerage");
        assert_eq!(config.auth.tokens["secret-1"], "advisor-1");
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "symbol: ${SUITABILITY_CONFIG_TEST_NONEXISTENT_VAR:-R$}";
        assert_eq!(interpolate_env_vars(input), "symbol: R$");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "token: ${SUITABILITY_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "token: ");
    }

    #[test]
    fn test_validation_zero_port() {
        let Err(err) = load_config_from_string("server:\n  http_port: 0\n") else {
            panic!("expected error for zero port");
        };
        assert!(err.to_string().contains("http_port"));
    }

    #[test]
    fn test_validation_metrics_port_clash() {
        let yaml = r"
server:
  http_port: 9090
observability:
  metrics:
    enabled: true
    listen_port: 9090
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for clashing ports");
        };
        assert!(err.to_string().contains("must be different"));
    }

    #[test]
    fn test_metrics_port_clash_ignored_when_disabled() {
        let yaml = r"
server:
  http_port: 9090
";
        assert!(load_config_from_string(yaml).is_ok());
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for log format");
        };
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn test_validation_blank_currency_symbol() {
        let yaml = "report:\n  currency_symbol: \"  \"\n";
        assert!(load_config_from_string(yaml).is_err());
    }

    #[test]
    fn test_validation_blank_owner() {
        let yaml = "auth:\n  tokens:\n    secret: \"\"\n";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for blank owner");
        };
        assert!(err.to_string().contains("auth.tokens"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  http_port: 4321").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.server.http_port, 4321);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = load_config(path.to_str()).unwrap_err();
        assert!(err.is_missing_file());
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_parse_error_is_not_missing_file() {
        let err = load_config_from_string("server: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(!err.is_missing_file());
    }
}
