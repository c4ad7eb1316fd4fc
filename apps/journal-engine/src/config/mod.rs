//! Configuration module for the journal engine.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before the service starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use journal_engine::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Access configuration values
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod analytics;
mod observability;
mod persistence;
mod server;
mod users;

use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analytics::AnalyticsConfig;
pub use observability::{LOG_FORMATS, LoggingConfig, MetricsSettings, ObservabilityConfig};
pub use persistence::{PersistenceBackend, PersistenceConfig};
pub use server::ServerConfig;
pub use users::UserSeed;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "JOURNAL_CONFIG";

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

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Trade storage configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Analytics configuration.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Seeded user directory.
    #[serde(default)]
    pub users: Vec<UserSeed>,
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

/// Load configuration, falling back to defaults when the file does not exist.
///
/// # Errors
///
/// Returns a `ConfigError` if an existing file cannot be read, parsed, or
/// validated.
pub fn load_config_or_default(path: &str) -> Result<Config, ConfigError> {
    if !Path::new(path).exists() {
        tracing::info!(path, "Config file not found, using defaults");
        let config = Config::default();
        validate_config(&config)?;
        return Ok(config);
    }
    load_config(Some(path))
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = if interpolated.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_match.as_str()) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match.as_str(), &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.analytics.daily_window_days == 0 {
        return Err(ConfigError::ValidationError(
            "analytics.daily_window_days must be at least 1".to_string(),
        ));
    }

    if config.persistence.backend == PersistenceBackend::File
        && config.persistence.path.trim().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "persistence.path is required for the file backend".to_string(),
        ));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    let metrics = &config.observability.metrics;
    if metrics.enabled {
        let metrics_addr: SocketAddr = metrics.listen_addr.parse().map_err(|_| {
            ConfigError::ValidationError(format!(
                "observability.metrics.listen_addr '{}' is not a socket address",
                metrics.listen_addr
            ))
        })?;
        let same_port = metrics_addr.port() == config.server.http_port;
        let same_host = metrics_addr.ip().is_unspecified()
            || metrics_addr.ip().to_string() == config.server.bind_address
            || config.server.bind_address == "0.0.0.0";
        if same_port && same_host {
            return Err(ConfigError::ValidationError(
                "observability.metrics.listen_addr and the HTTP address must be different"
                    .to_string(),
            ));
        }
    }

    let mut seen = HashSet::new();
    for user in &config.users {
        if user.id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "users[].id must not be empty".to_string(),
            ));
        }
        if !seen.insert(user.id.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate user id '{}'",
                user.id
            )));
        }
    }

    Ok(())
}
