//! Market configuration.
//!
//! Loads per-market precision from YAML with environment variable
//! interpolation, then validates it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_sizing_engine::infrastructure::config::load_config;
//!
//! // Load from default path (markets.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("config/markets.yaml"))?;
//! ```
//!
//! # Format
//!
//! ```yaml
//! default_market: ${ORDER_TICKET_MARKET:-SOL/USDC}
//! markets:
//!   SOL/USDC:
//!     tick_size: "0.001"
//!     min_order_size: "0.1"
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order_entry::PrecisionSpec;
use crate::domain::shared::{DomainError, Symbol};

/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "markets.yaml";

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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Market a new ticket opens on.
    #[serde(default)]
    pub default_market: Option<String>,
    /// Precision per market symbol.
    pub markets: BTreeMap<String, MarketConfig>,
}

impl Config {
    /// Default market as a symbol.
    #[must_use]
    pub fn default_symbol(&self) -> Option<Symbol> {
        self.default_market.as_deref().map(Symbol::new)
    }
}

/// Precision settings of one market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Minimum price increment.
    pub tick_size: Decimal,
    /// Minimum size increment in base units.
    pub min_order_size: Decimal,
}

impl MarketConfig {
    /// Convert to a domain precision spec.
    ///
    /// # Errors
    ///
    /// Returns error if either step is not positive.
    pub fn precision_spec(&self) -> Result<PrecisionSpec, DomainError> {
        PrecisionSpec::new(self.tick_size, self.min_order_size)
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to [`DEFAULT_CONFIG_PATH`].
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

    let config = load_config_from_string(&contents)?;
    tracing::debug!(path, markets = config.markets.len(), "Loaded market config");
    Ok(config)
}

/// Load configuration from a YAML string.
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
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become empty strings.
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<Option<regex::Regex>> = OnceLock::new();

    let Some(re) = ENV_VAR_REGEX
        .get_or_init(|| regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").ok())
    else {
        return input.to_string();
    };

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match cap.get(1).map(|m| std::env::var(m.as_str())) {
            Some(Ok(v)) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.markets.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one market must be configured".to_string(),
        ));
    }

    for (name, market) in &config.markets {
        Symbol::new(name.as_str())
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("markets.{name}: {e}")))?;
        market
            .precision_spec()
            .map_err(|e| ConfigError::ValidationError(format!("markets.{name}: {e}")))?;
    }

    if let Some(default) = config.default_symbol() {
        let known = config
            .markets
            .keys()
            .any(|name| Symbol::new(name.as_str()) == default);
        if !known {
            return Err(ConfigError::ValidationError(format!(
                "default_market '{default}' is not listed under markets"
            )));
        }
    }

    Ok(())
}
