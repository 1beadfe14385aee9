//! Symbol value object for market identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum accepted symbol length.
const MAX_SYMBOL_LEN: usize = 32;

/// A market symbol naming a base/quote pair.
///
/// Examples: "SOL/USDC", "BTC/USDT", "ETH-PERP"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base asset of a `BASE/QUOTE` pair, or the whole symbol otherwise.
    #[must_use]
    pub fn base_asset(&self) -> &str {
        self.0.split_once('/').map_or(self.0.as_str(), |(base, _)| base)
    }

    /// Quote asset of a `BASE/QUOTE` pair.
    #[must_use]
    pub fn quote_asset(&self) -> Option<&str> {
        self.0.split_once('/').map(|(_, quote)| quote)
    }

    /// Validate the symbol.
    ///
    /// # Errors
    ///
    /// Returns error if symbol is empty, too long, or contains invalid characters.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            return Err(DomainError::invalid_value("symbol", "Symbol cannot be empty"));
        }

        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(DomainError::invalid_value(
                "symbol",
                "Symbol exceeds maximum length",
            ));
        }

        // Alphanumeric plus pair separators
        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_'))
        {
            return Err(DomainError::invalid_value(
                "symbol",
                "Symbol contains invalid characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
