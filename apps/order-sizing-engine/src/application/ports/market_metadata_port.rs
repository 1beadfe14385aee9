//! Market Metadata Port (Driven Port)
//!
//! Interface for looking up per-market rounding granularity.

use async_trait::async_trait;

use crate::domain::order_entry::PrecisionSpec;
use crate::domain::shared::Symbol;

/// Market metadata port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// No metadata for this market.
    #[error("Unknown market: {symbol}")]
    UnknownMarket {
        /// Requested market.
        symbol: String,
    },

    /// Metadata exists but cannot be used.
    #[error("Invalid metadata for {symbol}: {message}")]
    Invalid {
        /// Affected market.
        symbol: String,
        /// Error details.
        message: String,
    },
}

/// Port for market metadata lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketMetadataPort: Send + Sync {
    /// Get the tick size and min order size of a market.
    async fn precision_spec(&self, symbol: &Symbol) -> Result<PrecisionSpec, MetadataError>;
}
