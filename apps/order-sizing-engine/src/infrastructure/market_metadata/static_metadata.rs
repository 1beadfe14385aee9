//! Config-backed market metadata.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::{MarketMetadataPort, MetadataError};
use crate::domain::order_entry::PrecisionSpec;
use crate::domain::shared::Symbol;
use crate::infrastructure::config::Config;

/// Fixed table of market precisions, usually built from [`Config`].
#[derive(Debug, Clone, Default)]
pub struct StaticMarketMetadata {
    markets: HashMap<Symbol, PrecisionSpec>,
    default_market: Option<Symbol>,
}

impl StaticMarketMetadata {
    /// Create from explicit entries.
    #[must_use]
    pub fn new(markets: impl IntoIterator<Item = (Symbol, PrecisionSpec)>) -> Self {
        Self {
            markets: markets.into_iter().collect(),
            default_market: None,
        }
    }

    /// Build from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Invalid`] for a market whose steps are not
    /// positive. Configs from `load_config` are already validated.
    pub fn from_config(config: &Config) -> Result<Self, MetadataError> {
        let markets = config
            .markets
            .iter()
            .map(|(name, market)| {
                let symbol = Symbol::new(name.as_str());
                market
                    .precision_spec()
                    .map(|spec| (symbol, spec))
                    .map_err(|e| MetadataError::Invalid {
                        symbol: name.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            markets,
            default_market: config.default_symbol(),
        })
    }

    /// Market a new ticket should open on.
    #[must_use]
    pub const fn default_market(&self) -> Option<&Symbol> {
        self.default_market.as_ref()
    }

    /// Number of known markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Check if no markets are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

#[async_trait]
impl MarketMetadataPort for StaticMarketMetadata {
    async fn precision_spec(&self, symbol: &Symbol) -> Result<PrecisionSpec, MetadataError> {
        self.markets
            .get(symbol)
            .copied()
            .ok_or_else(|| MetadataError::UnknownMarket {
                symbol: symbol.to_string(),
            })
    }
}
