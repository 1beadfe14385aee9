//! Open Ticket Use Case

use std::sync::Arc;

use crate::application::ports::{MarketMetadataPort, MetadataError};
use crate::domain::order_entry::OrderSizingEngine;
use crate::domain::shared::{DomainError, Symbol};

/// Failure to open or switch a ticket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpenTicketError {
    /// Market symbol is malformed.
    #[error(transparent)]
    InvalidSymbol(#[from] DomainError),

    /// Precision lookup failed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Use case for opening an order ticket on a market.
pub struct OpenTicketUseCase<M>
where
    M: MarketMetadataPort,
{
    metadata: Arc<M>,
}

impl<M> OpenTicketUseCase<M>
where
    M: MarketMetadataPort,
{
    /// Create a new `OpenTicketUseCase`.
    pub const fn new(metadata: Arc<M>) -> Self {
        Self { metadata }
    }

    /// Open a fresh ticket for `symbol`.
    #[tracing::instrument(skip(self))]
    pub async fn open(&self, symbol: &str) -> Result<OrderSizingEngine, OpenTicketError> {
        let symbol = Symbol::new(symbol);
        symbol.validate()?;
        let precision = self.metadata.precision_spec(&symbol).await?;

        tracing::info!(
            market = %symbol,
            base = symbol.base_asset(),
            quote = symbol.quote_asset().unwrap_or_default(),
            tick_size = %precision.tick_size(),
            min_order_size = %precision.min_order_size(),
            "Order ticket opened"
        );
        Ok(OrderSizingEngine::new(symbol, precision))
    }

    /// Move an open ticket to `symbol`.
    ///
    /// The ticket is left on its current market if the lookup fails.
    #[tracing::instrument(skip(self, engine), fields(from = %engine.market()))]
    pub async fn switch(
        &self,
        engine: &mut OrderSizingEngine,
        symbol: &str,
    ) -> Result<(), OpenTicketError> {
        let symbol = Symbol::new(symbol);
        symbol.validate()?;
        let precision = self.metadata.precision_spec(&symbol).await?;
        engine.switch_market(symbol, precision);
        Ok(())
    }
}
