//! Place Order Use Case
//!
//! Submit path of the order ticket:
//!
//! 1. Market orders are priced against the supplied book
//! 2. The draft is validated into a [`SubmittableOrder`]
//! 3. The order goes out through the transport port
//! 4. On acknowledgement the draft is reset
//!
//! Any failure leaves the ticket exactly as the user left it.
//!
//! [`SubmittableOrder`]: crate::domain::order_entry::SubmittableOrder

use std::sync::Arc;

use crate::application::ports::{
    OrderTransportPort, SubmitOrderRequest, TransportAck, TransportError,
};
use crate::domain::market_data::OrderBookSnapshot;
use crate::domain::order_entry::{MarketPriceError, OrderSizingEngine, ValidationError};
use crate::domain::shared::Quantity;

/// Why an order was not placed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceOrderError {
    /// Draft failed submission checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Market order could not be priced from the book.
    #[error(transparent)]
    MarketPrice(#[from] MarketPriceError),

    /// Venue or network failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Use case for submitting the ticket's order.
pub struct PlaceOrderUseCase<T>
where
    T: OrderTransportPort,
{
    transport: Arc<T>,
}

impl<T> PlaceOrderUseCase<T>
where
    T: OrderTransportPort,
{
    /// Create a new `PlaceOrderUseCase`.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Place the ticket's current order.
    ///
    /// `book` is only read for market orders. Without it, a market order
    /// goes out at the price from the last `resolve_market_price` call, if
    /// that estimate is still valid.
    #[tracing::instrument(
        skip(self, engine, book),
        fields(
            market = %engine.market(),
            side = %engine.draft().side,
            order_type = %engine.draft().order_type,
        )
    )]
    pub async fn execute(
        &self,
        engine: &mut OrderSizingEngine,
        book: Option<&OrderBookSnapshot>,
    ) -> Result<TransportAck, PlaceOrderError> {
        let mut working = engine.clone();

        // Sizeless drafts fall through to validation and report MissingSize
        let has_size = working
            .draft()
            .base_size
            .filter(Quantity::is_positive)
            .is_some();
        if working.draft().order_type.is_market() && has_size {
            if let Some(book) = book {
                working.resolve_market_price(book)?;
            }
        }

        let order = working.validate_for_submit().inspect_err(|e| {
            tracing::debug!(error = %e, "Order not submittable");
        })?;
        let request = SubmitOrderRequest::from_order(working.market().clone(), &order);
        let client_order_id = request.client_order_id.clone();

        match self.transport.submit_order(request).await {
            Ok(ack) => {
                tracing::info!(
                    client_order_id = %ack.client_order_id,
                    venue_order_id = %ack.venue_order_id,
                    price = %order.effective_price(),
                    size = %order.base_size(),
                    instruction = %order.execution_instruction(),
                    "Order placed"
                );
                engine.reset();
                Ok(ack)
            }
            Err(e) => {
                tracing::warn!(
                    client_order_id = %client_order_id,
                    error = %e,
                    "Order submission failed"
                );
                Err(e.into())
            }
        }
    }
}
