//! Order Transport Port (Driven Port)
//!
//! Interface for handing a validated order to the trading venue.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_entry::{ExecutionInstruction, OrderSide, OrderType, SubmittableOrder};
use crate::domain::shared::{OrderId, Symbol, VenueOrderId};

/// Request to place an order on the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    /// Client order ID.
    pub client_order_id: OrderId,
    /// Market to trade.
    pub symbol: Symbol,
    /// Order side.
    pub side: OrderSide,
    /// Order type.
    pub order_type: OrderType,
    /// Venue order kind.
    pub instruction: ExecutionInstruction,
    /// Limit price, or the estimated execution price for market orders.
    pub price: Decimal,
    /// Size in base units.
    pub size: Decimal,
    /// When the request was built.
    pub created_at: DateTime<Utc>,
}

impl SubmitOrderRequest {
    /// Build a request from a validated order with a fresh client order ID.
    #[must_use]
    pub fn from_order(symbol: Symbol, order: &SubmittableOrder) -> Self {
        Self {
            client_order_id: OrderId::generate(),
            symbol,
            side: order.side(),
            order_type: order.order_type(),
            instruction: order.execution_instruction(),
            price: order.effective_price().amount(),
            size: order.base_size().amount(),
            created_at: Utc::now(),
        }
    }
}

/// Acknowledgment from the venue after order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportAck {
    /// Venue-assigned order ID.
    pub venue_order_id: VenueOrderId,
    /// Client order ID echoed back.
    pub client_order_id: OrderId,
    /// When the venue accepted the order.
    pub accepted_at: DateTime<Utc>,
}

/// Transport port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Network or connection failure.
    #[error("Transport connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Order rejected by the venue.
    #[error("Order rejected: {reason}")]
    Rejected {
        /// Rejection reason.
        reason: String,
    },

    /// Insufficient balance.
    #[error("Insufficient balance")]
    InsufficientFunds,

    /// Unknown error.
    #[error("Transport error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for order submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderTransportPort: Send + Sync {
    /// Submit an order to the venue.
    async fn submit_order(
        &self,
        request: SubmitOrderRequest,
    ) -> Result<TransportAck, TransportError>;
}
