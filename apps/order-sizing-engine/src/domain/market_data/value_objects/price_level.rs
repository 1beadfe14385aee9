//! A single aggregated price level of an order book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Price, Quantity};

/// Resting quantity aggregated at one price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Price of the level.
    pub price: Price,
    /// Total resting quantity at the price, in base units.
    pub quantity: Quantity,
}

impl PriceLevel {
    /// Create a new price level.
    #[must_use]
    pub const fn new(price: Price, quantity: Quantity) -> Self {
        Self { price, quantity }
    }

    /// Create a price level from raw `(price, quantity)` decimals.
    #[must_use]
    pub const fn from_pair(price: Decimal, quantity: Decimal) -> Self {
        Self::new(Price::new(price), Quantity::new(quantity))
    }
}

impl From<(Decimal, Decimal)> for PriceLevel {
    fn from((price, quantity): (Decimal, Decimal)) -> Self {
        Self::from_pair(price, quantity)
    }
}
