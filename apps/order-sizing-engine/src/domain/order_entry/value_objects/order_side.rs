//! Order side (buy or sell).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::market_data::BookSide;

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order.
    #[default]
    Buy,
    /// Sell order.
    Sell,
}

impl OrderSide {
    /// Book side this order would take liquidity from.
    ///
    /// Buy = asks, Sell = bids
    #[must_use]
    pub const fn opposing_book_side(&self) -> BookSide {
        match self {
            Self::Buy => BookSide::Asks,
            Self::Sell => BookSide::Bids,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}
