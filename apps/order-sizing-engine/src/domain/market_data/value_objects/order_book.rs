//! Order book snapshot supplied by the market data collaborator.
//!
//! The snapshot is read-only to the engine. Level ordering is the
//! collaborator's contract: bids descending by price, asks ascending,
//! so index 0 is always the best level of a side.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PriceLevel;
use crate::domain::shared::{Price, Quantity};

/// One side of an order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookSide {
    /// Resting buy interest.
    Bids,
    /// Resting sell interest.
    Asks,
}

impl fmt::Display for BookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bids => write!(f, "BIDS"),
            Self::Asks => write!(f, "ASKS"),
        }
    }
}

/// Point-in-time view of resting liquidity for one market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Bid levels, best (highest) first.
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best (lowest) first.
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
}

impl OrderBookSnapshot {
    /// Create a snapshot from already-ordered levels.
    #[must_use]
    pub const fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        Self { bids, asks }
    }

    /// Levels of `side` in priority order.
    #[must_use]
    pub fn levels(&self, side: BookSide) -> &[PriceLevel] {
        match side {
            BookSide::Bids => &self.bids,
            BookSide::Asks => &self.asks,
        }
    }

    /// Best price on `side`, if the side has any level.
    #[must_use]
    pub fn best_price(&self, side: BookSide) -> Option<Price> {
        self.levels(side).first().map(|level| level.price)
    }

    /// Highest bid.
    #[must_use]
    pub fn best_bid(&self) -> Option<Price> {
        self.best_price(BookSide::Bids)
    }

    /// Lowest ask.
    #[must_use]
    pub fn best_ask(&self) -> Option<Price> {
        self.best_price(BookSide::Asks)
    }

    /// Total visible quantity on `side`.
    #[must_use]
    pub fn depth(&self, side: BookSide) -> Quantity {
        self.levels(side)
            .iter()
            .fold(Quantity::ZERO, |acc, level| acc + level.quantity)
    }
}
