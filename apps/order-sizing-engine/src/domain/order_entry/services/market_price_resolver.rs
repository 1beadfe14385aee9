//! Market order price estimation by walking the book.
//!
//! A market order consumes resting liquidity from the opposite side,
//! best level first. The estimate is the size-weighted average over exactly
//! the quantity needed: the last level touched contributes only the part
//! required to reach the target.
//!
//! ```text
//! bids: 100 x 2, 99 x 3        SELL 4
//!   take 2 @ 100  -> 200
//!   take 2 @ 99   -> 198       (1 left resting at 99)
//!   avg = 398 / 4 = 99.5
//! ```
//!
//! When visible depth cannot fill the target the walk fails with
//! [`MarketPriceError::InsufficientDepth`]; choosing a fallback price is
//! left to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::market_data::OrderBookSnapshot;
use crate::domain::order_entry::errors::MarketPriceError;
use crate::domain::order_entry::value_objects::OrderSide;
use crate::domain::shared::{Price, Quantity};

/// Result of a successful book walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketPriceEstimate {
    /// Side of the market order.
    pub side: OrderSide,
    /// Size-weighted average execution price.
    pub average_price: Price,
    /// Base size the estimate covers.
    pub filled_size: Quantity,
    /// Price of the last level consumed.
    pub worst_price: Price,
    /// Number of levels touched, including a partially consumed last one.
    pub levels_consumed: usize,
}

/// Estimate the execution price of a market order of `target_size`.
///
/// Buy walks the asks, Sell walks the bids, in the snapshot's order.
/// Levels with no quantity are skipped.
///
/// # Errors
///
/// - [`MarketPriceError::InvalidTargetSize`] when `target_size` is not positive.
/// - [`MarketPriceError::InsufficientDepth`] when the side holds less than
///   `target_size` in total, including when it is empty.
/// - [`MarketPriceError::Overflow`] when notionals exceed decimal range.
pub fn resolve_market_execution_price(
    book: &OrderBookSnapshot,
    side: OrderSide,
    target_size: Quantity,
) -> Result<MarketPriceEstimate, MarketPriceError> {
    if !target_size.is_positive() {
        return Err(MarketPriceError::InvalidTargetSize {
            requested: target_size.amount(),
        });
    }

    let book_side = side.opposing_book_side();
    let target = target_size.amount();
    let mut remaining = target;
    let mut notional = Decimal::ZERO;
    let mut levels_consumed = 0;
    let mut worst_price = None;

    for level in book.levels(book_side) {
        if remaining <= Decimal::ZERO {
            break;
        }
        let available = level.quantity.amount();
        if available <= Decimal::ZERO {
            continue;
        }

        let take = available.min(remaining);
        let level_notional = level
            .price
            .amount()
            .checked_mul(take)
            .ok_or(MarketPriceError::Overflow)?;
        notional = notional
            .checked_add(level_notional)
            .ok_or(MarketPriceError::Overflow)?;
        remaining -= take;
        levels_consumed += 1;
        worst_price = Some(level.price);
    }

    let worst_price = match worst_price {
        Some(price) if remaining <= Decimal::ZERO => price,
        _ => {
            return Err(MarketPriceError::InsufficientDepth {
                requested: target,
                available: book.depth(book_side).amount(),
            });
        }
    };

    let average = notional
        .checked_div(target)
        .ok_or(MarketPriceError::Overflow)?;

    tracing::debug!(
        side = %side,
        book_side = %book_side,
        target = %target,
        average = %average,
        levels = levels_consumed,
        "Resolved market execution price"
    );

    Ok(MarketPriceEstimate {
        side,
        average_price: Price::new(average),
        filled_size: target_size,
        worst_price,
        levels_consumed,
    })
}
