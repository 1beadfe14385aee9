//! The mutable order ticket.

use serde::{Deserialize, Serialize};

use super::SubmittableOrder;
use crate::domain::order_entry::errors::ValidationError;
use crate::domain::order_entry::value_objects::{
    OrderModifiers, OrderSide, OrderType, SizeSource,
};
use crate::domain::shared::{Price, Quantity};

/// Field-by-field state of an order being composed.
///
/// Normally owned and mutated by [`super::OrderSizingEngine`]. Fields are
/// public so a caller can build a draft directly; [`Self::validate_for_submit`]
/// re-checks everything the setters would have enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Buy or sell.
    pub side: OrderSide,
    /// Limit or market.
    pub order_type: OrderType,
    /// Post-Only / IOC flags.
    pub modifiers: OrderModifiers,
    /// User- or reference-seeded price, only meaningful for limit orders.
    pub limit_price: Option<Price>,
    /// Size in base-asset units.
    pub base_size: Option<Quantity>,
    /// Size in quote-asset units.
    pub quote_size: Option<Quantity>,
    /// Last mark/mid price from the price feed.
    pub reference_price: Price,
    /// Which size field was last entered by the user.
    pub size_source: Option<SizeSource>,
    /// Average price from the last successful book walk.
    pub market_price: Option<Price>,
}

impl OrderDraft {
    /// Empty draft: Buy, Limit, no prices or sizes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Price used to convert between base and quote sizes.
    ///
    /// The limit price when the order is a limit order with a price set,
    /// otherwise the reference price. `None` when that price is zero.
    #[must_use]
    pub fn active_price(&self) -> Option<Price> {
        match (self.order_type, self.limit_price) {
            (OrderType::Limit, Some(limit)) => limit.positive(),
            _ => self.reference_price.positive(),
        }
    }

    /// Gate the draft for submission.
    ///
    /// # Errors
    ///
    /// Checks run in order and the first failure is returned:
    /// - [`ValidationError::MissingPrice`]: limit order without a positive price
    /// - [`ValidationError::MissingSize`]: base size absent or not positive
    /// - [`ValidationError::IncompatibleModifiers`]: Post-Only and IOC both set
    /// - [`ValidationError::PriceNotResolved`]: market order with no book-walk price
    pub fn validate_for_submit(&self) -> Result<SubmittableOrder, ValidationError> {
        let limit_price = self.limit_price.filter(Price::is_positive);
        if self.order_type.requires_limit_price() && limit_price.is_none() {
            return Err(ValidationError::MissingPrice);
        }

        let base_size = self
            .base_size
            .filter(Quantity::is_positive)
            .ok_or(ValidationError::MissingSize)?;

        if !self.modifiers.is_consistent() {
            return Err(ValidationError::IncompatibleModifiers);
        }

        let effective_price = match self.order_type {
            OrderType::Limit => limit_price.ok_or(ValidationError::MissingPrice)?,
            OrderType::Market => self
                .market_price
                .filter(Price::is_positive)
                .ok_or(ValidationError::PriceNotResolved)?,
        };

        Ok(SubmittableOrder::new(
            self.side,
            self.order_type,
            effective_price,
            base_size,
            self.modifiers,
        ))
    }
}
