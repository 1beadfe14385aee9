//! Validated, immutable order ready for the submission transport.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::order_entry::value_objects::{
    ExecutionInstruction, OrderModifiers, OrderSide, OrderType,
};
use crate::domain::shared::{Price, Quantity};

/// Snapshot produced by a successful draft validation.
///
/// Can only be built by [`super::OrderDraft::validate_for_submit`], so every
/// value of this type has passed the submission checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmittableOrder {
    side: OrderSide,
    order_type: OrderType,
    effective_price: Price,
    base_size: Quantity,
    modifiers: OrderModifiers,
}

impl SubmittableOrder {
    pub(super) const fn new(
        side: OrderSide,
        order_type: OrderType,
        effective_price: Price,
        base_size: Quantity,
        modifiers: OrderModifiers,
    ) -> Self {
        Self {
            side,
            order_type,
            effective_price,
            base_size,
            modifiers,
        }
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Limit price, or the resolved book-walk price for market orders.
    #[must_use]
    pub const fn effective_price(&self) -> Price {
        self.effective_price
    }

    /// Size in base units.
    #[must_use]
    pub const fn base_size(&self) -> Quantity {
        self.base_size
    }

    /// Post-Only / IOC flags.
    #[must_use]
    pub const fn modifiers(&self) -> OrderModifiers {
        self.modifiers
    }

    /// Venue order kind for the transport.
    #[must_use]
    pub const fn execution_instruction(&self) -> ExecutionInstruction {
        self.modifiers.execution_instruction()
    }

    /// Quote-currency value at the effective price.
    #[must_use]
    pub fn notional(&self) -> Option<Decimal> {
        self.effective_price
            .amount()
            .checked_mul(self.base_size.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn submittable_order_accessors() {
        let order = SubmittableOrder::new(
            OrderSide::Sell,
            OrderType::Market,
            Price::new(dec!(99.5)),
            Quantity::new(dec!(4)),
            OrderModifiers::MARKET,
        );

        assert_eq!(order.side(), OrderSide::Sell);
        assert_eq!(order.order_type(), OrderType::Market);
        assert_eq!(order.execution_instruction(), ExecutionInstruction::Ioc);
        assert_eq!(order.notional(), Some(dec!(398)));
    }

    #[test]
    fn submittable_order_serializes() {
        let order = SubmittableOrder::new(
            OrderSide::Buy,
            OrderType::Limit,
            Price::new(dec!(100)),
            Quantity::new(dec!(5)),
            OrderModifiers::NONE,
        );
        let json = serde_json::to_value(order).unwrap();
        assert_eq!(json["side"], "BUY");
        assert_eq!(json["order_type"], "LIMIT");
        assert_eq!(json["effective_price"], "100");
    }
}
