//! Per-market price and size granularity.
//!
//! All rounding is half-up to the nearest multiple of the step. Values on
//! the ticket are never negative, so half-up and half-away-from-zero agree.
//!
//! | Step | Decimal places | `round_to_step(137)` |
//! |------|----------------|----------------------|
//! | 0.01 | 2 | 137.00 |
//! | 0.05 | 2 | 137.00 |
//! | 25 | 0 | 125 |

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// Rounding granularity of one traded instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrecisionSpec {
    tick_size: Decimal,
    min_order_size: Decimal,
}

impl PrecisionSpec {
    /// Create a precision spec.
    ///
    /// # Errors
    ///
    /// Returns error if either step is zero or negative.
    pub fn new(tick_size: Decimal, min_order_size: Decimal) -> Result<Self, DomainError> {
        if tick_size <= Decimal::ZERO {
            return Err(DomainError::invalid_value(
                "tick_size",
                format!("Tick size must be positive, got {tick_size}"),
            ));
        }
        if min_order_size <= Decimal::ZERO {
            return Err(DomainError::invalid_value(
                "min_order_size",
                format!("Min order size must be positive, got {min_order_size}"),
            ));
        }
        Ok(Self {
            tick_size,
            min_order_size,
        })
    }

    /// Minimum price increment.
    #[must_use]
    pub const fn tick_size(&self) -> Decimal {
        self.tick_size
    }

    /// Minimum size increment in base units.
    #[must_use]
    pub const fn min_order_size(&self) -> Decimal {
        self.min_order_size
    }

    /// Fractional digits implied by the tick size.
    #[must_use]
    pub fn price_decimals(&self) -> u32 {
        decimal_places(self.tick_size)
    }

    /// Fractional digits implied by the min order size.
    #[must_use]
    pub fn size_decimals(&self) -> u32 {
        decimal_places(self.min_order_size)
    }

    /// Round a price to the nearest tick.
    ///
    /// Returns `None` if the intermediate arithmetic overflows.
    #[must_use]
    pub fn round_price(&self, price: Decimal) -> Option<Decimal> {
        round_to_step(price, self.tick_size)
    }

    /// Round a base size to the nearest min-order-size step.
    #[must_use]
    pub fn round_base_size(&self, size: Decimal) -> Option<Decimal> {
        round_to_step(size, self.min_order_size)
    }

    /// Round a quote-currency size to the size decimal places.
    #[must_use]
    pub fn round_quote_size(&self, size: Decimal) -> Decimal {
        size.round_dp_with_strategy(self.size_decimals(), RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Number of significant fractional digits in `step`.
///
/// Trailing zeros do not count: `0.050` has two places, `25` has none.
#[must_use]
pub fn decimal_places(step: Decimal) -> u32 {
    step.normalize().scale()
}

/// Round `value` half-up to the nearest multiple of `step`.
///
/// Returns `None` for a non-positive step or on overflow.
#[must_use]
pub fn round_to_step(value: Decimal, step: Decimal) -> Option<Decimal> {
    if step <= Decimal::ZERO {
        return None;
    }
    let steps = value
        .checked_div(step)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let rounded = steps.checked_mul(step)?;
    Some(rounded.round_dp(decimal_places(step)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(0.01), 2 ; "cents")]
    #[test_case(dec!(0.050), 2 ; "trailing zero ignored")]
    #[test_case(dec!(25), 0 ; "integer step")]
    #[test_case(dec!(1), 0 ; "unit step")]
    #[test_case(dec!(0.0001), 4 ; "four places")]
    fn decimal_places_cases(step: Decimal, expected: u32) {
        assert_eq!(decimal_places(step), expected);
    }

    #[test_case(dec!(100.07), dec!(0.05), dec!(100.05) ; "down to tick")]
    #[test_case(dec!(100.08), dec!(0.05), dec!(100.10) ; "up to tick")]
    #[test_case(dec!(100.075), dec!(0.05), dec!(100.10) ; "midpoint rounds up")]
    #[test_case(dec!(137), dec!(25), dec!(125) ; "nearest 25 down")]
    #[test_case(dec!(137.5), dec!(25), dec!(150) ; "nearest 25 midpoint")]
    #[test_case(dec!(1.23456), dec!(0.001), dec!(1.235) ; "three places")]
    #[test_case(dec!(0), dec!(0.1), dec!(0) ; "zero stays zero")]
    fn round_to_step_cases(value: Decimal, step: Decimal, expected: Decimal) {
        assert_eq!(round_to_step(value, step), Some(expected));
    }

    #[test]
    fn round_to_step_rejects_bad_step() {
        assert_eq!(round_to_step(dec!(1), dec!(0)), None);
        assert_eq!(round_to_step(dec!(1), dec!(-0.1)), None);
    }

    #[test]
    fn round_to_step_overflow_is_none() {
        assert_eq!(round_to_step(Decimal::MAX, dec!(0.0001)), None);
    }

    #[test]
    fn precision_spec_rejects_non_positive_steps() {
        assert!(PrecisionSpec::new(dec!(0), dec!(1)).is_err());
        assert!(PrecisionSpec::new(dec!(0.01), dec!(-1)).is_err());
        assert!(PrecisionSpec::new(dec!(0.01), dec!(0.1)).is_ok());
    }

    #[test]
    fn precision_spec_rounding() {
        let spec = PrecisionSpec::new(dec!(0.05), dec!(0.1)).unwrap();
        assert_eq!(spec.price_decimals(), 2);
        assert_eq!(spec.size_decimals(), 1);
        assert_eq!(spec.round_price(dec!(100.07)), Some(dec!(100.05)));
        assert_eq!(spec.round_base_size(dec!(2.46)), Some(dec!(2.5)));
        assert_eq!(spec.round_quote_size(dec!(250.04)), dec!(250.0));
        assert_eq!(spec.round_quote_size(dec!(250.05)), dec!(250.1));
    }
}
