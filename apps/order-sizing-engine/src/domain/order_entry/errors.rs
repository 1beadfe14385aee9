//! Order entry errors.
//!
//! Every variant is recoverable: the caller corrects the draft and retries.

use rust_decimal::Decimal;
use std::fmt;

use super::value_objects::OrderType;

/// A setter was rejected and the draft left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Post-Only / IOC are fixed for this order type.
    ModifiersLocked {
        /// Current order type.
        order_type: OrderType,
    },

    /// The limit price field is disabled for this order type.
    LimitPriceLocked {
        /// Current order type.
        order_type: OrderType,
    },

    /// Sizes and prices cannot be negative.
    NegativeValue {
        /// Field the value was meant for.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// The value cannot be represented after rounding or conversion.
    OutOfRange {
        /// Field the value was meant for.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModifiersLocked { order_type } => {
                write!(f, "Order modifiers are fixed for {order_type} orders")
            }
            Self::LimitPriceLocked { order_type } => {
                write!(f, "Limit price cannot be set on {order_type} orders")
            }
            Self::NegativeValue { field, value } => {
                write!(f, "Invalid {field}: {value} is negative")
            }
            Self::OutOfRange { field, value } => {
                write!(f, "Invalid {field}: {value} is out of range")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// The draft cannot be released for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Limit order without a limit price.
    MissingPrice,
    /// Base size absent or not positive.
    MissingSize,
    /// Post-Only and IOC both set.
    IncompatibleModifiers,
    /// Market order whose execution price was never resolved.
    PriceNotResolved,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrice => write!(f, "Missing price"),
            Self::MissingSize => write!(f, "Missing size"),
            Self::IncompatibleModifiers => {
                write!(f, "Post-Only and Immediate-Or-Cancel are mutually exclusive")
            }
            Self::PriceNotResolved => {
                write!(f, "Market order price has not been resolved from the book")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A book walk could not produce an execution price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketPriceError {
    /// Visible depth is smaller than the requested size.
    InsufficientDepth {
        /// Requested base size.
        requested: Decimal,
        /// Total visible quantity on the walked side.
        available: Decimal,
    },

    /// Requested size is zero or negative.
    InvalidTargetSize {
        /// Requested base size.
        requested: Decimal,
    },

    /// Level notionals exceed decimal range.
    Overflow,
}

impl fmt::Display for MarketPriceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientDepth {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient book depth: requested {requested}, available {available}"
                )
            }
            Self::InvalidTargetSize { requested } => {
                write!(f, "Market order size must be positive, got {requested}")
            }
            Self::Overflow => write!(f, "Book walk overflowed decimal range"),
        }
    }
}

impl std::error::Error for MarketPriceError {}
