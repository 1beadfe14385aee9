//! Order Entry Bounded Context
//!
//! Composes a single order ticket before it is handed to the venue.
//!
//! # Key Concepts
//!
//! - **Dual sizing**: base and quote sizes stay linked through the active price
//! - **Precision**: prices snap to the tick size, base sizes to the min order size
//! - **Order type rules**: market orders force IOC and have no limit price
//! - **Book walk**: market orders are priced from visible depth before submission

pub mod aggregate;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use aggregate::{OrderDraft, OrderSizingEngine, SubmittableOrder};
pub use errors::{DraftError, MarketPriceError, ValidationError};
pub use services::{MarketPriceEstimate, resolve_market_execution_price};
pub use value_objects::{
    ExecutionInstruction, OrderModifiers, OrderSide, OrderType, PrecisionSpec, SizeSource,
};
