//! Order Entry Domain Services
//!
//! Stateless business logic that doesn't fit in the aggregate.

mod market_price_resolver;

pub use market_price_resolver::{MarketPriceEstimate, resolve_market_execution_price};
