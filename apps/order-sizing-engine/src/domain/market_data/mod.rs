//! Market Data Bounded Context
//!
//! Read-only views of resting liquidity handed to the engine by the
//! order book collaborator. Freshness is the collaborator's contract;
//! nothing here subscribes, caches, or checks staleness.

pub mod value_objects;

pub use value_objects::{BookSide, OrderBookSnapshot, PriceLevel};
