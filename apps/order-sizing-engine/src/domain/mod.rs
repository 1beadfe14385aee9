//! Domain Layer
//!
//! Pure order-ticket logic with no I/O. Everything here is synchronous and
//! deterministic; adapters feed it book snapshots and precision data.
//!
//! # Bounded Contexts
//!
//! - [`order_entry`]: Draft editing, size synchronization, validation
//! - [`market_data`]: Order book snapshots consumed by the book walk

pub mod market_data;
pub mod order_entry;
pub mod shared;
