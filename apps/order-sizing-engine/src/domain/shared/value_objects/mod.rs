//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod price;
mod quantity;
mod symbol;

pub use identifiers::{OrderId, VenueOrderId};
pub use price::Price;
pub use quantity::Quantity;
pub use symbol::Symbol;
