//! Order Entry Value Objects
//!
//! Immutable types describing an order ticket.

mod order_modifiers;
mod order_side;
mod order_type;
mod precision_spec;
mod size_source;

pub use order_modifiers::{ExecutionInstruction, OrderModifiers};
pub use order_side::OrderSide;
pub use order_type::OrderType;
pub use precision_spec::{PrecisionSpec, decimal_places, round_to_step};
pub use size_source::SizeSource;
