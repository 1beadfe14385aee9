//! Application Use Cases

mod open_ticket;
mod place_order;

pub use open_ticket::{OpenTicketError, OpenTicketUseCase};
pub use place_order::{PlaceOrderError, PlaceOrderUseCase};
