//! Application Layer
//!
//! Orchestrates the order ticket against the outside world:
//!
//! - **Ports**: Market metadata lookup and order transport
//! - **Use Cases**: Opening a ticket and placing its order

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
