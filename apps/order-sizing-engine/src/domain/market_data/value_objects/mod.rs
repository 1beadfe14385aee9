//! Market Data Value Objects

mod order_book;
mod price_level;

pub use order_book::{BookSide, OrderBookSnapshot};
pub use price_level::PriceLevel;
