// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Order Sizing Engine - Rust Core Library
//!
//! Keeps a trading ticket consistent before the order leaves the client.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure, synchronous ticket logic
//!   - `order_entry`: `OrderSizingEngine` aggregate, draft, validation, book walk
//!   - `market_data`: Order book snapshots
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `MarketMetadataPort`, `OrderTransportPort`
//!   - `use_cases`: `OpenTicket`, `PlaceOrder`
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `config`: YAML market configuration
//!   - `market_metadata`: Config-backed precision lookup
//!   - `transport`: In-memory order transport
//!
//! # Example
//!
//! ```rust,ignore
//! use order_sizing_engine::{OrderSizingEngine, PrecisionSpec, Symbol};
//! use rust_decimal_macros::dec;
//!
//! let mut engine = OrderSizingEngine::new(
//!     Symbol::new("SOL/USDC"),
//!     PrecisionSpec::new(dec!(0.001), dec!(0.1))?,
//! );
//! engine.set_reference_price(dec!(150))?;
//! engine.set_quote_size(dec!(300))?;
//! assert_eq!(engine.draft().base_size.map(|q| q.amount()), Some(dec!(2)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Order ticket logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and configuration.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::market_data::{BookSide, OrderBookSnapshot, PriceLevel};
pub use domain::order_entry::{
    DraftError, ExecutionInstruction, MarketPriceError, MarketPriceEstimate, OrderDraft,
    OrderModifiers, OrderSide, OrderSizingEngine, OrderType, PrecisionSpec, SizeSource,
    SubmittableOrder, ValidationError, resolve_market_execution_price,
};
pub use domain::shared::{DomainError, OrderId, Price, Quantity, Symbol, VenueOrderId};

// Application re-exports
pub use application::ports::{
    MarketMetadataPort, MetadataError, OrderTransportPort, SubmitOrderRequest, TransportAck,
    TransportError,
};
pub use application::use_cases::{
    OpenTicketError, OpenTicketUseCase, PlaceOrderError, PlaceOrderUseCase,
};

// Infrastructure re-exports
pub use infrastructure::config::{Config, ConfigError, MarketConfig, load_config};
pub use infrastructure::market_metadata::StaticMarketMetadata;
pub use infrastructure::transport::InMemoryOrderTransport;
