//! Infrastructure Layer
//!
//! Adapters implementing the application ports, plus configuration loading.
//!
//! - [`config`]: YAML market configuration
//! - [`market_metadata`]: Config-backed [`MarketMetadataPort`](crate::application::ports::MarketMetadataPort)
//! - [`transport`]: In-memory [`OrderTransportPort`](crate::application::ports::OrderTransportPort)

pub mod config;
pub mod market_metadata;
pub mod transport;
