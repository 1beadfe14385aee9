//! Market metadata adapters.

mod static_metadata;

pub use static_metadata::StaticMarketMetadata;
