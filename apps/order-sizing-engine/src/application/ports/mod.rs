//! Application Ports (Driven)
//!
//! Interfaces the use cases need from the outside world.

mod market_metadata_port;
mod order_transport_port;

pub use market_metadata_port::{MarketMetadataPort, MetadataError};
pub use order_transport_port::{
    OrderTransportPort, SubmitOrderRequest, TransportAck, TransportError,
};

#[cfg(test)]
pub use market_metadata_port::MockMarketMetadataPort;
#[cfg(test)]
pub use order_transport_port::MockOrderTransportPort;
