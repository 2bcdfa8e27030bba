//! Defines identifier types

mod chain_id;
mod client_id;
mod connection_id;

pub use chain_id::ChainId;
pub use client_id::ClientId;
pub use connection_id::ConnectionId;
