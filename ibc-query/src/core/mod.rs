//! Query functions over a [`ChainNode`], one module per IBC layer.

mod client;
mod connection;
mod context;

pub use client::*;
pub use connection::*;
pub use context::*;
