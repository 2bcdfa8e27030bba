pub mod client;
pub mod commitment;
pub mod connection;
pub mod context;
