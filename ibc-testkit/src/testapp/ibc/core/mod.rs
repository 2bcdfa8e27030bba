pub mod client_ctx;
pub mod core_ctx;
pub mod types;
