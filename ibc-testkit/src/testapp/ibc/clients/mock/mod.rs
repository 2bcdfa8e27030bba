//! A mock consensus engine: validators sign blocks by name and a block is
//! identified by the sha256 of its header fields.

pub mod header;
pub mod validator_set;

pub const MOCK_CLIENT_TYPE: &str = "9999-mock";
