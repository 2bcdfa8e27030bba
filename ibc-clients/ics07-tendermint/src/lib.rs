//! ICS 07: binds the generic IBC client to Tendermint chains.
//!
//! The client logic in `ibc-core-client` only sees a signed header and a
//! weighted signer set. This crate provides both for Tendermint, counting
//! commit signatures with the light client's production voting power
//! calculator.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod signed_header;
mod validator_set;

pub use signed_header::*;
pub use validator_set::*;

use ibc_core_client::types::{ConsensusState, Header, Misbehaviour};

pub const TENDERMINT_CLIENT_TYPE: &str = "07-tendermint";

/// A header submitted to a Tendermint client.
pub type TmHeader = Header<SignedHeader, ValidatorSet>;

/// A consensus state of a Tendermint client.
pub type TmConsensusState = ConsensusState<ValidatorSet>;

/// Misbehaviour evidence against a Tendermint client.
pub type TmMisbehaviour = Misbehaviour<SignedHeader, ValidatorSet>;
