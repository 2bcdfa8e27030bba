//! Implementation of the Client Semantics (ICS-02) data structures.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(feature = "std")]
extern crate std;

mod client_state;
mod consensus_state;
pub mod error;
pub mod events;
mod header;
mod height;
mod misbehaviour;
pub mod msgs;
mod signer;
mod status;

pub use client_state::*;
pub use consensus_state::*;
pub use header::*;
pub use height::*;
pub use misbehaviour::*;
pub use signer::*;
pub use status::*;
