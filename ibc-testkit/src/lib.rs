//! Test harness for the IBC client and connection layers.
//!
//! A [`MockContext`](context::MockContext) is a chain: a [`TestHost`](hosts::TestHost)
//! producing signed blocks and an IBC store whose commitment becomes the app
//! hash of every block. Two contexts and a [`RelayerContext`](relayer::context::RelayerContext)
//! are enough to run the whole connection handshake with real proofs.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
// `ambiguous_panic_imports` is a newer future-compat lint; the prelude glob
// re-exports `core::panic`, which collides with the std prelude here.
#![allow(unknown_lints, ambiguous_panic_imports)]

pub mod context;
pub mod fixtures;
pub mod hosts;
pub mod relayer;
pub mod testapp;
