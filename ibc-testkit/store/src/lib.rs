//! A versioned in-memory key-value store for the mock chains of
//! `ibc-testkit`.
//!
//! Every committed version is an immutable [`avl::AvlTree`] snapshot, so reads
//! at a past height see exactly the writes committed up to that height and
//! proofs can be produced against any of them.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

pub mod avl;
pub mod context;
pub mod impls;
pub mod types;
pub mod utils;
