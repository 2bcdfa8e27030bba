//! Read-only queries over the committed state of an IBC enabled chain.
//!
//! A host exposes its committed history through [`ChainNode`](crate::core::ChainNode).
//! The query functions in [`core`] read from it at a fixed height and return
//! domain types; [`command`] renders them as indented JSON for operators.
//!
//! Example
//! ```rust,ignore
//! use ibc_query::command::{run, QueryCommand};
//! use ibc_query::core::ValidatorSetOffset;
//!
//! let json = run(&node, &QueryCommand::ConsensusState, ValidatorSetOffset::Previous)?;
//! println!("{json}");
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod command;
pub mod core;
pub mod error;
