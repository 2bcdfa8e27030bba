//! This crate functions as an intermediary layer between the storage of host
//! chains and the ICS-02 client handlers: it declares how client states and
//! consensus states are read from and written to the host.
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

mod context;
pub use context::*;

pub mod types {
    #[doc(inline)]
    pub use ibc_core_client_types::*;
}
