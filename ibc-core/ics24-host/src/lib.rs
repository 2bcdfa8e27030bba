//! Host chain interface: the traits a chain implements so the client and
//! connection handlers can read its state, learn about itself and record
//! their effects.
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
    pub use ibc_core_host_types::*;
}
