//! Contains primitive types and traits common to the client, connection and
//! commitment components.
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

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod prelude;
pub mod utils;

#[cfg(feature = "serde")]
pub mod serializers;

mod traits;
pub use traits::*;

mod types;
pub use types::*;

/// Re-exports the `Protobuf` trait from the `ibc-proto-rs` crate.
pub mod proto {
    pub use ibc_proto::Protobuf;
}
