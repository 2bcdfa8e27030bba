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
//! This library re-exports the client and connection layers of the
//! Inter-Blockchain Communication (IBC) protocol: the machinery that lets one
//! chain verify state claims made by another and establish an authenticated
//! connection between them.
//!
//! + [Core](core) implements client tracking, commitment proof verification
//!   and the connection handshake.
//!
//! + [Clients](clients) binds the generic client to concrete consensus
//!   engines. Tendermint is the one provided.

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Re-exports primitive types and traits from the `ibc-primitives` crate.
pub mod primitives {
    pub use ibc_primitives::*;
}

/// Re-exports implementations of the IBC core modules.
pub mod core {
    #[doc(inline)]
    pub use ibc_core::*;
}

/// Re-exports implementations of IBC light clients.
pub mod clients {
    /// The Tendermint binding of the IBC client.
    pub mod tendermint {
        #[doc(inline)]
        pub use ibc_client_tendermint::*;
    }
}
