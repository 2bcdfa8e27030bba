//! Error types raised by identifier parsing and by host store implementations.

use displaydoc::Display;
use ibc_primitives::prelude::*;

/// Errors that originate from host implementations.
///
/// Every variant signals a fault in the host's own store rather than a bad
/// incoming message, so the enclosing pipeline must treat it as fatal.
#[derive(Debug, Display)]
pub enum HostError {
    /// corrupted record at `{path}`: `{description}`
    CorruptedRecord { path: String, description: String },
    /// store invariant violated: `{description}`
    BrokenInvariant { description: String },
    /// failed to write to store: `{description}`
    FailedToStore { description: String },
}

impl HostError {
    pub fn corrupted_record<P: ToString, D: ToString>(path: P, description: D) -> Self {
        Self::CorruptedRecord {
            path: path.to_string(),
            description: description.to_string(),
        }
    }

    pub fn broken_invariant<D: ToString>(description: D) -> Self {
        Self::BrokenInvariant {
            description: description.to_string(),
        }
    }

    pub fn failed_to_store<D: ToString>(description: D) -> Self {
        Self::FailedToStore {
            description: description.to_string(),
        }
    }
}

/// Errors that arise when parsing identifiers.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Display, PartialEq, Eq)]
pub enum IdentifierError {
    /// id `{id}` has invalid length; must be between [`{min}`,`{max}`]
    InvalidLength { id: String, min: u64, max: u64 },
    /// id `{id}` can only contain alphanumeric characters or `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>`
    InvalidCharacter { id: String },
    /// id `{id}` does not follow the `{prefix}-{{index}}` layout
    InvalidPrefix { id: String, prefix: String },
    /// height must be non-zero
    ZeroHeight,
    /// failed to parse `{value}`: `{description}`
    FailedToParse { value: String, description: String },
}

#[cfg(feature = "std")]
impl std::error::Error for IdentifierError {}

#[cfg(feature = "std")]
impl std::error::Error for HostError {}
