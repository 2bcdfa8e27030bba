//! Defines the client error type

use displaydoc::Display;
use ibc_core_commitment_types::error::CommitmentError;
use ibc_core_host_types::error::{HostError, IdentifierError};
use ibc_core_host_types::identifiers::ClientId;
use ibc_primitives::prelude::*;
use ibc_primitives::DecodingError;

use crate::height::Height;

/// Encodes all the possible client errors
#[derive(Debug, Display)]
pub enum ClientError {
    /// host error: `{0}`
    Host(HostError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// client `{client_id}` not found
    ClientNotFound { client_id: ClientId },
    /// client `{client_id}` already exists
    ClientAlreadyExists { client_id: ClientId },
    /// client `{client_id}` is frozen
    ClientFrozen { client_id: ClientId },
    /// invalid header: `{description}`
    InvalidHeader { description: String },
    /// validator set mismatch: expected hash `{expected}`, got `{actual}`
    ValidatorSetMismatch { expected: String, actual: String },
    /// insufficient voting power: `{signed}` signed out of `{total}`; more than 2/3 required
    InsufficientVotingPower { signed: u64, total: u64 },
    /// no consensus state for client `{client_id}` at height `{height}`
    HeightNotFound { client_id: ClientId, height: Height },
    /// invalid misbehaviour: `{description}`
    InvalidMisbehaviour { description: String },
    /// invalid client state: `{description}`
    InvalidClientState { description: String },
    /// invalid consensus state: `{description}`
    InvalidConsensusState { description: String },
    /// invalid height; cannot be zero
    InvalidHeight,
    /// height arithmetic underflowed below one
    InvalidHeightResult,
    /// proof verification failed: `{0}`
    ProofInvalid(CommitmentError),
}

impl ClientError {
    pub fn invalid_header<D: ToString>(description: D) -> Self {
        Self::InvalidHeader {
            description: description.to_string(),
        }
    }

    pub fn invalid_misbehaviour<D: ToString>(description: D) -> Self {
        Self::InvalidMisbehaviour {
            description: description.to_string(),
        }
    }
}

impl From<CommitmentError> for ClientError {
    fn from(e: CommitmentError) -> Self {
        Self::ProofInvalid(e)
    }
}

impl From<DecodingError> for ClientError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

impl From<IdentifierError> for ClientError {
    fn from(e: IdentifierError) -> Self {
        Self::Decoding(DecodingError::InvalidIdentifier(e.to_string()))
    }
}

impl From<HostError> for ClientError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::ProofInvalid(e) => Some(e),
            Self::Decoding(e) => Some(e),
            Self::Host(e) => Some(e),
            _ => None,
        }
    }
}
