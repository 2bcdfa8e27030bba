//! Defines the connection error type

use displaydoc::Display;
use ibc_core_client_types::error::ClientError;
use ibc_core_host_types::error::{HostError, IdentifierError};
use ibc_core_host_types::identifiers::ConnectionId;
use ibc_primitives::prelude::*;
use ibc_primitives::DecodingError;

use crate::version::Version;

#[derive(Debug, Display)]
pub enum ConnectionError {
    /// client error: `{0}`
    Client(ClientError),
    /// host error: `{0}`
    Host(HostError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// connection `{connection_id}` not found
    ConnectionNotFound { connection_id: ConnectionId },
    /// connection `{connection_id}` already exists
    ConnectionAlreadyExists { connection_id: ConnectionId },
    /// wrong connection state: expected `{expected}`, actual `{actual}`
    WrongState { expected: String, actual: String },
    /// empty supported versions
    EmptyVersions,
    /// version mismatch: `{description}`
    VersionMismatch { description: String },
    /// invalid counterparty: `{description}`
    InvalidCounterparty { description: String },
    /// invalid client state: `{description}`
    InvalidClientState { description: String },
}

impl ConnectionError {
    pub fn version_mismatch<D: ToString>(description: D) -> Self {
        Self::VersionMismatch {
            description: description.to_string(),
        }
    }

    pub fn invalid_counterparty<D: ToString>(description: D) -> Self {
        Self::InvalidCounterparty {
            description: description.to_string(),
        }
    }

    pub fn invalid_client_state<D: ToString>(description: D) -> Self {
        Self::InvalidClientState {
            description: description.to_string(),
        }
    }

    pub(crate) fn unsupported_version(version: &Version) -> Self {
        Self::version_mismatch(format!("version {version} not supported"))
    }
}

impl From<ClientError> for ConnectionError {
    fn from(e: ClientError) -> Self {
        Self::Client(e)
    }
}

impl From<HostError> for ConnectionError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<DecodingError> for ConnectionError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

impl From<IdentifierError> for ConnectionError {
    fn from(e: IdentifierError) -> Self {
        Self::Decoding(DecodingError::InvalidIdentifier(e.to_string()))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Client(e) => Some(e),
            Self::Host(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
