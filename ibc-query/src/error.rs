use displaydoc::Display;
use ibc::core::client::types::error::ClientError;
use ibc::core::client::types::Height;
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::ConnectionId;

/// The main error type of the ibc-query crate. Every lookup that comes back
/// empty is an error; queries never print partial results.
#[derive(Debug, Display)]
pub enum QueryError {
    /// host error: `{0}`
    Host(HostError),
    /// client error: `{0}`
    Client(ClientError),
    /// connection `{connection_id}` not found at height `{height}`
    ConnectionNotFound {
        connection_id: ConnectionId,
        height: Height,
    },
    /// no signed header at height `{height}`
    HeaderNotFound { height: Height },
    /// no validator set published at index `{index}`
    ValidatorSetNotFound { index: u64 },
    /// failed to render the query result: `{0}`
    Serialization(serde_json::Error),
}

impl From<HostError> for QueryError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl From<ClientError> for QueryError {
    fn from(e: ClientError) -> Self {
        Self::Client(e)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Client(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}
