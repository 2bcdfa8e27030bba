use displaydoc::Display;
use ibc::core::client::types::Height;
use ibc::core::handler::types::error::HandlerError;
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::{ClientId, ConnectionId};
use ibc::core::host::types::path::Path;

#[derive(Debug, Display)]
pub enum RelayerError {
    /// client state on destination chain not found, (client id: `{client_id}`)
    ClientStateNotFound { client_id: ClientId },
    /// the client on destination chain is already up-to-date (client id: `{client_id}`, source height: `{source_height}`, dest height: `{destination_height}`)
    ClientAlreadyUpToDate {
        client_id: ClientId,
        source_height: Height,
        destination_height: Height,
    },
    /// the client on destination chain is at a higher height (client id: `{client_id}`, source height: `{source_height}`, dest height: `{destination_height}`)
    ClientAtHigherHeight {
        client_id: ClientId,
        source_height: Height,
        destination_height: Height,
    },
    /// connection `{connection_id}` not found
    ConnectionNotFound { connection_id: ConnectionId },
    /// source chain has no block at height `{height}`
    BlockNotFound { height: Height },
    /// no proof of `{path}` at height `{height}` on source chain
    ProofNotFound { path: Path, height: Height },
    /// transaction succeeded without emitting a `{expected}` event
    MissingEvent { expected: &'static str },
    /// transaction processing by modules failed error: `{0}`
    TransactionFailed(HandlerError),
    /// host error: `{0}`
    Host(HostError),
}

impl From<HostError> for RelayerError {
    fn from(e: HostError) -> Self {
        Self::Host(e)
    }
}

impl std::error::Error for RelayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::TransactionFailed(e) => Some(e),
            Self::Host(e) => Some(e),
            _ => None,
        }
    }
}
