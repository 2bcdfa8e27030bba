//! Defines the handler error type

use derive_more::From;
use displaydoc::Display;
use ibc_core_client_types::error::ClientError;
use ibc_core_connection_types::error::ConnectionError;
use ibc_core_host_types::error::HostError;

/// Top-level error returned by the entrypoint.
#[derive(Debug, Display, From)]
pub enum HandlerError {
    /// ICS02 Client error: {0}
    Client(ClientError),
    /// ICS03 Connection error: {0}
    Connection(ConnectionError),
    /// ICS24 Host error: {0}
    Host(HostError),
}

impl HandlerError {
    /// Whether the failure comes from corrupted or unwritable host storage
    /// rather than from the message itself.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Host(_)
                | Self::Client(ClientError::Host(_))
                | Self::Connection(ConnectionError::Host(_))
                | Self::Connection(ConnectionError::Client(ClientError::Host(_)))
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) => Some(e),
            Self::Connection(e) => Some(e),
            Self::Host(e) => Some(e),
        }
    }
}
