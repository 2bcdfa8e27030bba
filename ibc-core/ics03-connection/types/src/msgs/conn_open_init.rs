use ibc_core_host_types::identifiers::{ClientId, ConnectionId};

use crate::connection::Counterparty;
use crate::error::ConnectionError;
use crate::version::Version;

/// Per our convention, this message is sent to chain A.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgConnectionOpenInit {
    /// ConnectionId chosen on chain A for the new end
    pub connection_id: ConnectionId,
    /// ClientId on chain A that the connection is being opened for
    pub client_id: ClientId,
    pub counterparty: Counterparty,
    /// Restricts the offered versions to this one when set
    pub version: Option<Version>,
}

impl MsgConnectionOpenInit {
    /// Chain B has not chosen its connection id yet, so the counterparty
    /// must not carry one.
    pub fn validate_basic(&self) -> Result<(), ConnectionError> {
        if self.counterparty.connection_id().is_some() {
            return Err(ConnectionError::invalid_counterparty(
                "counterparty connection id must be empty on init",
            ));
        }
        Ok(())
    }
}
