use ibc_core_client_types::{ClientState, Height};
use ibc_core_commitment_types::commitment::CommitmentProofBytes;
use ibc_core_host_types::identifiers::{ClientId, ConnectionId};
use ibc_primitives::prelude::*;

use crate::connection::Counterparty;
use crate::error::ConnectionError;
use crate::version::Version;

/// Per our convention, this message is sent to chain B.
/// The handler will check proofs of chain A.
#[derive(Clone, Debug, PartialEq)]
pub struct MsgConnectionOpenTry {
    /// ConnectionId chosen on chain B for its end
    pub connection_id: ConnectionId,
    /// ClientId on B tracking chain A
    pub client_id: ClientId,
    /// ClientState of client tracking chain B on chain A
    pub client_state_of_b_on_a: ClientState,
    /// Chain A's client id, connection id and store prefix
    pub counterparty: Counterparty,
    /// Versions offered by chain A in its `Init` end
    pub counterparty_versions: Vec<Version>,
    /// proof of ConnectionEnd stored on Chain A during ConnOpenInit
    pub proof_conn_end_on_a: CommitmentProofBytes,
    /// proof that chain A has stored ClientState of chain B on its client
    pub proof_client_state_of_b_on_a: CommitmentProofBytes,
    /// Height at which all proofs in this message were taken
    pub proofs_height_on_a: Height,
}

impl MsgConnectionOpenTry {
    pub fn validate_basic(&self) -> Result<(), ConnectionError> {
        if self.counterparty.connection_id().is_none() {
            return Err(ConnectionError::invalid_counterparty(
                "counterparty connection id is required on try",
            ));
        }
        if self.counterparty_versions.is_empty() {
            return Err(ConnectionError::EmptyVersions);
        }
        Ok(())
    }
}
