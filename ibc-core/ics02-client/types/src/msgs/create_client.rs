//! Definition of domain type message `MsgCreateClient`.

use ibc_core_host_types::identifiers::ClientId;
use ibc_primitives::prelude::*;

use crate::client_state::ClientState;
use crate::consensus_state::ConsensusState;
use crate::error::ClientError;

/// A type of message that triggers the creation of a new on-chain (IBC) client.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MsgCreateClient<V> {
    pub client_id: ClientId,
    pub client_state: ClientState,
    pub consensus_state: ConsensusState<V>,
}

impl<V> MsgCreateClient<V> {
    pub fn new(
        client_id: ClientId,
        client_state: ClientState,
        consensus_state: ConsensusState<V>,
    ) -> Self {
        MsgCreateClient {
            client_id,
            client_state,
            consensus_state,
        }
    }

    /// The initial consensus state must be the one the client state points
    /// at, for the chain the client state tracks.
    pub fn validate_basic(&self) -> Result<(), ClientError> {
        if self.client_state.is_frozen() {
            return Err(ClientError::InvalidClientState {
                description: "cannot create a frozen client".into(),
            });
        }
        if self.consensus_state.height != self.client_state.latest_height {
            return Err(ClientError::InvalidConsensusState {
                description: format!(
                    "consensus state height {} differs from client state latest height {}",
                    self.consensus_state.height, self.client_state.latest_height
                ),
            });
        }
        if self.consensus_state.chain_id != self.client_state.chain_id {
            return Err(ClientError::InvalidConsensusState {
                description: format!(
                    "consensus state chain `{}` differs from client state chain `{}`",
                    self.consensus_state.chain_id, self.client_state.chain_id
                ),
            });
        }
        Ok(())
    }
}
