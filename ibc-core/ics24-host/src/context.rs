use ibc_core_client_context::{ClientExecutionContext, ClientValidationContext};
use ibc_core_client_types::{ClientState, Height};
use ibc_core_commitment_types::commitment::CommitmentPrefix;
use ibc_core_commitment_types::verifier::ProofFormat;
use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::version::{pick_version, Version as ConnectionVersion};
use ibc_core_connection_types::ConnectionEnd;
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host_types::error::HostError;
use ibc_core_host_types::identifiers::{ChainId, ConnectionId};
use ibc_core_host_types::path::{ClientConnectionPath, ConnectionPath};
use ibc_primitives::prelude::*;

/// Context to be implemented by the host that provides all "read-only" methods.
///
/// Trait used for the top-level `validate` entrypoint.
pub trait ValidationContext: ClientValidationContext {
    /// Returns the latest committed height of the local chain.
    fn host_height(&self) -> Result<Height, HostError>;

    /// Returns the identifier of the local chain.
    fn host_chain_id(&self) -> ChainId;

    /// Returns the prefix under which the local chain commits its protocol
    /// store.
    fn commitment_prefix(&self) -> CommitmentPrefix;

    /// Returns how the local chain proves its own state.
    fn host_proof_format(&self) -> ProofFormat;

    /// Returns the ConnectionEnd for the given identifier `conn_id`.
    fn connection_end(&self, conn_id: &ConnectionId) -> Result<Option<ConnectionEnd>, HostError>;

    /// Returns the list of all versions the connection handshake supports.
    fn get_compatible_versions(&self) -> Vec<ConnectionVersion> {
        ConnectionVersion::compatibles()
    }

    /// Returns the preferred version out of the counterparty's candidates.
    fn pick_version(
        &self,
        counterparty_candidate_versions: &[ConnectionVersion],
    ) -> Result<ConnectionVersion, ConnectionError> {
        pick_version(
            &self.get_compatible_versions(),
            counterparty_candidate_versions,
        )
    }

    /// Validates the `ClientState` of the host chain stored on the counterparty
    /// chain against the host's internal state: it must track this chain, be
    /// active, not claim a height the host has not reached and expect proofs
    /// in the format the host produces.
    fn validate_self_client(
        &self,
        client_state_of_host_on_counterparty: &ClientState,
    ) -> Result<(), ConnectionError> {
        let client_state = client_state_of_host_on_counterparty;

        if client_state.is_frozen() {
            return Err(ConnectionError::invalid_client_state(
                "client tracking the host is frozen",
            ));
        }

        let self_chain_id = self.host_chain_id();
        if self_chain_id != client_state.chain_id {
            return Err(ConnectionError::invalid_client_state(format!(
                "invalid chain-id. expected: {}, got: {}",
                self_chain_id, client_state.chain_id
            )));
        }

        let host_height = self.host_height()?;
        if client_state.latest_height > host_height {
            return Err(ConnectionError::invalid_client_state(format!(
                "client has latest height {} greater than chain height {}",
                client_state.latest_height, host_height
            )));
        }

        let self_proof_format = self.host_proof_format();
        if self_proof_format != client_state.proof_format {
            return Err(ConnectionError::invalid_client_state(format!(
                "client has invalid proof format. expected: {:?}, got: {:?}",
                self_proof_format, client_state.proof_format
            )));
        }

        Ok(())
    }
}

/// Context to be implemented by the host that provides all "write-only" methods.
///
/// Trait used for the top-level `execute` and `dispatch` entrypoints.
pub trait ExecutionContext: ValidationContext + ClientExecutionContext {
    /// Stores the given connection_end at path
    fn store_connection(
        &mut self,
        connection_path: &ConnectionPath,
        connection_end: ConnectionEnd,
    ) -> Result<(), HostError>;

    /// Records `conn_id` among the connections opened on top of the client
    /// named by the path.
    fn store_connection_to_client(
        &mut self,
        client_connection_path: &ClientConnectionPath,
        conn_id: ConnectionId,
    ) -> Result<(), HostError>;

    /// Emit the given IBC event
    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), HostError>;

    /// Log the given message.
    fn log_message(&mut self, message: String) -> Result<(), HostError>;
}
