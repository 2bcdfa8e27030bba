use ibc_core_client_types::{ClientState, ConsensusState, Height, SignedHeader, WeightedSignerSet};
use ibc_core_host_types::error::HostError;
use ibc_core_host_types::identifiers::ClientId;
use ibc_core_host_types::path::{ClientConsensusStatePath, ClientStatePath};
use ibc_primitives::prelude::*;

/// Defines the methods client handlers need to read client records.
///
/// Absent records are `Ok(None)`. An `Err` means the host store itself is
/// at fault, e.g. a stored record no longer decodes.
pub trait ClientValidationContext {
    /// The signed header format of the chains tracked by this host.
    type SignedHeader: SignedHeader;
    /// The weighted signer set that commits `SignedHeader`s.
    type ValidatorSet: WeightedSignerSet<Commit = Self::SignedHeader>;

    /// Returns the ClientState for the given identifier `client_id`.
    fn client_state(&self, client_id: &ClientId) -> Result<Option<ClientState>, HostError>;

    /// Retrieve the consensus state for the given client ID at the specified
    /// height.
    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<Option<ConsensusState<Self::ValidatorSet>>, HostError>;

    /// Returns all the heights at which a consensus state is stored, in
    /// ascending order.
    fn consensus_state_heights(&self, client_id: &ClientId) -> Result<Vec<Height>, HostError>;
}

/// Defines the methods client handlers need to persist client records.
pub trait ClientExecutionContext: ClientValidationContext {
    /// Called upon successful client creation, update and freezing
    fn store_client_state(
        &mut self,
        client_state_path: ClientStatePath,
        client_state: ClientState,
    ) -> Result<(), HostError>;

    /// Called upon successful client creation and update
    fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: ConsensusState<Self::ValidatorSet>,
    ) -> Result<(), HostError>;
}
