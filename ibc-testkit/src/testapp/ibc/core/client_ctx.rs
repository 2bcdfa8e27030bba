use ibc::core::client::context::{ClientExecutionContext, ClientValidationContext};
use ibc::core::client::types::{ClientState, ConsensusState, Height};
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::ClientId;
use ibc::core::host::types::path::{
    full_consensus_state_path, ClientConsensusStatePath, ClientStatePath, Namespace,
};
use ibc::core::primitives::prelude::*;
use ibc_testkit_store::types::{Height as StoreHeight, Path as StorePath, StoreError};

use crate::hosts::TestHost;
use crate::testapp::ibc::core::types::MockIbcStore;

pub(crate) fn corrupted(error: StoreError) -> HostError {
    match &error {
        StoreError::Encode { path, .. } | StoreError::Decode { path, .. } => {
            HostError::corrupted_record(path, &error)
        }
    }
}

impl<H> ClientValidationContext for MockIbcStore<H>
where
    H: TestHost,
{
    type SignedHeader = H::SignedHeader;
    type ValidatorSet = H::ValidatorSet;

    fn client_state(&self, client_id: &ClientId) -> Result<Option<ClientState>, HostError> {
        self.client_state_store
            .get(StoreHeight::Pending, &ClientStatePath::new(client_id.clone()))
            .map_err(corrupted)
    }

    fn consensus_state(
        &self,
        client_cons_state_path: &ClientConsensusStatePath,
    ) -> Result<Option<ConsensusState<H::ValidatorSet>>, HostError> {
        self.consensus_state_store
            .get(StoreHeight::Pending, client_cons_state_path)
            .map_err(corrupted)
    }

    /// Heights are recovered from the keys under the client's consensus
    /// state prefix.
    fn consensus_state_heights(&self, client_id: &ClientId) -> Result<Vec<Height>, HostError> {
        let prefix = format!(
            "{}/{}/",
            Namespace::Protocol,
            full_consensus_state_path(client_id)
        );

        let mut heights = self
            .consensus_state_store
            .get_keys(&StorePath::from(prefix.as_str()))
            .into_iter()
            .map(|key| {
                key.as_str()
                    .strip_prefix(prefix.as_str())
                    .and_then(|leaf| leaf.parse::<u64>().ok())
                    .and_then(|height| Height::new(height).ok())
                    .ok_or_else(|| {
                        HostError::corrupted_record(&key, "not a consensus state height")
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        heights.sort();

        Ok(heights)
    }
}

impl<H> ClientExecutionContext for MockIbcStore<H>
where
    H: TestHost,
{
    fn store_client_state(
        &mut self,
        client_state_path: ClientStatePath,
        client_state: ClientState,
    ) -> Result<(), HostError> {
        self.client_state_store
            .set(client_state_path, client_state)
            .map_err(corrupted)
    }

    fn store_consensus_state(
        &mut self,
        consensus_state_path: ClientConsensusStatePath,
        consensus_state: ConsensusState<H::ValidatorSet>,
    ) -> Result<(), HostError> {
        self.consensus_state_store
            .set(consensus_state_path, consensus_state)
            .map_err(corrupted)
    }
}
