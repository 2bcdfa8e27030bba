//! Implementation of a global context mock. Used in testing handlers of all IBC modules.

use ibc::core::client::types::Height;
use ibc::core::commitment_types::commitment::CommitmentPrefix;
use ibc::core::commitment_types::verifier::ProofFormat;
use ibc::core::connection::types::ConnectionEnd;
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::{ChainId, ConnectionId};
use ibc::core::host::types::path::{ClientConnectionPath, ConnectionPath};
use ibc::core::host::{ExecutionContext, ValidationContext};
use ibc::core::primitives::prelude::*;
use ibc_testkit_store::types::Height as StoreHeight;

use super::client_ctx::corrupted;
use crate::hosts::TestHost;
use crate::testapp::ibc::core::types::MockIbcStore;

impl<H> ValidationContext for MockIbcStore<H>
where
    H: TestHost,
{
    fn host_height(&self) -> Result<Height, HostError> {
        self.host_height
            .ok_or_else(|| HostError::broken_invariant("host has not produced any block"))
    }

    fn host_chain_id(&self) -> ChainId {
        self.chain_id.clone()
    }

    fn commitment_prefix(&self) -> CommitmentPrefix {
        self.commitment_prefix.clone()
    }

    fn host_proof_format(&self) -> ProofFormat {
        self.proof_format.clone()
    }

    fn connection_end(&self, conn_id: &ConnectionId) -> Result<Option<ConnectionEnd>, HostError> {
        self.connection_end_store
            .get(StoreHeight::Pending, &ConnectionPath::new(conn_id))
            .map_err(corrupted)
    }
}

impl<H> ExecutionContext for MockIbcStore<H>
where
    H: TestHost,
{
    fn store_connection(
        &mut self,
        connection_path: &ConnectionPath,
        connection_end: ConnectionEnd,
    ) -> Result<(), HostError> {
        self.connection_end_store
            .set(connection_path.clone(), connection_end)
            .map_err(corrupted)
    }

    /// The index is a set, recording a connection twice keeps one entry.
    fn store_connection_to_client(
        &mut self,
        client_connection_path: &ClientConnectionPath,
        conn_id: ConnectionId,
    ) -> Result<(), HostError> {
        let mut conn_ids = self
            .connection_ids_store
            .get(StoreHeight::Pending, client_connection_path)
            .map_err(corrupted)?
            .unwrap_or_default();

        if !conn_ids.contains(&conn_id) {
            conn_ids.push(conn_id);
        }

        self.connection_ids_store
            .set(client_connection_path.clone(), conn_ids)
            .map_err(corrupted)
    }

    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), HostError> {
        self.events.lock().push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), HostError> {
        self.logs.lock().push(message);
        Ok(())
    }
}

impl<H> MockIbcStore<H>
where
    H: TestHost,
{
    /// Connections opened on top of the client named by the path.
    pub fn client_connections(
        &self,
        client_connection_path: &ClientConnectionPath,
    ) -> Result<Vec<ConnectionId>, HostError> {
        Ok(self
            .connection_ids_store
            .get(StoreHeight::Pending, client_connection_path)
            .map_err(corrupted)?
            .unwrap_or_default())
    }
}
