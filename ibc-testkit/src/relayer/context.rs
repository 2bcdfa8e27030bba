use ibc::core::host::types::identifiers::{ClientId, ConnectionId};

use crate::context::MockContext;
use crate::hosts::TestHost;
use crate::relayer::error::RelayerError;
use crate::relayer::utils::TypedRelayerOps;

/// A relayer context that allows interaction between two [`MockContext`] instances.
#[derive(Debug)]
pub struct RelayerContext<H>
where
    H: TestHost,
{
    ctx_a: MockContext<H>,
    ctx_b: MockContext<H>,
}

impl<H> RelayerContext<H>
where
    H: TestHost,
{
    pub fn new(ctx_a: MockContext<H>, ctx_b: MockContext<H>) -> Self {
        Self { ctx_a, ctx_b }
    }

    pub fn get_ctx_a(&self) -> &MockContext<H> {
        &self.ctx_a
    }

    pub fn get_ctx_b(&self) -> &MockContext<H> {
        &self.ctx_b
    }

    pub fn get_ctx_a_mut(&mut self) -> &mut MockContext<H> {
        &mut self.ctx_a
    }

    pub fn get_ctx_b_mut(&mut self) -> &mut MockContext<H> {
        &mut self.ctx_b
    }

    pub fn into_contexts(self) -> (MockContext<H>, MockContext<H>) {
        (self.ctx_a, self.ctx_b)
    }

    /// Creates a client of `B` on `A`.
    pub fn create_client_on_a(&mut self) -> Result<ClientId, RelayerError> {
        TypedRelayerOps::<H>::create_client_on_a(&mut self.ctx_a, &self.ctx_b)
    }

    /// Creates a client of `A` on `B`.
    pub fn create_client_on_b(&mut self) -> Result<ClientId, RelayerError> {
        TypedRelayerOps::<H>::create_client_on_a(&mut self.ctx_b, &self.ctx_a)
    }

    pub fn update_client_on_a(&mut self, client_id_on_a: ClientId) -> Result<(), RelayerError> {
        TypedRelayerOps::<H>::update_client_on_a(&mut self.ctx_a, &self.ctx_b, client_id_on_a)
    }

    pub fn update_client_on_b(&mut self, client_id_on_b: ClientId) -> Result<(), RelayerError> {
        TypedRelayerOps::<H>::update_client_on_a(&mut self.ctx_b, &self.ctx_a, client_id_on_b)
    }

    /// Runs the handshake initiated by `A`. Returns the connection
    /// identifiers on `A` and `B`.
    pub fn create_connection_on_a(
        &mut self,
        client_id_on_a: ClientId,
        client_id_on_b: ClientId,
    ) -> Result<(ConnectionId, ConnectionId), RelayerError> {
        TypedRelayerOps::<H>::create_connection_on_a(
            &mut self.ctx_a,
            &mut self.ctx_b,
            client_id_on_a,
            client_id_on_b,
        )
    }

    /// Runs the handshake initiated by `B`. Returns the connection
    /// identifiers on `B` and `A`.
    pub fn create_connection_on_b(
        &mut self,
        client_id_on_b: ClientId,
        client_id_on_a: ClientId,
    ) -> Result<(ConnectionId, ConnectionId), RelayerError> {
        TypedRelayerOps::<H>::create_connection_on_a(
            &mut self.ctx_b,
            &mut self.ctx_a,
            client_id_on_b,
            client_id_on_a,
        )
    }
}
