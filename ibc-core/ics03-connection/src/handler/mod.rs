//! This module implements the processing logic for ICS3 (connection open
//! handshake) messages.
//!
//! Every handler first runs the message through the matching step of
//! [`transition`](crate::transition) against the locally stored end, then
//! checks the counterparty's records with membership proofs. The execute
//! half recomputes the step and persists its result.

use ibc_core_client::types::{ClientState, Height};
use ibc_core_client::verify::verify_membership;
use ibc_core_commitment_types::commitment::{CommitmentPrefix, CommitmentProofBytes};
use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::ConnectionEnd;
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::types::identifiers::{ClientId, ConnectionId};
use ibc_core_host::types::path::{ClientConnectionPath, ClientStatePath, ConnectionPath, Path};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;

pub mod conn_open_ack;
pub mod conn_open_confirm;
pub mod conn_open_init;
pub mod conn_open_try;

/// Where a counterparty record is proven: the local client tracking the
/// counterparty, the height the proof was taken at and the counterparty's
/// store prefix.
pub(crate) struct ProofTarget<'a> {
    pub client_id: &'a ClientId,
    pub height: Height,
    pub prefix: &'a CommitmentPrefix,
}

impl ProofTarget<'_> {
    /// Proves the counterparty stores exactly `expected` under `conn_id`.
    pub(crate) fn verify_conn_end<Ctx>(
        &self,
        ctx: &Ctx,
        conn_id: &ConnectionId,
        expected: ConnectionEnd,
        proof: &CommitmentProofBytes,
    ) -> Result<(), ConnectionError>
    where
        Ctx: ValidationContext,
    {
        verify_membership(
            ctx,
            self.client_id,
            self.height,
            self.prefix,
            &Path::Connection(ConnectionPath::new(conn_id)),
            &expected.encode_vec(),
            proof,
        )?;
        Ok(())
    }

    /// Proves the counterparty stores `expected` as the state of its client
    /// `client_id`.
    pub(crate) fn verify_client_state<Ctx>(
        &self,
        ctx: &Ctx,
        client_id: &ClientId,
        expected: &ClientState,
        proof: &CommitmentProofBytes,
    ) -> Result<(), ConnectionError>
    where
        Ctx: ValidationContext,
    {
        verify_membership(
            ctx,
            self.client_id,
            self.height,
            self.prefix,
            &Path::ClientState(ClientStatePath::new(client_id.clone())),
            &expected.clone().encode_vec(),
            proof,
        )?;
        Ok(())
    }
}

/// Persists a handshake step: the end, the client index entry and the
/// events announcing it.
pub(crate) fn store_conn_end<Ctx>(
    ctx: &mut Ctx,
    conn_id: ConnectionId,
    conn_end: ConnectionEnd,
    event: IbcEvent,
) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let state = *conn_end.state();
    ctx.store_connection_to_client(
        &ClientConnectionPath::new(conn_end.client_id().clone()),
        conn_id.clone(),
    )?;
    ctx.store_connection(&ConnectionPath::new(&conn_id), conn_end)?;

    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx.emit_ibc_event(event)?;
    ctx.log_message(format!("success: connection {conn_id} moved to {state}"))?;

    Ok(())
}
