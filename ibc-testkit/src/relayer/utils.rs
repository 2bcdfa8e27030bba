use core::marker::PhantomData;

use ibc::core::client::context::ClientValidationContext;
use ibc::core::client::types::msgs::{ClientMsg, MsgCreateClient, MsgUpdateClient};
use ibc::core::client::types::{ClientState, Height};
use ibc::core::commitment_types::commitment::CommitmentProofBytes;
use ibc::core::connection::types::msgs::{
    ConnectionMsg, MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit,
    MsgConnectionOpenTry,
};
use ibc::core::connection::types::{ConnectionEnd, Counterparty};
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ClientId, ConnectionId};
use ibc::core::host::types::path::{ClientStatePath, ConnectionPath, Path};
use ibc::core::host::ValidationContext;
use tracing::debug;

use crate::context::MockContext;
use crate::hosts::TestHost;
use crate::relayer::error::RelayerError;

/// Implements IBC relayer functions for a pair of chains of host type `H`.
/// Note that, all the implementations are in one direction: from `B` to `A`.
/// This ensures that the variable namings are consistent with the IBC message fields,
/// leading to a less error-prone implementation.
///
/// For the opposite direction, swap the contexts passed in.
#[derive(Debug, Default)]
pub struct TypedRelayerOps<H>(PhantomData<H>)
where
    H: TestHost;

impl<H> TypedRelayerOps<H>
where
    H: TestHost,
{
    /// Creates a client on `A` with the state of `B`.
    /// Returns the client identifier on `A`.
    pub fn create_client_on_a(
        ctx_a: &mut MockContext<H>,
        ctx_b: &MockContext<H>,
    ) -> Result<ClientId, RelayerError> {
        let height_of_b = ctx_b.latest_height();
        let consensus_state_of_b = ctx_b
            .light_consensus_state(&height_of_b)
            .ok_or(RelayerError::BlockNotFound {
                height: height_of_b,
            })?;

        let msg_for_a = MsgEnvelope::Client(ClientMsg::CreateClient(MsgCreateClient::new(
            ctx_a.next_client_id(),
            ctx_b.light_client_state(height_of_b),
            consensus_state_of_b,
        )));

        ctx_a.deliver(msg_for_a)?;

        let Some(IbcEvent::CreateClient(create_client_b_event)) = ctx_a.get_events().last().cloned()
        else {
            return Err(RelayerError::MissingEvent {
                expected: "create_client",
            });
        };

        Ok(create_client_b_event.client_id().clone())
    }

    /// Updates the client on `A` with the latest header from `B`.
    pub fn update_client_on_a(
        ctx_a: &mut MockContext<H>,
        ctx_b: &MockContext<H>,
        client_id_on_a: ClientId,
    ) -> Result<(), RelayerError> {
        let trusted_height_of_b = client_state(ctx_a, &client_id_on_a)?.latest_height();
        let target_height_of_b = ctx_b.latest_height();

        if trusted_height_of_b == target_height_of_b {
            return Err(RelayerError::ClientAlreadyUpToDate {
                client_id: client_id_on_a,
                source_height: target_height_of_b,
                destination_height: trusted_height_of_b,
            });
        }
        if trusted_height_of_b > target_height_of_b {
            return Err(RelayerError::ClientAtHigherHeight {
                client_id: client_id_on_a,
                source_height: target_height_of_b,
                destination_height: trusted_height_of_b,
            });
        }

        let target_block_of_b = ctx_b
            .host_block(&target_height_of_b)
            .ok_or(RelayerError::BlockNotFound {
                height: target_height_of_b,
            })?
            .clone();

        debug!(
            client_id = %client_id_on_a,
            from = %trusted_height_of_b,
            to = %target_height_of_b,
            "relaying header"
        );

        let msg_for_a = MsgEnvelope::Client(ClientMsg::UpdateClient(MsgUpdateClient::new(
            client_id_on_a,
            target_block_of_b,
        )));

        ctx_a.deliver(msg_for_a)?;

        let Some(IbcEvent::UpdateClient(_)) = ctx_a.get_events().last().cloned() else {
            return Err(RelayerError::MissingEvent {
                expected: "update_client",
            });
        };

        Ok(())
    }

    /// `A` initiates a connection with the other end on `B`.
    /// Returns the connection identifier on `A`.
    pub fn connection_open_init_on_a(
        ctx_a: &mut MockContext<H>,
        ctx_b: &MockContext<H>,
        client_id_on_a: ClientId,
        client_id_on_b: ClientId,
    ) -> Result<ConnectionId, RelayerError> {
        let counterparty_b =
            Counterparty::new(client_id_on_b, None, ctx_b.ibc_store().commitment_prefix());

        let msg_for_a = MsgEnvelope::Connection(ConnectionMsg::OpenInit(MsgConnectionOpenInit {
            connection_id: ctx_a.next_connection_id(),
            client_id: client_id_on_a,
            counterparty: counterparty_b,
            version: None,
        }));

        ctx_a.deliver(msg_for_a)?;

        let Some(IbcEvent::OpenInitConnection(open_init_connection_event)) =
            ctx_a.get_events().last().cloned()
        else {
            return Err(RelayerError::MissingEvent {
                expected: "connection_open_init",
            });
        };

        Ok(open_init_connection_event.connection_id().clone())
    }

    /// `B` receives the connection opening attempt by `A` after `A` initiates the connection.
    /// Returns the connection identifier on `B`.
    pub fn connection_open_try_on_b(
        ctx_b: &mut MockContext<H>,
        ctx_a: &MockContext<H>,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        client_id_on_b: ClientId,
    ) -> Result<ConnectionId, RelayerError> {
        let proofs_height_on_a = ctx_a.latest_height();

        let client_state_of_b_on_a = client_state(ctx_a, &client_id_on_a)?;
        let conn_end_on_a = connection_end(ctx_a, &conn_id_on_a)?;

        let counterparty_a = Counterparty::new(
            client_id_on_a.clone(),
            Some(conn_id_on_a.clone()),
            ctx_a.ibc_store().commitment_prefix(),
        );

        let proof_conn_end_on_a = prove(
            ctx_a,
            proofs_height_on_a,
            ConnectionPath::new(&conn_id_on_a).into(),
        )?;

        let proof_client_state_of_b_on_a = prove(
            ctx_a,
            proofs_height_on_a,
            ClientStatePath::new(client_id_on_a).into(),
        )?;

        let msg_for_b = MsgEnvelope::Connection(ConnectionMsg::OpenTry(MsgConnectionOpenTry {
            connection_id: ctx_b.next_connection_id(),
            client_id: client_id_on_b,
            client_state_of_b_on_a,
            counterparty: counterparty_a,
            counterparty_versions: conn_end_on_a.versions().to_vec(),
            proof_conn_end_on_a,
            proof_client_state_of_b_on_a,
            proofs_height_on_a,
        }));

        ctx_b.deliver(msg_for_b)?;

        let Some(IbcEvent::OpenTryConnection(open_try_connection_event)) =
            ctx_b.get_events().last().cloned()
        else {
            return Err(RelayerError::MissingEvent {
                expected: "connection_open_try",
            });
        };

        Ok(open_try_connection_event.connection_id().clone())
    }

    /// `A` receives `B`'s acknowledgement that `B` received the connection opening attempt by `A`.
    /// `A` starts processing the connection on its side.
    pub fn connection_open_ack_on_a(
        ctx_a: &mut MockContext<H>,
        ctx_b: &MockContext<H>,
        conn_id_on_a: ConnectionId,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
    ) -> Result<(), RelayerError> {
        let proofs_height_on_b = ctx_b.latest_height();

        let client_state_of_a_on_b = client_state(ctx_b, &client_id_on_b)?;
        let conn_end_on_b = connection_end(ctx_b, &conn_id_on_b)?;
        let version = conn_end_on_b
            .negotiated_version()
            .cloned()
            .ok_or_else(|| RelayerError::ConnectionNotFound {
                connection_id: conn_id_on_b.clone(),
            })?;

        let proof_conn_end_on_b = prove(
            ctx_b,
            proofs_height_on_b,
            ConnectionPath::new(&conn_id_on_b).into(),
        )?;

        let proof_client_state_of_a_on_b = prove(
            ctx_b,
            proofs_height_on_b,
            ClientStatePath::new(client_id_on_b).into(),
        )?;

        let msg_for_a = MsgEnvelope::Connection(ConnectionMsg::OpenAck(MsgConnectionOpenAck {
            conn_id_on_a,
            conn_id_on_b,
            client_state_of_a_on_b,
            proof_conn_end_on_b,
            proof_client_state_of_a_on_b,
            proofs_height_on_b,
            version,
        }));

        ctx_a.deliver(msg_for_a)?;

        let Some(IbcEvent::OpenAckConnection(_)) = ctx_a.get_events().last().cloned() else {
            return Err(RelayerError::MissingEvent {
                expected: "connection_open_ack",
            });
        };

        Ok(())
    }

    /// `B` receives the confirmation from `A` that the connection creation was successful.
    /// `B` also starts processing the connection on its side.
    pub fn connection_open_confirm_on_b(
        ctx_b: &mut MockContext<H>,
        ctx_a: &MockContext<H>,
        conn_id_on_b: ConnectionId,
        conn_id_on_a: ConnectionId,
    ) -> Result<(), RelayerError> {
        let proof_height_on_a = ctx_a.latest_height();

        let proof_conn_end_on_a = prove(
            ctx_a,
            proof_height_on_a,
            ConnectionPath::new(&conn_id_on_a).into(),
        )?;

        let msg_for_b =
            MsgEnvelope::Connection(ConnectionMsg::OpenConfirm(MsgConnectionOpenConfirm {
                conn_id_on_b,
                proof_conn_end_on_a,
                proof_height_on_a,
            }));

        ctx_b.deliver(msg_for_b)?;

        let Some(IbcEvent::OpenConfirmConnection(_)) = ctx_b.get_events().last().cloned() else {
            return Err(RelayerError::MissingEvent {
                expected: "connection_open_confirm",
            });
        };

        Ok(())
    }

    /// A connection is created by `A` towards `B` using the IBC connection handshake protocol.
    /// Returns the connection identifiers of `A` and `B`.
    pub fn create_connection_on_a(
        ctx_a: &mut MockContext<H>,
        ctx_b: &mut MockContext<H>,
        client_id_on_a: ClientId,
        client_id_on_b: ClientId,
    ) -> Result<(ConnectionId, ConnectionId), RelayerError> {
        let conn_id_on_a = Self::connection_open_init_on_a(
            ctx_a,
            ctx_b,
            client_id_on_a.clone(),
            client_id_on_b.clone(),
        )?;

        Self::update_client_on_a(ctx_b, ctx_a, client_id_on_b.clone())?;

        let conn_id_on_b = Self::connection_open_try_on_b(
            ctx_b,
            ctx_a,
            conn_id_on_a.clone(),
            client_id_on_a.clone(),
            client_id_on_b.clone(),
        )?;

        Self::update_client_on_a(ctx_a, ctx_b, client_id_on_a.clone())?;

        Self::connection_open_ack_on_a(
            ctx_a,
            ctx_b,
            conn_id_on_a.clone(),
            conn_id_on_b.clone(),
            client_id_on_b.clone(),
        )?;

        Self::update_client_on_a(ctx_b, ctx_a, client_id_on_b)?;

        Self::connection_open_confirm_on_b(
            ctx_b,
            ctx_a,
            conn_id_on_b.clone(),
            conn_id_on_a.clone(),
        )?;

        Self::update_client_on_a(ctx_a, ctx_b, client_id_on_a)?;

        Ok((conn_id_on_a, conn_id_on_b))
    }
}

fn client_state<H: TestHost>(
    ctx: &MockContext<H>,
    client_id: &ClientId,
) -> Result<ClientState, RelayerError> {
    ctx.ibc_store()
        .client_state(client_id)?
        .ok_or_else(|| RelayerError::ClientStateNotFound {
            client_id: client_id.clone(),
        })
}

fn connection_end<H: TestHost>(
    ctx: &MockContext<H>,
    connection_id: &ConnectionId,
) -> Result<ConnectionEnd, RelayerError> {
    ctx.ibc_store()
        .connection_end(connection_id)?
        .ok_or_else(|| RelayerError::ConnectionNotFound {
            connection_id: connection_id.clone(),
        })
}

fn prove<H: TestHost>(
    ctx: &MockContext<H>,
    height: Height,
    path: Path,
) -> Result<CommitmentProofBytes, RelayerError> {
    ctx.get_proof(height, &path)
        .ok_or(RelayerError::ProofNotFound { path, height })
}
