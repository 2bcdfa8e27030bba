//! Protocol logic specific to ICS3 messages of type `MsgConnectionOpenAck`.

use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::events::OpenAck;
use ibc_core_connection_types::msgs::MsgConnectionOpenAck;
use ibc_core_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_primitives::prelude::*;

use super::{store_conn_end, ProofTarget};
use crate::transition::open_ack;

pub fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgConnectionOpenAck) -> Result<(), ConnectionError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_a = ctx_a.connection_end(&msg.conn_id_on_a)?;
    let opened = open_ack(conn_end_on_a.as_ref(), msg)?;

    ctx_a.validate_self_client(&msg.client_state_of_a_on_b)?;

    let client_id_on_b = opened.counterparty().client_id();

    let target = ProofTarget {
        client_id: opened.client_id(),
        height: msg.proofs_height_on_b,
        prefix: opened.counterparty().prefix(),
    };

    let expected_conn_end_on_b = ConnectionEnd::new(
        State::TryOpen,
        client_id_on_b.clone(),
        Counterparty::new(
            opened.client_id().clone(),
            Some(msg.conn_id_on_a.clone()),
            ctx_a.commitment_prefix(),
        ),
        vec![msg.version.clone()],
    )?;

    target.verify_conn_end(
        ctx_a,
        &msg.conn_id_on_b,
        expected_conn_end_on_b,
        &msg.proof_conn_end_on_b,
    )?;

    target.verify_client_state(
        ctx_a,
        client_id_on_b,
        &msg.client_state_of_a_on_b,
        &msg.proof_client_state_of_a_on_b,
    )
}

pub fn execute<Ctx>(ctx_a: &mut Ctx, msg: MsgConnectionOpenAck) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let current = ctx_a.connection_end(&msg.conn_id_on_a)?;
    let conn_end_on_a = open_ack(current.as_ref(), &msg)?;

    let event = IbcEvent::OpenAckConnection(OpenAck::new(
        msg.conn_id_on_a.clone(),
        conn_end_on_a.client_id().clone(),
        msg.conn_id_on_b,
        conn_end_on_a.counterparty().client_id().clone(),
    ));

    store_conn_end(ctx_a, msg.conn_id_on_a, conn_end_on_a, event)
}
