//! Protocol logic specific to ICS3 messages of type `MsgConnectionOpenConfirm`.

use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::events::OpenConfirm;
use ibc_core_connection_types::msgs::MsgConnectionOpenConfirm;
use ibc_core_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host::{ExecutionContext, ValidationContext};

use super::{store_conn_end, ProofTarget};
use crate::transition::open_confirm;

pub fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgConnectionOpenConfirm) -> Result<(), ConnectionError>
where
    Ctx: ValidationContext,
{
    let conn_end_on_b = ctx_b.connection_end(&msg.conn_id_on_b)?;
    let opened = open_confirm(conn_end_on_b.as_ref(), msg)?;

    let conn_id_on_a = opened.counterparty().expect_connection_id()?;
    let client_id_on_a = opened.counterparty().client_id();

    let target = ProofTarget {
        client_id: opened.client_id(),
        height: msg.proof_height_on_a,
        prefix: opened.counterparty().prefix(),
    };

    let expected_conn_end_on_a = ConnectionEnd::new(
        State::Open,
        client_id_on_a.clone(),
        Counterparty::new(
            opened.client_id().clone(),
            Some(msg.conn_id_on_b.clone()),
            ctx_b.commitment_prefix(),
        ),
        opened.versions().to_vec(),
    )?;

    target.verify_conn_end(
        ctx_b,
        conn_id_on_a,
        expected_conn_end_on_a,
        &msg.proof_conn_end_on_a,
    )
}

pub fn execute<Ctx>(ctx_b: &mut Ctx, msg: MsgConnectionOpenConfirm) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let current = ctx_b.connection_end(&msg.conn_id_on_b)?;
    let conn_end_on_b = open_confirm(current.as_ref(), &msg)?;

    let conn_id_on_a = conn_end_on_b.counterparty().expect_connection_id()?.clone();
    let event = IbcEvent::OpenConfirmConnection(OpenConfirm::new(
        msg.conn_id_on_b.clone(),
        conn_end_on_b.client_id().clone(),
        conn_id_on_a,
        conn_end_on_b.counterparty().client_id().clone(),
    ));

    store_conn_end(ctx_b, msg.conn_id_on_b, conn_end_on_b, event)
}
