//! Protocol logic specific to ICS3 messages of type `MsgConnectionOpenTry`.

use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::events::OpenTry;
use ibc_core_connection_types::msgs::MsgConnectionOpenTry;
use ibc_core_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host::{ExecutionContext, ValidationContext};

use super::{store_conn_end, ProofTarget};
use crate::transition::open_try;

pub fn validate<Ctx>(ctx_b: &Ctx, msg: &MsgConnectionOpenTry) -> Result<(), ConnectionError>
where
    Ctx: ValidationContext,
{
    msg.validate_basic()?;

    let current = ctx_b.connection_end(&msg.connection_id)?;
    open_try(current.as_ref(), msg, &ctx_b.get_compatible_versions())?;

    ctx_b.validate_self_client(&msg.client_state_of_b_on_a)?;

    let client_id_on_a = msg.counterparty.client_id();
    let conn_id_on_a = msg.counterparty.expect_connection_id()?;

    let target = ProofTarget {
        client_id: &msg.client_id,
        height: msg.proofs_height_on_a,
        prefix: msg.counterparty.prefix(),
    };

    let expected_conn_end_on_a = ConnectionEnd::new(
        State::Init,
        client_id_on_a.clone(),
        Counterparty::new(msg.client_id.clone(), None, ctx_b.commitment_prefix()),
        msg.counterparty_versions.clone(),
    )?;

    target.verify_conn_end(
        ctx_b,
        conn_id_on_a,
        expected_conn_end_on_a,
        &msg.proof_conn_end_on_a,
    )?;

    target.verify_client_state(
        ctx_b,
        client_id_on_a,
        &msg.client_state_of_b_on_a,
        &msg.proof_client_state_of_b_on_a,
    )
}

pub fn execute<Ctx>(ctx_b: &mut Ctx, msg: MsgConnectionOpenTry) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let current = ctx_b.connection_end(&msg.connection_id)?;
    let conn_end_on_b = open_try(current.as_ref(), &msg, &ctx_b.get_compatible_versions())?;

    let event = IbcEvent::OpenTryConnection(OpenTry::new(
        msg.connection_id.clone(),
        msg.client_id.clone(),
        msg.counterparty.connection_id().cloned(),
        msg.counterparty.client_id().clone(),
    ));

    store_conn_end(ctx_b, msg.connection_id, conn_end_on_b, event)
}
