//! Protocol logic specific to processing ICS2 messages of type `MsgCreateClient`.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::CreateClient;
use ibc_core_client_types::msgs::MsgCreateClient;
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_core_host_types::path::{ClientConsensusStatePath, ClientStatePath};
use ibc_primitives::prelude::*;

pub fn validate<Ctx>(ctx: &Ctx, msg: &MsgCreateClient<Ctx::ValidatorSet>) -> Result<(), ClientError>
where
    Ctx: ValidationContext,
{
    if ctx.client_state(&msg.client_id)?.is_some() {
        return Err(ClientError::ClientAlreadyExists {
            client_id: msg.client_id.clone(),
        });
    }

    msg.validate_basic()
}

pub fn execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgCreateClient<Ctx::ValidatorSet>,
) -> Result<(), ClientError>
where
    Ctx: ExecutionContext,
{
    let MsgCreateClient {
        client_id,
        client_state,
        consensus_state,
    } = msg;

    let latest_height = client_state.latest_height();

    ctx.store_consensus_state(
        ClientConsensusStatePath::new(client_id.clone(), latest_height.value()),
        consensus_state,
    )?;
    ctx.store_client_state(ClientStatePath::new(client_id.clone()), client_state)?;

    let event = IbcEvent::CreateClient(CreateClient::new(client_id.clone(), latest_height));
    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Client))?;
    ctx.emit_ibc_event(event)?;

    ctx.log_message(format!(
        "success: created client {client_id} at height {latest_height}"
    ))?;

    Ok(())
}
