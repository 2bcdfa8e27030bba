//! Protocol logic specific to processing ICS2 messages of type `MsgUpdateClient`.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::UpdateClient;
use ibc_core_client_types::msgs::MsgUpdateClient;
use ibc_core_client_types::{verify_same_set, ConsensusState, SignedHeader};
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_core_host_types::path::{ClientConsensusStatePath, ClientStatePath};
use ibc_primitives::prelude::*;

use crate::verify::{client_state, latest_consensus_state};

/// Checks, in order: the client exists, is not frozen, the header moves past
/// the latest height on the tracked chain, it is signed by the set the latest
/// consensus state trusts, its sets match its hashes and a quorum signed it.
pub fn validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgUpdateClient<Ctx::SignedHeader, Ctx::ValidatorSet>,
) -> Result<(), ClientError>
where
    Ctx: ValidationContext,
{
    let client_id = &msg.client_id;
    let header = &msg.header;

    let client_state = client_state(ctx, client_id)?;

    if client_state.is_frozen() {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
        });
    }

    let header_height = header.height()?;
    let latest_height = client_state.latest_height();
    if header_height <= latest_height {
        return Err(ClientError::invalid_header(format!(
            "header height {header_height} must be greater than latest height {latest_height}"
        )));
    }

    let header_chain_id = header.chain_id()?;
    if header_chain_id != client_state.chain_id {
        return Err(ClientError::invalid_header(format!(
            "header is for chain {header_chain_id}, client tracks {}",
            client_state.chain_id
        )));
    }

    let trusted = latest_consensus_state(ctx, client_id)?;
    verify_same_set(&trusted.next_validator_set, &header.validator_set)?;

    header.validate_basic()?;
    header.verify_commit()
}

pub fn execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgUpdateClient<Ctx::SignedHeader, Ctx::ValidatorSet>,
) -> Result<(), ClientError>
where
    Ctx: ExecutionContext,
{
    let MsgUpdateClient { client_id, header } = msg;

    let client_state = client_state(ctx, &client_id)?;
    let consensus_state = ConsensusState::from_header(&header)?;
    let height = consensus_state.height;

    ctx.store_consensus_state(
        ClientConsensusStatePath::new(client_id.clone(), height.value()),
        consensus_state,
    )?;
    ctx.store_client_state(
        ClientStatePath::new(client_id.clone()),
        client_state.with_latest_height(height),
    )?;

    let event = IbcEvent::UpdateClient(UpdateClient::new(
        client_id.clone(),
        height,
        header.signed_header.hash(),
    ));
    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Client))?;
    ctx.emit_ibc_event(event)?;

    ctx.log_message(format!(
        "success: updated client {client_id} to height {height}"
    ))?;

    Ok(())
}
