//! Protocol logic specific to processing ICS2 messages of type `MsgSubmitMisbehaviour`.

use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::events::ClientMisbehaviour;
use ibc_core_client_types::msgs::MsgSubmitMisbehaviour;
use ibc_core_client_types::{verify_same_set, Header};
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_core_host_types::path::ClientStatePath;
use ibc_primitives::prelude::*;

use crate::verify::{client_state, prev_consensus_state, ConsensusStateOf};

/// Checks that the evidence holds two conflicting headers for one height of
/// the tracked chain, each of which the client would have accepted from the
/// greatest consensus state it trusts below that height.
pub fn validate<Ctx>(
    ctx: &Ctx,
    msg: &MsgSubmitMisbehaviour<Ctx::SignedHeader, Ctx::ValidatorSet>,
) -> Result<(), ClientError>
where
    Ctx: ValidationContext,
{
    let misbehaviour = &msg.misbehaviour;
    let client_id = &misbehaviour.client_id;

    let client_state = client_state(ctx, client_id)?;

    if client_state.is_frozen() {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
        });
    }

    misbehaviour.validate_basic()?;

    let chain_id = misbehaviour.header1.chain_id()?;
    if chain_id != client_state.chain_id {
        return Err(ClientError::invalid_misbehaviour(format!(
            "evidence is for chain {chain_id}, client tracks {}",
            client_state.chain_id
        )));
    }

    let height = misbehaviour.height()?;
    let trusted = prev_consensus_state(ctx, client_id, height)?.ok_or_else(|| {
        ClientError::invalid_misbehaviour(format!(
            "no trusted consensus state below height {height}"
        ))
    })?;

    verify_against_trusted::<Ctx>(&trusted, &misbehaviour.header1)?;
    verify_against_trusted::<Ctx>(&trusted, &misbehaviour.header2)
}

fn verify_against_trusted<Ctx>(
    trusted: &ConsensusStateOf<Ctx>,
    header: &Header<Ctx::SignedHeader, Ctx::ValidatorSet>,
) -> Result<(), ClientError>
where
    Ctx: ValidationContext,
{
    verify_same_set(&trusted.next_validator_set, &header.validator_set)?;
    header.validate_basic()?;
    header.verify_commit()
}

pub fn execute<Ctx>(
    ctx: &mut Ctx,
    msg: MsgSubmitMisbehaviour<Ctx::SignedHeader, Ctx::ValidatorSet>,
) -> Result<(), ClientError>
where
    Ctx: ExecutionContext,
{
    let misbehaviour = msg.misbehaviour;
    let client_id = misbehaviour.client_id.clone();
    let height = misbehaviour.height()?;

    let client_state = client_state(ctx, &client_id)?;
    ctx.store_client_state(ClientStatePath::new(client_id.clone()), client_state.frozen())?;

    let event = IbcEvent::ClientMisbehaviour(ClientMisbehaviour::new(client_id.clone(), height));
    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Client))?;
    ctx.emit_ibc_event(event)?;

    ctx.log_message(format!(
        "success: froze client {client_id} on conflicting headers at height {height}"
    ))?;

    Ok(())
}
