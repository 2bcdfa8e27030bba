//! Read-side client operations: looking up trusted state and checking
//! proofs of counterparty state against it.

use ibc_core_client_context::ClientValidationContext;
use ibc_core_client_types::error::ClientError;
use ibc_core_client_types::{ClientState, ConsensusState, Height, Status};
use ibc_core_commitment_types::commitment::{CommitmentPrefix, CommitmentProofBytes};
use ibc_core_commitment_types::path::apply_prefix;
use ibc_core_commitment_types::verifier::CommitmentVerifier;
use ibc_core_host_types::error::HostError;
use ibc_core_host_types::identifiers::ClientId;
use ibc_core_host_types::path::{ClientConsensusStatePath, Path};
use ibc_primitives::prelude::*;

/// Consensus state type of a client context.
pub type ConsensusStateOf<Ctx> = ConsensusState<<Ctx as ClientValidationContext>::ValidatorSet>;

/// Returns the client state of `client_id`, failing when the client is unknown.
pub fn client_state<Ctx>(ctx: &Ctx, client_id: &ClientId) -> Result<ClientState, ClientError>
where
    Ctx: ClientValidationContext,
{
    ctx.client_state(client_id)?
        .ok_or_else(|| ClientError::ClientNotFound {
            client_id: client_id.clone(),
        })
}

/// Returns whether `client_id` still accepts updates.
pub fn client_status<Ctx>(ctx: &Ctx, client_id: &ClientId) -> Result<Status, ClientError>
where
    Ctx: ClientValidationContext,
{
    Ok(client_state(ctx, client_id)?.status())
}

/// Exact-height lookup of a stored consensus state.
pub fn consensus_state_at<Ctx>(
    ctx: &Ctx,
    client_id: &ClientId,
    height: Height,
) -> Result<Option<ConsensusStateOf<Ctx>>, ClientError>
where
    Ctx: ClientValidationContext,
{
    let path = ClientConsensusStatePath::new(client_id.clone(), height.value());
    Ok(ctx.consensus_state(&path)?)
}

/// The consensus state at the client's latest height.
///
/// A client always holds a consensus state at its latest height, so a miss
/// here is a broken store.
pub fn latest_consensus_state<Ctx>(
    ctx: &Ctx,
    client_id: &ClientId,
) -> Result<ConsensusStateOf<Ctx>, ClientError>
where
    Ctx: ClientValidationContext,
{
    let latest_height = client_state(ctx, client_id)?.latest_height();
    consensus_state_at(ctx, client_id, latest_height)?.ok_or_else(|| {
        HostError::broken_invariant(format!(
            "client {client_id} has no consensus state at its latest height {latest_height}"
        ))
        .into()
    })
}

/// The consensus state with the greatest height strictly below `height`.
pub fn prev_consensus_state<Ctx>(
    ctx: &Ctx,
    client_id: &ClientId,
    height: Height,
) -> Result<Option<ConsensusStateOf<Ctx>>, ClientError>
where
    Ctx: ClientValidationContext,
{
    let prev_height = ctx
        .consensus_state_heights(client_id)?
        .into_iter()
        .filter(|h| *h < height)
        .max();

    match prev_height {
        Some(prev_height) => consensus_state_at(ctx, client_id, prev_height),
        None => Ok(None),
    }
}

/// Fetches the pieces every proof check needs: an active client and its
/// consensus state at `height`.
fn trusted_state<Ctx>(
    ctx: &Ctx,
    client_id: &ClientId,
    height: Height,
) -> Result<(ClientState, ConsensusStateOf<Ctx>), ClientError>
where
    Ctx: ClientValidationContext,
{
    let client_state = client_state(ctx, client_id)?;

    if client_state.is_frozen() {
        return Err(ClientError::ClientFrozen {
            client_id: client_id.clone(),
        });
    }

    let consensus_state = consensus_state_at(ctx, client_id, height)?.ok_or_else(|| {
        ClientError::HeightNotFound {
            client_id: client_id.clone(),
            height,
        }
    })?;

    Ok((client_state, consensus_state))
}

/// Checks that `proof` shows `value` stored at `path` in the counterparty
/// state committed at `height`, as tracked by `client_id`.
pub fn verify_membership<Ctx>(
    ctx: &Ctx,
    client_id: &ClientId,
    height: Height,
    prefix: &CommitmentPrefix,
    path: &Path,
    value: &[u8],
    proof: &CommitmentProofBytes,
) -> Result<(), ClientError>
where
    Ctx: ClientValidationContext,
{
    let (client_state, consensus_state) = trusted_state(ctx, client_id, height)?;
    let commitment_path = apply_prefix(prefix, path)?;

    client_state.proof_format.verify_membership(
        consensus_state.root(),
        &commitment_path,
        value,
        proof,
    )?;

    Ok(())
}

/// Checks that `proof` shows nothing is stored at `path` in the counterparty
/// state committed at `height`.
pub fn verify_non_membership<Ctx>(
    ctx: &Ctx,
    client_id: &ClientId,
    height: Height,
    prefix: &CommitmentPrefix,
    path: &Path,
    proof: &CommitmentProofBytes,
) -> Result<(), ClientError>
where
    Ctx: ClientValidationContext,
{
    let (client_state, consensus_state) = trusted_state(ctx, client_id, height)?;
    let commitment_path = apply_prefix(prefix, path)?;

    client_state.proof_format.verify_non_membership(
        consensus_state.root(),
        &commitment_path,
        proof,
    )?;

    Ok(())
}
