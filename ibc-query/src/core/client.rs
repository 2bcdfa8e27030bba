//! Provides utility functions for querying the consensus view of a chain:
//! its headers and the consensus states a light client derives from them.

use ibc::core::client::types::{ConsensusState, Header, Height};
use tracing::{debug, trace};

use super::{ChainNode, ValidatorSetOffset};
use crate::error::QueryError;

pub type NodeHeader<N> = Header<<N as ChainNode>::SignedHeader, <N as ChainNode>::ValidatorSet>;

pub type NodeConsensusState<N> = ConsensusState<<N as ChainNode>::ValidatorSet>;

/// Queries for the header committed at `height`, or at the latest height.
///
/// The header carries the set that signed it and the set that signs the
/// following block, both looked up through `offset`.
pub fn query_header<N>(
    node: &N,
    height: Option<Height>,
    offset: ValidatorSetOffset,
) -> Result<NodeHeader<N>, QueryError>
where
    N: ChainNode,
{
    let height = match height {
        Some(height) => height,
        None => node.latest_height()?,
    };

    debug!(%height, ?offset, "querying header");

    let signed_header = node
        .signed_header(height)?
        .ok_or(QueryError::HeaderNotFound { height })?;

    let validator_set = validator_set_signing(node, height, offset)?;
    let next_validator_set = validator_set_signing(node, height.increment(), offset)?;

    Ok(Header::new(signed_header, validator_set, next_validator_set))
}

/// Queries for the consensus state a light client would derive from the
/// header at `height`, or at the latest height.
pub fn query_consensus_state<N>(
    node: &N,
    height: Option<Height>,
    offset: ValidatorSetOffset,
) -> Result<NodeConsensusState<N>, QueryError>
where
    N: ChainNode,
{
    let header = query_header(node, height, offset)?;

    Ok(ConsensusState::from_header(&header)?)
}

fn validator_set_signing<N>(
    node: &N,
    height: Height,
    offset: ValidatorSetOffset,
) -> Result<N::ValidatorSet, QueryError>
where
    N: ChainNode,
{
    let index = offset.signer_index(height);

    trace!(%height, index, "looking up signing validator set");

    node.validator_set(index)?
        .ok_or(QueryError::ValidatorSetNotFound { index })
}
