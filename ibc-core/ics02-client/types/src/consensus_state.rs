//! Defines the consensus state: one tracked chain's committed state at a height.

use ibc_core_commitment_types::commitment::CommitmentRoot;
use ibc_core_host_types::identifiers::ChainId;

use crate::error::ClientError;
use crate::header::Header;
use crate::height::Height;
use crate::signer::{SignedHeader, WeightedSignerSet};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusState<V> {
    pub chain_id: ChainId,
    pub height: Height,
    pub root: CommitmentRoot,
    /// The set authorised to sign the commit of `height + 1`.
    pub next_validator_set: V,
}

impl<V> ConsensusState<V> {
    pub fn new(
        chain_id: ChainId,
        height: Height,
        root: CommitmentRoot,
        next_validator_set: V,
    ) -> Self {
        Self {
            chain_id,
            height,
            root,
            next_validator_set,
        }
    }

    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    /// Derives the consensus state a header establishes once accepted.
    pub fn from_header<S>(header: &Header<S, V>) -> Result<Self, ClientError>
    where
        S: SignedHeader,
        V: WeightedSignerSet<Commit = S>,
    {
        Ok(Self {
            chain_id: header.chain_id()?,
            height: header.height()?,
            root: header.root(),
            next_validator_set: header.next_validator_set.clone(),
        })
    }
}
