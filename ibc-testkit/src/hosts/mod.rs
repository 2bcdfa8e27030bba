use core::fmt::Debug;

use ibc::core::client::types::{ConsensusState, Header, Height, SignedHeader, WeightedSignerSet};
use ibc::core::host::types::identifiers::ChainId;
use ibc::core::primitives::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use typed_builder::TypedBuilder;

pub mod mock;
pub mod tendermint;

pub use mock::MockHost;
pub use tendermint::TendermintHost;

#[derive(Debug, TypedBuilder)]
pub struct HostParams {
    #[builder(default = ChainId::new("mockgaia-0").expect("Never fails"))]
    pub chain_id: ChainId,
}

/// A block of the host: its signed header together with the set that signed
/// it and the set that signs the next one.
pub type HostBlock<H> = Header<<H as TestHost>::SignedHeader, <H as TestHost>::ValidatorSet>;
pub type HostConsensusState<H> = ConsensusState<<H as TestHost>::ValidatorSet>;
pub type HostBlockParams<H> = <H as TestHost>::BlockParams;

/// TestHost is a trait that defines the interface for a host blockchain.
///
/// A host only knows about blocks. The state they commit to is produced by
/// the context driving it, which passes the app hash of every new block.
pub trait TestHost: Clone + Debug + Sized {
    /// The signed header format of the blocks produced by the host.
    type SignedHeader: SignedHeader + Serialize + DeserializeOwned;

    /// The validator sets signing the blocks produced by the host.
    type ValidatorSet: WeightedSignerSet<Commit = Self::SignedHeader>
        + Serialize
        + DeserializeOwned;

    /// The type of block parameters to produce a block
    type BlockParams: Debug + Default;

    /// Client type of the light clients tracking this kind of host.
    const CLIENT_TYPE: &'static str;

    /// Build a new host with the given parameters.
    fn build(params: HostParams) -> Self;

    /// The chain identifier of the host.
    fn chain_id(&self) -> &ChainId;

    /// Every block produced so far, in ascending height order starting at 1.
    fn history(&self) -> &[HostBlock<Self>];

    fn push_block(&mut self, block: HostBlock<Self>);

    /// Generate a block at the given height committing to `app_hash`,
    /// signed according to the provided parameters.
    fn generate_block(
        &self,
        app_hash: Vec<u8>,
        height: u64,
        params: &Self::BlockParams,
    ) -> HostBlock<Self>;

    fn is_empty(&self) -> bool {
        self.history().is_empty()
    }

    fn latest_block(&self) -> Option<&HostBlock<Self>> {
        self.history().last()
    }

    fn get_block(&self, target_height: &Height) -> Option<&HostBlock<Self>> {
        let index = usize::try_from(target_height.value() - 1).ok()?;
        self.history().get(index)
    }

    /// Height of the latest block, `None` before genesis.
    fn latest_height(&self) -> Option<Height> {
        self.latest_block().and_then(|block| block.height().ok())
    }

    /// Triggers the advancing of the host chain, by extending the history of
    /// blocks with one committing to `app_hash`.
    fn advance_block(&mut self, app_hash: Vec<u8>, params: &Self::BlockParams) {
        let height = self
            .latest_height()
            .map_or(1, |latest| latest.increment().value());

        let new_block = self.generate_block(app_hash, height, params);

        self.push_block(new_block);
    }

    /// Checks that the history is sequential, and that every block is
    /// signed by the set its predecessor announced.
    fn validate(&self) -> Result<(), String> {
        for (index, block) in self.history().iter().enumerate() {
            let expected = index as u64 + 1;
            let height = block.height().map_err(|e| e.to_string())?;
            if height.value() != expected {
                return Err(format!(
                    "block at position {index} has height {height}, expected {expected}"
                ));
            }
            block.validate_basic().map_err(|e| e.to_string())?;
            block.verify_commit().map_err(|e| e.to_string())?;
        }

        for pair in self.history().windows(2) {
            if pair[0].next_validator_set.hash() != pair[1].validator_set.hash() {
                return Err(format!(
                    "block {} is not signed by the set announced by its predecessor",
                    pair[1].signed_header.height()
                ));
            }
        }

        Ok(())
    }
}
