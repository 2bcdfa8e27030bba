use ibc::clients::tendermint::{SignedHeader, ValidatorSet, TENDERMINT_CLIENT_TYPE};
use ibc::core::client::types::Header;
use ibc::core::host::types::identifiers::ChainId;
use ibc::core::primitives::prelude::*;
use tendermint::Time;
use tendermint_testgen::light_block::TmLightBlock;
use tendermint_testgen::{
    Generator, Header as TestgenHeader, LightBlock as TestgenLightBlock,
    Validator as TestgenValidator,
};
use typed_builder::TypedBuilder;

use super::{HostBlock, HostParams, TestHost};

/// Unix time of block 1, 2023-01-01T00:00:00Z.
pub const GENESIS_UNIX_SECS: u64 = 1_672_531_200;

pub const DEFAULT_BLOCK_TIME_SECS: u64 = 3;

/// A host that produces Tendermint blocks signed by `tendermint-testgen`
/// validators.
#[derive(TypedBuilder, Clone, Debug)]
pub struct TendermintHost {
    /// Unique identifier for the chain.
    #[builder(default = ChainId::new("mock-0").expect("Never fails"))]
    pub chain_id: ChainId,
    /// The chain of blocks underlying this context.
    #[builder(default)]
    pub history: Vec<HostBlock<TendermintHost>>,
}

impl Default for TendermintHost {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TestHost for TendermintHost {
    type SignedHeader = SignedHeader;
    type ValidatorSet = ValidatorSet;
    type BlockParams = BlockParams;

    const CLIENT_TYPE: &'static str = TENDERMINT_CLIENT_TYPE;

    fn build(params: HostParams) -> Self {
        Self::builder().chain_id(params.chain_id).build()
    }

    fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn history(&self) -> &[HostBlock<Self>] {
        &self.history
    }

    fn push_block(&mut self, block: HostBlock<Self>) {
        self.history.push(block);
    }

    fn generate_block(
        &self,
        app_hash: Vec<u8>,
        height: u64,
        params: &Self::BlockParams,
    ) -> HostBlock<Self> {
        let light_block: TmLightBlock = TestgenLightBlock::new_default_with_header(
            TestgenHeader::new(&params.validators)
                .app_hash(app_hash.try_into().expect("infallible"))
                .height(height)
                .chain_id(self.chain_id.as_str())
                .next_validators(&params.next_validators)
                .time(block_time(height)),
        )
        .validators(&params.validators)
        .next_validators(&params.next_validators)
        .generate()
        .expect("Never fails");

        Header::new(
            light_block.signed_header.into(),
            light_block.validators.into(),
            light_block.next_validators.into(),
        )
    }
}

/// Block times are a pure function of the height, so two hosts built from
/// the same parameters produce identical blocks.
fn block_time(height: u64) -> Time {
    let secs = GENESIS_UNIX_SECS + (height - 1) * DEFAULT_BLOCK_TIME_SECS;
    Time::from_unix_timestamp(i64::try_from(secs).expect("Never fails"), 0).expect("Never fails")
}

#[derive(Debug, TypedBuilder)]
pub struct BlockParams {
    pub validators: Vec<TestgenValidator>,
    pub next_validators: Vec<TestgenValidator>,
}

impl BlockParams {
    pub fn from_validator_history(validator_history: Vec<Vec<TestgenValidator>>) -> Vec<Self> {
        validator_history
            .windows(2)
            .map(|vals| {
                Self::builder()
                    .validators(vals[0].clone())
                    .next_validators(vals[1].clone())
                    .build()
            })
            .collect()
    }
}

impl Default for BlockParams {
    fn default() -> Self {
        let validators = vec![
            TestgenValidator::new("1").voting_power(50),
            TestgenValidator::new("2").voting_power(50),
        ];

        Self::builder()
            .validators(validators.clone())
            .next_validators(validators)
            .build()
    }
}
