use ibc::core::host::types::identifiers::ChainId;
use ibc::core::primitives::prelude::*;
use typed_builder::TypedBuilder;

use super::{HostBlock, HostParams, TestHost};
use crate::testapp::ibc::clients::mock::header::MockSignedHeader;
use crate::testapp::ibc::clients::mock::validator_set::MockValidatorSet;
use crate::testapp::ibc::clients::mock::MOCK_CLIENT_TYPE;
use crate::testapp::ibc::clients::MockHeader;

/// A host producing blocks signed by every member of a [`MockValidatorSet`].
#[derive(TypedBuilder, Clone, Debug)]
pub struct MockHost {
    /// Unique identifier for the chain.
    #[builder(default = ChainId::new("mock-0").expect("Never fails"))]
    pub chain_id: ChainId,
    /// The chain of blocks underlying this context.
    #[builder(default)]
    pub history: Vec<MockHeader>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TestHost for MockHost {
    type SignedHeader = MockSignedHeader;
    type ValidatorSet = MockValidatorSet;
    type BlockParams = MockBlockParams;

    const CLIENT_TYPE: &'static str = MOCK_CLIENT_TYPE;

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
        let signers = params.validators.names();

        let signed_header = MockSignedHeader::new(
            self.chain_id.clone(),
            height,
            app_hash,
            &params.validators,
            &params.next_validators,
        )
        .signed_by(&signers);

        MockHeader::new(
            signed_header,
            params.validators.clone(),
            params.next_validators.clone(),
        )
    }
}

/// The set signing a mock block and the one announced for the next block.
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct MockBlockParams {
    #[builder(default)]
    pub validators: MockValidatorSet,
    #[builder(default)]
    pub next_validators: MockValidatorSet,
}

impl MockBlockParams {
    /// One set of parameters per consecutive pair of `validator_history`.
    pub fn from_validator_history(validator_history: Vec<MockValidatorSet>) -> Vec<Self> {
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
