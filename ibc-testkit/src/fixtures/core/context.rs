use ibc::core::client::types::Height;
use ibc::core::commitment_types::specs::ProofSpecs;
use ibc::core::commitment_types::verifier::ProofFormat;
use ibc::core::primitives::prelude::*;
use ibc_query::core::ValidatorSetOffset;
use ibc_testkit_store::avl::proof_spec;
use typed_builder::TypedBuilder;

use crate::context::MockContext;
use crate::hosts::{HostParams, TestHost};

/// Configuration of a [`MockContext`] with a history of blocks.
///
/// The first block is signed with the default block parameters, the last
/// ones with `block_params_history`, in order, and the blocks in between
/// with the default parameters again.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = MockContext<H>))]
pub struct MockContextConfig<H>
where
    H: TestHost,
{
    #[builder(default = H::build(HostParams::builder().build()))]
    host: H,

    /// How the chain proves its own state. Two ICS-23 levels by default.
    #[builder(default = ics23())]
    proof_format: ProofFormat,

    #[builder(default)]
    validator_set_offset: ValidatorSetOffset,

    #[builder(default)]
    block_params_history: Vec<H::BlockParams>,

    #[builder(default = Height::new(5).expect("Never fails"))]
    latest_height: Height,
}

impl<H> From<MockContextConfig<H>> for MockContext<H>
where
    H: TestHost,
{
    fn from(params: MockContextConfig<H>) -> Self {
        let history_len = params.block_params_history.len() as u64;
        assert!(
            params.latest_height.value() > history_len,
            "The genesis block must precede the configured block parameters history"
        );

        let mut context = MockContext::new(
            params.host,
            params.proof_format,
            params.validator_set_offset,
        );

        // store is at version 0; no block

        context.generate_genesis_block(&Default::default());

        // store is at version 1; one block

        while context.latest_height().value() < params.latest_height.value() - history_len {
            context.advance_block();
        }

        for block_params in params.block_params_history {
            context.advance_with_block_params(&block_params);
        }

        assert_eq!(
            context.latest_height(),
            params.latest_height,
            "The latest height in the host must match the latest height in the context"
        );

        context
    }
}

/// Two levels of AVL proofs: the IBC store, then the store holding its root.
pub fn ics23() -> ProofFormat {
    ProofFormat::Ics23(ProofSpecs::uniform(proof_spec(), 2).expect("Never fails"))
}

pub fn simple_merkle() -> ProofFormat {
    ProofFormat::SimpleMerkle
}
