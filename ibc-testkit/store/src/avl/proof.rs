use ics23::{HashOp, InnerSpec, LeafOp, LengthOp, ProofSpec};

/// Prepended to every leaf before hashing, 64 zero bytes.
pub const LEAF_PREFIX: [u8; 64] = [0; 64];

pub(crate) fn leaf_op() -> LeafOp {
    LeafOp {
        hash: HashOp::Sha256.into(),
        prehash_key: HashOp::NoHash.into(),
        prehash_value: HashOp::NoHash.into(),
        length: LengthOp::NoPrefix.into(),
        prefix: LEAF_PREFIX.to_vec(),
    }
}

/// The ICS-23 spec of a single [`AvlTree`](super::AvlTree) level.
///
/// An inner node hashes `left || local || right`, where a missing child
/// contributes no bytes at all.
pub fn proof_spec() -> ProofSpec {
    ProofSpec {
        leaf_spec: Some(leaf_op()),
        inner_spec: Some(InnerSpec {
            child_order: vec![0, 1, 2],
            child_size: 32,
            min_prefix_length: 0,
            max_prefix_length: 64,
            empty_child: vec![],
            hash: HashOp::Sha256.into(),
        }),
        max_depth: 0,
        min_depth: 0,
        prehash_key_before_comparison: false,
    }
}
