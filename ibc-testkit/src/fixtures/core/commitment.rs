use ibc::core::commitment_types::commitment::CommitmentProofBytes;
use ibc::core::commitment_types::merkle::MerkleProof;
use ibc::core::primitives::prelude::*;
use ibc_proto::ics23::CommitmentProof;

/// Returns a dummy `CommitmentProofBytes`, for testing purposes only!
pub fn dummy_commitment_proof_bytes() -> CommitmentProofBytes {
    let parsed = CommitmentProof { proof: None };
    let mproofs: Vec<CommitmentProof> = vec![parsed];
    MerkleProof { proofs: mproofs }
        .try_into()
        .expect("could not convert to CommitmentProofBytes")
}
