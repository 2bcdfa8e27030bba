//! The weighted signer set seam.
//!
//! The client logic never looks inside a validator set or a commit. It only
//! needs the total and the signed voting power, and hashes to compare sets
//! and blocks.

use core::fmt::Debug;

use ibc_primitives::prelude::*;
use ibc_primitives::utils::hex_upper;

use crate::error::ClientError;

/// A set of signers, each carrying a voting power.
pub trait WeightedSignerSet: Clone + Debug + PartialEq {
    /// The signed artefact whose signatures are counted against this set.
    type Commit;

    fn total_voting_power(&self) -> u64;

    /// Sums the voting power of the members of this set that validly signed
    /// `commit`. Malformed signatures or foreign signers are an error.
    fn signed_voting_power(&self, commit: &Self::Commit) -> Result<u64, ClientError>;

    /// Hash identifying the set; two sets are the same iff their hashes are.
    fn hash(&self) -> Vec<u8>;
}

/// Block metadata plus the quorum commit for that block.
pub trait SignedHeader: Clone + Debug + PartialEq {
    fn chain_id(&self) -> &str;

    fn height(&self) -> u64;

    /// The committed app-state hash, which becomes the consensus state root.
    fn app_hash(&self) -> Vec<u8>;

    /// Hash of the block this header describes.
    fn hash(&self) -> Vec<u8>;

    fn validators_hash(&self) -> Vec<u8>;

    fn next_validators_hash(&self) -> Vec<u8>;
}

/// Checks that strictly more than 2/3 of `total` voting power signed.
pub fn verify_quorum(signed: u64, total: u64) -> Result<(), ClientError> {
    if total > 0 && u128::from(signed) * 3 > u128::from(total) * 2 {
        Ok(())
    } else {
        Err(ClientError::InsufficientVotingPower { signed, total })
    }
}

/// Checks that `actual` is the same set as `expected`.
pub fn verify_same_set<V: WeightedSignerSet>(expected: &V, actual: &V) -> Result<(), ClientError> {
    let (expected, actual) = (expected.hash(), actual.hash());
    if expected == actual {
        return Ok(());
    }
    Err(ClientError::ValidatorSetMismatch {
        expected: hex_upper(&expected).unwrap_or_default(),
        actual: hex_upper(&actual).unwrap_or_default(),
    })
}
