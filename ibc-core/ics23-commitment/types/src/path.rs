//! Commitment paths: the key segments, root-to-leaf, under which a record is
//! committed in a chain's multi-level state tree.

use ibc_core_host_types::path::{Namespace, Path};
use ibc_primitives::prelude::*;

use crate::commitment::CommitmentPrefix;
use crate::error::CommitmentError;

/// A sequence of byte-string key segments, ordered from the outermost tree
/// to the innermost one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitmentPath {
    pub key_path: Vec<Vec<u8>>,
}

impl CommitmentPath {
    pub fn new(key_path: Vec<Vec<u8>>) -> Self {
        Self { key_path }
    }

    pub fn len(&self) -> usize {
        self.key_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_path.is_empty()
    }
}

/// Builds the commitment path of a protocol record: the host's store prefix
/// followed by the record's full store key.
///
/// Prover and verifier both go through this function, so the bytes they
/// produce for the same logical key are identical.
pub fn apply_prefix(
    prefix: &CommitmentPrefix,
    path: &Path,
) -> Result<CommitmentPath, CommitmentError> {
    if path.namespace() != Namespace::Protocol {
        return Err(CommitmentError::UnprovablePath {
            path: path.store_key(),
        });
    }

    Ok(CommitmentPath {
        key_path: vec![prefix.as_bytes().to_vec(), path.store_key().into_bytes()],
    })
}
