//! A simple binary merkle tree over sorted key/value leaves.
//!
//! The tree shape follows RFC-6962: a tree over `n > 1` leaves splits at the
//! largest power of two strictly below `n`. Leaves are domain-separated from
//! inner nodes by a `0x00`/`0x01` prefix and the root of an empty tree is the
//! hash of the empty string. Both the prover ([`SimpleMerkleTree`]) and the
//! verifier ([`SimpleMerkleProof`]) live here so the two sides cannot drift.

use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use sha2::{Digest, Sha256};

use crate::commitment::{CommitmentProofBytes, CommitmentRoot};
use crate::error::CommitmentError;
use crate::path::CommitmentPath;

const LEAF_PREFIX: u8 = 0;
const INNER_PREFIX: u8 = 1;

/// Existence proof of a single leaf.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RawLeafProof {
    #[prost(uint64, tag = "1")]
    pub index: u64,
    #[prost(uint64, tag = "2")]
    pub total: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub key: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub value: Vec<u8>,
    /// Sibling hashes, leaf-to-root.
    #[prost(bytes = "vec", repeated, tag = "5")]
    pub aunts: Vec<Vec<u8>>,
}

/// Proof for one tree level: either `exist` is set, or the absence of the key
/// is shown by the adjacent `left`/`right` leaves around it.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RawSimpleProofLevel {
    #[prost(message, optional, tag = "1")]
    pub exist: Option<RawLeafProof>,
    #[prost(message, optional, tag = "2")]
    pub left: Option<RawLeafProof>,
    #[prost(message, optional, tag = "3")]
    pub right: Option<RawLeafProof>,
    #[prost(uint64, tag = "4")]
    pub total: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RawSimpleMerkleProof {
    /// Ordered leaf-first, like ICS-23 multi-level proofs.
    #[prost(message, repeated, tag = "1")]
    pub levels: Vec<RawSimpleProofLevel>,
}

pub fn empty_hash() -> Vec<u8> {
    Sha256::digest(b"").to_vec()
}

pub fn leaf_hash(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_PREFIX]);
    hasher.update(length_prefix(key));
    hasher.update(key);
    hasher.update(length_prefix(value));
    hasher.update(value);
    hasher.finalize().to_vec()
}

pub fn inner_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().to_vec()
}

fn length_prefix(bytes: &[u8]) -> [u8; 4] {
    // keys and values are bounded well below 4GiB by the host store
    u32::try_from(bytes.len()).unwrap_or(u32::MAX).to_be_bytes()
}

/// Largest power of two strictly less than `n`, for `n >= 2`.
fn split_point(n: usize) -> usize {
    1 << (usize::BITS - 1 - (n - 1).leading_zeros())
}

fn root_of(hashes: &[Vec<u8>]) -> Vec<u8> {
    match hashes {
        [] => empty_hash(),
        [single] => single.clone(),
        _ => {
            let k = split_point(hashes.len());
            inner_hash(&root_of(&hashes[..k]), &root_of(&hashes[k..]))
        }
    }
}

fn aunts_of(hashes: &[Vec<u8>], index: usize) -> Vec<Vec<u8>> {
    if hashes.len() <= 1 {
        return Vec::new();
    }
    let k = split_point(hashes.len());
    if index < k {
        let mut aunts = aunts_of(&hashes[..k], index);
        aunts.push(root_of(&hashes[k..]));
        aunts
    } else {
        let mut aunts = aunts_of(&hashes[k..], index - k);
        aunts.push(root_of(&hashes[..k]));
        aunts
    }
}

/// Recomputes the root from a leaf hash and its leaf-to-root aunts. Returns
/// `None` if the aunts do not fit the tree shape given by `index` and `total`.
fn root_from_aunts(index: u64, total: u64, leaf: Vec<u8>, aunts: &[Vec<u8>]) -> Option<Vec<u8>> {
    if total == 0 || index >= total {
        return None;
    }
    if total == 1 {
        return aunts.is_empty().then_some(leaf);
    }
    let (sibling, rest) = aunts.split_last()?;
    let num_left = split_point(usize::try_from(total).ok()?) as u64;
    if index < num_left {
        let left = root_from_aunts(index, num_left, leaf, rest)?;
        Some(inner_hash(&left, sibling))
    } else {
        let right = root_from_aunts(index - num_left, total - num_left, leaf, rest)?;
        Some(inner_hash(sibling, &right))
    }
}

impl RawLeafProof {
    /// Computes the root this leaf proof commits to.
    pub fn root(&self) -> Option<Vec<u8>> {
        root_from_aunts(
            self.index,
            self.total,
            leaf_hash(&self.key, &self.value),
            &self.aunts,
        )
    }
}

/// Prover side: an in-memory tree over sorted key/value pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleMerkleTree {
    leaves: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl SimpleMerkleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) -> Option<Vec<u8>> {
        self.leaves.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    fn leaf_hashes(&self) -> Vec<Vec<u8>> {
        self.leaves.iter().map(|(k, v)| leaf_hash(k, v)).collect()
    }

    pub fn root(&self) -> Vec<u8> {
        root_of(&self.leaf_hashes())
    }

    fn leaf_proof(&self, hashes: &[Vec<u8>], index: usize) -> Option<RawLeafProof> {
        let (key, value) = self.leaves.iter().nth(index)?;
        Some(RawLeafProof {
            index: index as u64,
            total: hashes.len() as u64,
            key: key.clone(),
            value: value.clone(),
            aunts: aunts_of(hashes, index),
        })
    }

    /// Proves the presence of `key`, or its absence through the neighbouring
    /// leaves when it is not in the tree.
    pub fn prove(&self, key: &[u8]) -> RawSimpleProofLevel {
        let hashes = self.leaf_hashes();
        let position = self.leaves.keys().position(|k| k.as_slice() >= key);

        match position {
            Some(index) if self.leaves.keys().nth(index).map(Vec::as_slice) == Some(key) => {
                RawSimpleProofLevel {
                    exist: self.leaf_proof(&hashes, index),
                    left: None,
                    right: None,
                    total: hashes.len() as u64,
                }
            }
            Some(index) => RawSimpleProofLevel {
                exist: None,
                left: index
                    .checked_sub(1)
                    .and_then(|left| self.leaf_proof(&hashes, left)),
                right: self.leaf_proof(&hashes, index),
                total: hashes.len() as u64,
            },
            None => RawSimpleProofLevel {
                exist: None,
                left: hashes
                    .len()
                    .checked_sub(1)
                    .and_then(|last| self.leaf_proof(&hashes, last)),
                right: None,
                total: hashes.len() as u64,
            },
        }
    }
}

impl FromIterator<(Vec<u8>, Vec<u8>)> for SimpleMerkleTree {
    fn from_iter<T: IntoIterator<Item = (Vec<u8>, Vec<u8>)>>(iter: T) -> Self {
        Self {
            leaves: iter.into_iter().collect(),
        }
    }
}

/// Verifier side: one proof level per tree, leaf-first.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleMerkleProof {
    pub levels: Vec<RawSimpleProofLevel>,
}

impl Protobuf<RawSimpleMerkleProof> for SimpleMerkleProof {}

impl TryFrom<RawSimpleMerkleProof> for SimpleMerkleProof {
    type Error = CommitmentError;

    fn try_from(raw: RawSimpleMerkleProof) -> Result<Self, Self::Error> {
        if raw.levels.is_empty() {
            return Err(CommitmentError::EmptyMerkleProof);
        }
        Ok(Self { levels: raw.levels })
    }
}

impl From<SimpleMerkleProof> for RawSimpleMerkleProof {
    fn from(proof: SimpleMerkleProof) -> Self {
        Self {
            levels: proof.levels,
        }
    }
}

impl TryFrom<SimpleMerkleProof> for CommitmentProofBytes {
    type Error = CommitmentError;

    fn try_from(value: SimpleMerkleProof) -> Result<Self, Self::Error> {
        Self::try_from(value.encode_vec())
    }
}

impl<'a> TryFrom<&'a CommitmentProofBytes> for SimpleMerkleProof {
    type Error = CommitmentError;

    fn try_from(value: &'a CommitmentProofBytes) -> Result<Self, Self::Error> {
        Protobuf::<RawSimpleMerkleProof>::decode(value.as_bytes())
            .map_err(|e| CommitmentError::DecodingFailure(e.to_string()))
    }
}

impl SimpleMerkleProof {
    pub fn verify_membership(
        &self,
        root: &CommitmentRoot,
        keys: &CommitmentPath,
        value: Vec<u8>,
    ) -> Result<(), CommitmentError> {
        if value.is_empty() {
            return Err(CommitmentError::EmptyVerifiedValue);
        }
        self.check_arguments(root, keys)?;
        self.verify_existence_from(root, keys, value, 0)
    }

    pub fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        keys: &CommitmentPath,
    ) -> Result<(), CommitmentError> {
        self.check_arguments(root, keys)?;

        let level = self
            .levels
            .first()
            .ok_or(CommitmentError::InvalidMerkleProof)?;
        let key = keys
            .key_path
            .last()
            .ok_or(CommitmentError::InvalidMerkleProof)?;

        let subroot = absence_root(level, key)?;

        self.verify_existence_from(root, keys, subroot, 1)
    }

    fn check_arguments(
        &self,
        root: &CommitmentRoot,
        keys: &CommitmentPath,
    ) -> Result<(), CommitmentError> {
        if self.levels.is_empty() {
            return Err(CommitmentError::EmptyMerkleProof);
        }
        if root.is_empty() {
            return Err(CommitmentError::EmptyMerkleRoot);
        }
        if keys.len() != self.levels.len() {
            return Err(CommitmentError::NumberOfKeysMismatch);
        }
        Ok(())
    }

    fn verify_existence_from(
        &self,
        root: &CommitmentRoot,
        keys: &CommitmentPath,
        value: Vec<u8>,
        start_index: usize,
    ) -> Result<(), CommitmentError> {
        let mut value = value;
        // keys are represented from root-to-leaf
        for (level, key) in self
            .levels
            .iter()
            .zip(keys.key_path.iter().rev())
            .skip(start_index)
        {
            let leaf = level
                .exist
                .as_ref()
                .ok_or(CommitmentError::InvalidMerkleProof)?;
            if &leaf.key != key || leaf.value != value {
                return Err(CommitmentError::VerificationFailure);
            }
            value = leaf.root().ok_or(CommitmentError::InvalidMerkleProof)?;
        }

        if root.as_bytes() != value.as_slice() {
            return Err(CommitmentError::VerificationFailure);
        }

        Ok(())
    }
}

/// Checks that `level` shows `key` absent and returns the root of that tree.
fn absence_root(level: &RawSimpleProofLevel, key: &[u8]) -> Result<Vec<u8>, CommitmentError> {
    if level.exist.is_some() {
        return Err(CommitmentError::InvalidMerkleProof);
    }

    let left_root = match &level.left {
        Some(left) => {
            if left.key.as_slice() >= key || left.total != level.total {
                return Err(CommitmentError::VerificationFailure);
            }
            Some(left.root().ok_or(CommitmentError::InvalidMerkleProof)?)
        }
        None => None,
    };
    let right_root = match &level.right {
        Some(right) => {
            if right.key.as_slice() <= key || right.total != level.total {
                return Err(CommitmentError::VerificationFailure);
            }
            Some(right.root().ok_or(CommitmentError::InvalidMerkleProof)?)
        }
        None => None,
    };

    match (&level.left, &level.right, left_root, right_root) {
        (Some(left), Some(right), Some(l_root), Some(r_root)) => {
            if left.index + 1 != right.index || l_root != r_root {
                return Err(CommitmentError::VerificationFailure);
            }
            Ok(l_root)
        }
        (None, Some(right), None, Some(r_root)) => {
            if right.index != 0 {
                return Err(CommitmentError::VerificationFailure);
            }
            Ok(r_root)
        }
        (Some(left), None, Some(l_root), None) => {
            if left.index + 1 != left.total {
                return Err(CommitmentError::VerificationFailure);
            }
            Ok(l_root)
        }
        (None, None, _, _) if level.total == 0 => Ok(empty_hash()),
        _ => Err(CommitmentError::InvalidMerkleProof),
    }
}
