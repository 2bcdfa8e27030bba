//! The commitment verifier seam: one trait, one implementation per proof
//! encoding, and [`ProofFormat`] to pick between them by the tag a client
//! stores alongside its state.

use ibc_primitives::prelude::*;
use ics23::HostFunctionsManager;

use crate::commitment::{CommitmentProofBytes, CommitmentRoot};
use crate::error::CommitmentError;
use crate::merkle::MerkleProof;
use crate::path::CommitmentPath;
use crate::simple::SimpleMerkleProof;
use crate::specs::ProofSpecs;

/// Checks proofs of presence or absence of a key under a commitment root.
///
/// Implementations are deterministic and side-effect free. A proof that does
/// not check out is an `Err`, never a panic.
pub trait CommitmentVerifier {
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        value: &[u8],
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError>;

    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError>;
}

/// ICS-23 proofs are checked against one spec per level.
impl CommitmentVerifier for ProofSpecs {
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        value: &[u8],
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError> {
        MerkleProof::try_from(proof)?.verify_membership::<HostFunctionsManager>(
            self,
            root,
            path,
            value.to_vec(),
            0,
        )
    }

    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError> {
        MerkleProof::try_from(proof)?.verify_non_membership::<HostFunctionsManager>(
            self, root, path,
        )
    }
}

/// Verifier for [`SimpleMerkleProof`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleMerkle;

impl CommitmentVerifier for SimpleMerkle {
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        value: &[u8],
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError> {
        SimpleMerkleProof::try_from(proof)?.verify_membership(root, path, value.to_vec())
    }

    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError> {
        SimpleMerkleProof::try_from(proof)?.verify_non_membership(root, path)
    }
}

/// What a proof is claimed to show about a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Claim<'a> {
    /// The path holds exactly this value.
    Member(&'a [u8]),
    /// The path holds no value.
    Absent,
}

/// The proof encoding a client expects from its counterparty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ProofFormat {
    Ics23(ProofSpecs),
    SimpleMerkle,
}

impl ProofFormat {
    /// Wire tag of the format, as stored in client states.
    pub fn tag(&self) -> i32 {
        match self {
            Self::Ics23(_) => 0,
            Self::SimpleMerkle => 1,
        }
    }

    /// Rebuilds a format from its wire tag. ICS-23 formats need their specs.
    pub fn from_tag(tag: i32, specs: ProofSpecs) -> Result<Self, CommitmentError> {
        match tag {
            0 => {
                specs.validate()?;
                Ok(Self::Ics23(specs))
            }
            1 => Ok(Self::SimpleMerkle),
            _ => Err(CommitmentError::UnknownProofFormat(tag)),
        }
    }

    pub fn proof_specs(&self) -> Option<&ProofSpecs> {
        match self {
            Self::Ics23(specs) => Some(specs),
            Self::SimpleMerkle => None,
        }
    }

    /// The boolean form of the verifier contract: true iff `proof` shows
    /// `claim` for `path` under `root`.
    pub fn verify(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        proof: &CommitmentProofBytes,
        claim: Claim<'_>,
    ) -> bool {
        match claim {
            Claim::Member(value) => self.verify_membership(root, path, value, proof),
            Claim::Absent => self.verify_non_membership(root, path, proof),
        }
        .is_ok()
    }
}

impl CommitmentVerifier for ProofFormat {
    fn verify_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        value: &[u8],
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError> {
        match self {
            Self::Ics23(specs) => specs.verify_membership(root, path, value, proof),
            Self::SimpleMerkle => SimpleMerkle.verify_membership(root, path, value, proof),
        }
    }

    fn verify_non_membership(
        &self,
        root: &CommitmentRoot,
        path: &CommitmentPath,
        proof: &CommitmentProofBytes,
    ) -> Result<(), CommitmentError> {
        match self {
            Self::Ics23(specs) => specs.verify_non_membership(root, path, proof),
            Self::SimpleMerkle => SimpleMerkle.verify_non_membership(root, path, proof),
        }
    }
}
