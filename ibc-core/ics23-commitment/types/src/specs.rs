//! Defines proof specs, which encode the structure of ICS-23 proofs, one
//! spec per tree level, leaf-first.

use ibc_primitives::prelude::*;
use ibc_proto::ics23::{InnerSpec as RawInnerSpec, ProofSpec as RawProofSpec};

use crate::error::CommitmentError;

/// The proof specs of a multi-level store, each one checked for a sane
/// depth and prefix range on construction.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ProofSpecs(Vec<RawProofSpec>);

impl ProofSpecs {
    /// Returns the specification for Cosmos-SDK proofs: an IAVL store
    /// committed under a Tendermint simple merkle tree.
    pub fn cosmos() -> Self {
        Self(vec![ics23::iavl_spec(), ics23::tendermint_spec()])
    }

    /// Uses the same spec for every level of a `depth`-level tree.
    pub fn uniform(spec: RawProofSpec, depth: usize) -> Result<Self, CommitmentError> {
        let specs = Self::try_from(vec![spec; depth])?;
        specs.validate()?;
        Ok(specs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn validate(&self) -> Result<(), CommitmentError> {
        if self.is_empty() {
            return Err(CommitmentError::EmptyProofSpecs);
        }
        self.0.iter().try_for_each(check_spec)
    }
}

impl TryFrom<Vec<RawProofSpec>> for ProofSpecs {
    type Error = CommitmentError;

    fn try_from(specs: Vec<RawProofSpec>) -> Result<Self, CommitmentError> {
        specs.iter().try_for_each(check_spec)?;
        Ok(Self(specs))
    }
}

impl From<ProofSpecs> for Vec<RawProofSpec> {
    fn from(specs: ProofSpecs) -> Self {
        specs.0
    }
}

/// Non-positive depths mean "unbounded"; two positive bounds must form a
/// range.
fn check_spec(spec: &RawProofSpec) -> Result<(), CommitmentError> {
    if 0 < spec.min_depth && 0 < spec.max_depth && spec.max_depth < spec.min_depth {
        return Err(CommitmentError::InvalidDepthRange(
            spec.min_depth,
            spec.max_depth,
        ));
    }

    spec.inner_spec.as_ref().map_or(Ok(()), check_inner_spec)
}

fn check_inner_spec(inner_spec: &RawInnerSpec) -> Result<(), CommitmentError> {
    if inner_spec.child_size <= 0 {
        return Err(CommitmentError::InvalidChildSize(inner_spec.child_size));
    }

    let (min, max) = (inner_spec.min_prefix_length, inner_spec.max_prefix_length);
    if min < 0 || max < min {
        return Err(CommitmentError::InvalidPrefixLengthRange(min, max));
    }

    Ok(())
}
