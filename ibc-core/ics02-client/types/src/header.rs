//! Defines the header submitted to extend a client's trusted state.

use ibc_core_commitment_types::commitment::CommitmentRoot;
use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;

use crate::error::ClientError;
use crate::height::Height;
use crate::signer::{verify_quorum, SignedHeader, WeightedSignerSet};

/// Evidence submitted by a relayer to advance a client: a signed header, the
/// set that signed it and the set authorised for the following height.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Header<S, V> {
    pub signed_header: S,
    pub validator_set: V,
    pub next_validator_set: V,
}

impl<S, V> Header<S, V>
where
    S: SignedHeader,
    V: WeightedSignerSet<Commit = S>,
{
    pub fn new(signed_header: S, validator_set: V, next_validator_set: V) -> Self {
        Self {
            signed_header,
            validator_set,
            next_validator_set,
        }
    }

    pub fn height(&self) -> Result<Height, ClientError> {
        Height::new(self.signed_header.height())
            .map_err(|_| ClientError::invalid_header("header height is zero"))
    }

    pub fn chain_id(&self) -> Result<ChainId, ClientError> {
        Ok(ChainId::new(self.signed_header.chain_id())?)
    }

    pub fn root(&self) -> CommitmentRoot {
        CommitmentRoot::from(self.signed_header.app_hash())
    }

    /// Checks that the carried validator sets are the ones the signed header
    /// commits to.
    pub fn validate_basic(&self) -> Result<(), ClientError> {
        if self.validator_set.hash() != self.signed_header.validators_hash() {
            return Err(ClientError::invalid_header(
                "validator set does not match the header's validators hash",
            ));
        }
        if self.next_validator_set.hash() != self.signed_header.next_validators_hash() {
            return Err(ClientError::invalid_header(
                "next validator set does not match the header's next validators hash",
            ));
        }
        Ok(())
    }

    /// Checks that more than 2/3 of the carried validator set signed the header.
    pub fn verify_commit(&self) -> Result<(), ClientError> {
        let signed = self.validator_set.signed_voting_power(&self.signed_header)?;
        verify_quorum(signed, self.validator_set.total_voting_power())
    }
}
