use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::WeightedSignerSet;
use ibc_primitives::prelude::*;
use tendermint::validator::Set as TmValidatorSet;
use tendermint_light_client_verifier::operations::voting_power::{
    ProdVotingPowerCalculator, VotingPowerCalculator,
};
use tendermint_light_client_verifier::types::TrustThreshold;

use crate::SignedHeader;

/// A Tendermint validator set, weighing each validator by its voting power.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From, derive_more::Into)]
pub struct ValidatorSet(TmValidatorSet);

impl ValidatorSet {
    pub fn inner(&self) -> &TmValidatorSet {
        &self.0
    }
}

impl WeightedSignerSet for ValidatorSet {
    type Commit = SignedHeader;

    fn total_voting_power(&self) -> u64 {
        self.0.total_voting_power().value()
    }

    /// Tallies the commit signatures of members of this set.
    ///
    /// The commit must be for the block the header describes; signatures of
    /// validators outside this set are ignored.
    fn signed_voting_power(&self, commit: &SignedHeader) -> Result<u64, ClientError> {
        let signed_header = commit.inner();

        if signed_header.commit.height != signed_header.header.height {
            return Err(ClientError::invalid_header(format!(
                "commit height {} differs from header height {}",
                signed_header.commit.height, signed_header.header.height
            )));
        }
        if signed_header.commit.block_id.hash != signed_header.header.hash() {
            return Err(ClientError::invalid_header(
                "commit is for a different block than the header",
            ));
        }

        let tally = ProdVotingPowerCalculator::default()
            .voting_power_in(signed_header, &self.0, TrustThreshold::TWO_THIRDS)
            .map_err(|e| ClientError::invalid_header(format!("invalid commit: {e}")))?;

        Ok(tally.tallied)
    }

    fn hash(&self) -> Vec<u8> {
        self.0.hash().as_bytes().to_vec()
    }
}
