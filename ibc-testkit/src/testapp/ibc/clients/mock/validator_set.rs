use std::collections::BTreeSet;

use ibc::core::client::types::error::ClientError;
use ibc::core::client::types::WeightedSignerSet;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::header::MockSignedHeader;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockValidator {
    pub name: String,
    pub power: u64,
}

impl MockValidator {
    pub fn new(name: &str, power: u64) -> Self {
        Self {
            name: name.to_string(),
            power,
        }
    }
}

/// A validator set whose members sign by name.
///
/// Members are kept sorted by name, so two sets built from the same
/// validators in any order hash the same.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockValidatorSet {
    validators: Vec<MockValidator>,
}

impl MockValidatorSet {
    pub fn new(mut validators: Vec<MockValidator>) -> Self {
        validators.sort_by(|a, b| a.name.cmp(&b.name));
        validators.dedup_by(|a, b| a.name == b.name);
        Self { validators }
    }

    /// A set of `names`, each with the same `power`.
    pub fn uniform(names: &[&str], power: u64) -> Self {
        Self::new(
            names
                .iter()
                .map(|name| MockValidator::new(name, power))
                .collect(),
        )
    }

    pub fn validators(&self) -> &[MockValidator] {
        &self.validators
    }

    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name.as_str()).collect()
    }

    fn power_of(&self, name: &str) -> Option<u64> {
        self.validators
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.power)
    }
}

impl Default for MockValidatorSet {
    fn default() -> Self {
        Self::uniform(&["1", "2"], 50)
    }
}

impl WeightedSignerSet for MockValidatorSet {
    type Commit = MockSignedHeader;

    fn total_voting_power(&self) -> u64 {
        self.validators
            .iter()
            .fold(0u64, |total, v| total.saturating_add(v.power))
    }

    /// Every signature must be by a member and for the header's block; a
    /// member signing twice counts once.
    fn signed_voting_power(&self, commit: &MockSignedHeader) -> Result<u64, ClientError> {
        let block_hash = commit.block_hash();
        let mut signers = BTreeSet::new();

        for signature in &commit.commit {
            if signature.block_hash != block_hash {
                return Err(ClientError::invalid_header(format!(
                    "signature of {} is for another block",
                    signature.validator
                )));
            }
            if self.power_of(&signature.validator).is_none() {
                return Err(ClientError::invalid_header(format!(
                    "{} is not a member of the validator set",
                    signature.validator
                )));
            }
            signers.insert(signature.validator.as_str());
        }

        Ok(signers
            .into_iter()
            .filter_map(|name| self.power_of(name))
            .fold(0u64, |signed, power| signed.saturating_add(power)))
    }

    fn hash(&self) -> Vec<u8> {
        let mut hasher = Sha256::new();
        for validator in &self.validators {
            hasher.update((validator.name.len() as u64).to_be_bytes());
            hasher.update(validator.name.as_bytes());
            hasher.update(validator.power.to_be_bytes());
        }
        hasher.finalize().to_vec()
    }
}
