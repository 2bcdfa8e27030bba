use ibc::core::client::types::{SignedHeader, WeightedSignerSet};
use ibc::core::host::types::identifiers::ChainId;
use ibc::primitives::serializers::{de_hex_upper, ser_hex_upper};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::validator_set::MockValidatorSet;

/// A validator's vote for a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSignature {
    pub validator: String,
    #[serde(serialize_with = "ser_hex_upper", deserialize_with = "de_hex_upper")]
    pub block_hash: Vec<u8>,
}

/// Block metadata of a mock chain and the votes that committed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSignedHeader {
    pub chain_id: ChainId,
    pub height: u64,
    #[serde(serialize_with = "ser_hex_upper", deserialize_with = "de_hex_upper")]
    pub app_hash: Vec<u8>,
    #[serde(serialize_with = "ser_hex_upper", deserialize_with = "de_hex_upper")]
    pub validators_hash: Vec<u8>,
    #[serde(serialize_with = "ser_hex_upper", deserialize_with = "de_hex_upper")]
    pub next_validators_hash: Vec<u8>,
    pub commit: Vec<MockSignature>,
}

impl MockSignedHeader {
    /// An unsigned header for block `height` of `chain_id`.
    pub fn new(
        chain_id: ChainId,
        height: u64,
        app_hash: Vec<u8>,
        validators: &MockValidatorSet,
        next_validators: &MockValidatorSet,
    ) -> Self {
        Self {
            chain_id,
            height,
            app_hash,
            validators_hash: validators.hash(),
            next_validators_hash: next_validators.hash(),
            commit: Vec::new(),
        }
    }

    /// Replaces the commit with one vote for this block from each of `signers`.
    pub fn signed_by(mut self, signers: &[&str]) -> Self {
        let block_hash = self.block_hash();
        self.commit = signers
            .iter()
            .map(|validator| MockSignature {
                validator: validator.to_string(),
                block_hash: block_hash.clone(),
            })
            .collect();
        self
    }

    /// Hash of every field but the commit.
    pub fn block_hash(&self) -> Vec<u8> {
        let height = self.height.to_be_bytes();
        let fields: [&[u8]; 5] = [
            self.chain_id.as_bytes(),
            &height,
            &self.app_hash,
            &self.validators_hash,
            &self.next_validators_hash,
        ];

        let mut hasher = Sha256::new();
        for field in fields {
            hasher.update((field.len() as u64).to_be_bytes());
            hasher.update(field);
        }
        hasher.finalize().to_vec()
    }
}

impl SignedHeader for MockSignedHeader {
    fn chain_id(&self) -> &str {
        self.chain_id.as_str()
    }

    fn height(&self) -> u64 {
        self.height
    }

    fn app_hash(&self) -> Vec<u8> {
        self.app_hash.clone()
    }

    fn hash(&self) -> Vec<u8> {
        self.block_hash()
    }

    fn validators_hash(&self) -> Vec<u8> {
        self.validators_hash.clone()
    }

    fn next_validators_hash(&self) -> Vec<u8> {
        self.next_validators_hash.clone()
    }
}
