//! Defines the client state: a client's trust anchor and verification
//! parameters.

use ibc_core_commitment_types::specs::ProofSpecs;
use ibc_core_commitment_types::verifier::ProofFormat;
use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use ibc_primitives::DecodingError;
use ibc_proto::ics23::ProofSpec as RawProofSpec;

use crate::error::ClientError;
use crate::height::Height;
use crate::status::Status;

/// Protobuf encoding of [`ClientState`].
#[derive(Clone, PartialEq, prost::Message)]
pub struct RawClientState {
    #[prost(string, tag = "1")]
    pub chain_id: String,
    #[prost(uint64, tag = "2")]
    pub latest_height: u64,
    #[prost(bool, tag = "3")]
    pub frozen: bool,
    #[prost(message, repeated, tag = "4")]
    pub proof_specs: Vec<RawProofSpec>,
    #[prost(int32, tag = "5")]
    pub proof_format: i32,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ClientState {
    pub chain_id: ChainId,
    pub latest_height: Height,
    pub frozen: bool,
    /// How proofs of the tracked chain's state are encoded.
    pub proof_format: ProofFormat,
}

impl ClientState {
    pub fn new(chain_id: ChainId, latest_height: Height, proof_format: ProofFormat) -> Self {
        Self {
            chain_id,
            latest_height,
            frozen: false,
            proof_format,
        }
    }

    pub fn status(&self) -> Status {
        if self.frozen {
            Status::Frozen
        } else {
            Status::Active
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn latest_height(&self) -> Height {
        self.latest_height
    }

    pub fn with_latest_height(self, latest_height: Height) -> Self {
        Self {
            latest_height,
            ..self
        }
    }

    pub fn frozen(self) -> Self {
        Self {
            frozen: true,
            ..self
        }
    }
}

impl Protobuf<RawClientState> for ClientState {}

impl TryFrom<RawClientState> for ClientState {
    type Error = ClientError;

    fn try_from(raw: RawClientState) -> Result<Self, Self::Error> {
        let chain_id = ChainId::new(&raw.chain_id)?;
        let latest_height = Height::new(raw.latest_height)?;
        let specs = ProofSpecs::try_from(raw.proof_specs)
            .map_err(|e| DecodingError::invalid_field(format!("proof specs: {e}")))?;
        let proof_format = ProofFormat::from_tag(raw.proof_format, specs)
            .map_err(|e| DecodingError::invalid_field(format!("proof format: {e}")))?;

        Ok(Self {
            chain_id,
            latest_height,
            frozen: raw.frozen,
            proof_format,
        })
    }
}

impl From<ClientState> for RawClientState {
    fn from(value: ClientState) -> Self {
        let proof_format = value.proof_format.tag();
        let proof_specs = match value.proof_format {
            ProofFormat::Ics23(specs) => specs.into(),
            ProofFormat::SimpleMerkle => Vec::new(),
        };

        Self {
            chain_id: value.chain_id.to_string(),
            latest_height: value.latest_height.value(),
            frozen: value.frozen,
            proof_specs,
            proof_format,
        }
    }
}
