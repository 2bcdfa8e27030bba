//! Foundational error types shared by the client, connection and commitment crates.

use alloc::string::{String, ToString};

use displaydoc::Display;
use tendermint_proto::Error as ProtoError;

/// Causes of decoding failures
#[derive(Debug, Display)]
pub enum DecodingError {
    /// invalid identifier: `{0}`
    InvalidIdentifier(String),
    /// invalid field: `{0}`
    InvalidField(String),
    /// missing field: `{0}`
    MissingField(String),
    /// failed to decode proto value: `{description}`
    FailedToDecodeProto { description: String },
}

impl DecodingError {
    pub fn invalid_field<T: ToString>(description: T) -> Self {
        Self::InvalidField(description.to_string())
    }

    pub fn missing_field<T: ToString>(field: T) -> Self {
        Self::MissingField(field.to_string())
    }
}

impl From<ProtoError> for DecodingError {
    fn from(e: ProtoError) -> Self {
        Self::FailedToDecodeProto {
            description: e.to_string(),
        }
    }
}

impl From<prost::DecodeError> for DecodingError {
    fn from(e: prost::DecodeError) -> Self {
        Self::FailedToDecodeProto {
            description: e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodingError {}
