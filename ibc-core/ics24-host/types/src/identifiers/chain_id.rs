use core::str::FromStr;

use derive_more::Into;
use ibc_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::validate_chain_identifier;

/// Identifier of a chain, e.g. `ibc-0`. Carried by headers and consensus
/// states so that a client never accepts blocks from a different chain.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into, derive_more::Display)]
pub struct ChainId(String);

impl ChainId {
    /// Creates a new `ChainId` after validating the characters and length
    /// of the given string.
    ///
    /// ```
    /// # use ibc_core_host_types::identifiers::ChainId;
    /// let id = ChainId::new("ibc-0").unwrap();
    /// assert_eq!(id.as_str(), "ibc-0");
    /// ```
    pub fn new(chain_id: &str) -> Result<Self, IdentifierError> {
        Self::from_str(chain_id)
    }

    /// Get a reference to the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        validate_chain_identifier(id).map(|_| Self(id.to_string()))
    }
}

impl PartialEq<str> for ChainId {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}
