//! Defines misbehaviour evidence: two conflicting headers for one height.

use ibc_core_host_types::identifiers::ClientId;

use crate::error::ClientError;
use crate::header::Header;
use crate::height::Height;
use crate::signer::{SignedHeader, WeightedSignerSet};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Misbehaviour<S, V> {
    pub client_id: ClientId,
    pub header1: Header<S, V>,
    pub header2: Header<S, V>,
}

impl<S, V> Misbehaviour<S, V>
where
    S: SignedHeader,
    V: WeightedSignerSet<Commit = S>,
{
    pub fn new(client_id: ClientId, header1: Header<S, V>, header2: Header<S, V>) -> Self {
        Self {
            client_id,
            header1,
            header2,
        }
    }

    /// Height both headers claim.
    pub fn height(&self) -> Result<Height, ClientError> {
        self.header1.height()
    }

    /// Checks the shape of the evidence: same chain, same height, different
    /// blocks. Signature checks need the trusted state and are done by the
    /// handler.
    pub fn validate_basic(&self) -> Result<(), ClientError> {
        if self.header1.chain_id()? != self.header2.chain_id()? {
            return Err(ClientError::invalid_misbehaviour(
                "headers are from different chains",
            ));
        }
        if self.header1.height()? != self.header2.height()? {
            return Err(ClientError::invalid_misbehaviour(
                "headers are at different heights",
            ));
        }
        if self.header1.signed_header.hash() == self.header2.signed_header.hash() {
            return Err(ClientError::invalid_misbehaviour(
                "headers commit to the same block",
            ));
        }
        Ok(())
    }
}
