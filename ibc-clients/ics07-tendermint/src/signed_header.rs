use ibc_core_client::types::SignedHeader as SignedHeaderTrait;
use ibc_primitives::prelude::*;
use tendermint::block::signed_header::SignedHeader as TmSignedHeader;

/// A Tendermint block header together with the commit that finalised it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From, derive_more::Into)]
pub struct SignedHeader(TmSignedHeader);

impl SignedHeader {
    pub fn inner(&self) -> &TmSignedHeader {
        &self.0
    }

    pub fn into_inner(self) -> TmSignedHeader {
        self.0
    }
}

impl SignedHeaderTrait for SignedHeader {
    fn chain_id(&self) -> &str {
        self.0.header.chain_id.as_str()
    }

    fn height(&self) -> u64 {
        self.0.header.height.value()
    }

    fn app_hash(&self) -> Vec<u8> {
        self.0.header.app_hash.as_bytes().to_vec()
    }

    fn hash(&self) -> Vec<u8> {
        self.0.header.hash().as_bytes().to_vec()
    }

    fn validators_hash(&self) -> Vec<u8> {
        self.0.header.validators_hash.as_bytes().to_vec()
    }

    fn next_validators_hash(&self) -> Vec<u8> {
        self.0.header.next_validators_hash.as_bytes().to_vec()
    }
}
