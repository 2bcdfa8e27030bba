//! The read-only view of a chain required by the query functions.

use ibc::core::client::types::{Height, SignedHeader, WeightedSignerSet};
use ibc::core::connection::types::ConnectionEnd;
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::ConnectionId;
use serde::Serialize;

/// The committed history of a chain, as a full node serves it.
///
/// Every read is pinned to a committed height, so concurrent readers see a
/// consistent snapshot.
pub trait ChainNode {
    type SignedHeader: SignedHeader + Serialize;
    type ValidatorSet: WeightedSignerSet<Commit = Self::SignedHeader> + Serialize;

    /// The latest committed height.
    fn latest_height(&self) -> Result<Height, HostError>;

    /// The signed header committed at `height`.
    fn signed_header(&self, height: Height) -> Result<Option<Self::SignedHeader>, HostError>;

    /// The validator set the node publishes at `index`.
    ///
    /// Whether the set at index `H` signs block `H` or block `H + 1` depends
    /// on the consensus engine; see [`ValidatorSetOffset`].
    fn validator_set(&self, index: u64) -> Result<Option<Self::ValidatorSet>, HostError>;

    /// The connection end stored under `conn_id` as of `height`.
    fn connection_end(
        &self,
        conn_id: &ConnectionId,
        height: Height,
    ) -> Result<Option<ConnectionEnd>, HostError>;
}

/// Where a node publishes the validator set that signs block `H`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ValidatorSetOffset {
    /// At index `H - 1`, as Tendermint RPC does.
    #[default]
    Previous,
    /// At index `H`.
    Current,
}

impl ValidatorSetOffset {
    /// The index at which the set signing block `height` is published.
    pub fn signer_index(self, height: Height) -> u64 {
        match self {
            Self::Previous => height.value() - 1,
            Self::Current => height.value(),
        }
    }
}
