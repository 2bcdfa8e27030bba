//! Definition of domain type message `MsgUpdateClient`.

use ibc_core_host_types::identifiers::ClientId;

use crate::header::Header;

/// Represents the message that triggers the update of an on-chain (IBC) client
/// with a new header.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MsgUpdateClient<S, V> {
    pub client_id: ClientId,
    pub header: Header<S, V>,
}

impl<S, V> MsgUpdateClient<S, V> {
    pub fn new(client_id: ClientId, header: Header<S, V>) -> Self {
        Self { client_id, header }
    }
}
