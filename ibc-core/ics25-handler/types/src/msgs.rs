use ibc_core_client_types::msgs::ClientMsg;
use ibc_core_connection_types::msgs::ConnectionMsg;

/// Enumeration of all messages the entrypoint is capable of routing.
///
/// `S` and `V` are the signed header and weighted signer set of the chains
/// the host tracks.
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum MsgEnvelope<S, V> {
    Client(ClientMsg<S, V>),
    Connection(ConnectionMsg),
}
