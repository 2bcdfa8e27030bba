//! Message definitions for the connection handshake datagrams.
//!
//! Each of the four handshake steps is a `struct`. The three counterparty
//! fields (connection id, prefix, and client id) are grouped into a single
//! [`Counterparty`](crate::Counterparty) for `MsgConnectionOpenInit` and
//! `MsgConnectionOpenTry`. Messages name the chain a field belongs to:
//! chain A starts the handshake and chain B answers it.

use ibc_core_host_types::identifiers::ConnectionId;

mod conn_open_ack;
mod conn_open_confirm;
mod conn_open_init;
mod conn_open_try;

pub use conn_open_ack::*;
pub use conn_open_confirm::*;
pub use conn_open_init::*;
pub use conn_open_try::*;

/// Enumeration of all possible messages that the ICS3 protocol processes.
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum ConnectionMsg {
    OpenInit(MsgConnectionOpenInit),
    OpenTry(MsgConnectionOpenTry),
    OpenAck(MsgConnectionOpenAck),
    OpenConfirm(MsgConnectionOpenConfirm),
}

impl ConnectionMsg {
    /// The identifier of the local connection end the message acts on.
    pub fn connection_id(&self) -> &ConnectionId {
        match self {
            Self::OpenInit(msg) => &msg.connection_id,
            Self::OpenTry(msg) => &msg.connection_id,
            Self::OpenAck(msg) => &msg.conn_id_on_a,
            Self::OpenConfirm(msg) => &msg.conn_id_on_b,
        }
    }
}
