//! Defines the client message types that are sent to the chain by the relayer.

use ibc_core_host_types::identifiers::ClientId;

mod create_client;
mod misbehaviour;
mod update_client;

pub use create_client::*;
pub use misbehaviour::*;
pub use update_client::*;

/// Encodes all the different client messages
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum ClientMsg<S, V> {
    CreateClient(MsgCreateClient<V>),
    UpdateClient(MsgUpdateClient<S, V>),
    Misbehaviour(MsgSubmitMisbehaviour<S, V>),
}

impl<S, V> ClientMsg<S, V> {
    pub fn client_id(&self) -> &ClientId {
        match self {
            Self::CreateClient(msg) => &msg.client_id,
            Self::UpdateClient(msg) => &msg.client_id,
            Self::Misbehaviour(msg) => &msg.misbehaviour.client_id,
        }
    }
}
