//! Types for the events emitted by the connection handshake handlers.

use ibc_core_host_types::identifiers::{ClientId, ConnectionId};
use ibc_primitives::prelude::*;
use tendermint::abci;

/// Connection event types
pub const CONNECTION_OPEN_INIT_EVENT: &str = "connection_open_init";
pub const CONNECTION_OPEN_TRY_EVENT: &str = "connection_open_try";
pub const CONNECTION_OPEN_ACK_EVENT: &str = "connection_open_ack";
pub const CONNECTION_OPEN_CONFIRM_EVENT: &str = "connection_open_confirm";

/// The content of the `key` field for the attribute containing the connection identifier.
pub const CONN_ID_ATTRIBUTE_KEY: &str = "connection_id";
pub const CLIENT_ID_ATTRIBUTE_KEY: &str = "client_id";
pub const COUNTERPARTY_CONN_ID_ATTRIBUTE_KEY: &str = "counterparty_connection_id";
pub const COUNTERPARTY_CLIENT_ID_ATTRIBUTE_KEY: &str = "counterparty_client_id";

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Attributes {
    connection_id: ConnectionId,
    client_id: ClientId,
    counterparty_connection_id: Option<ConnectionId>,
    counterparty_client_id: ClientId,
}

impl From<Attributes> for Vec<abci::EventAttribute> {
    fn from(a: Attributes) -> Self {
        let counterparty_conn_id = a
            .counterparty_connection_id
            .as_ref()
            .map(ConnectionId::as_str)
            .unwrap_or_default();

        vec![
            (CONN_ID_ATTRIBUTE_KEY, a.connection_id.as_str()).into(),
            (CLIENT_ID_ATTRIBUTE_KEY, a.client_id.as_str()).into(),
            (
                COUNTERPARTY_CLIENT_ID_ATTRIBUTE_KEY,
                a.counterparty_client_id.as_str(),
            )
                .into(),
            (COUNTERPARTY_CONN_ID_ATTRIBUTE_KEY, counterparty_conn_id).into(),
        ]
    }
}

/// Accessors shared by every handshake event; the names follow the
/// emitting chain's point of view.
macro_rules! connection_event {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(Attributes);

        impl $name {
            pub fn connection_id(&self) -> &ConnectionId {
                &self.0.connection_id
            }

            pub fn client_id(&self) -> &ClientId {
                &self.0.client_id
            }

            pub fn counterparty_connection_id(&self) -> Option<&ConnectionId> {
                self.0.counterparty_connection_id.as_ref()
            }

            pub fn counterparty_client_id(&self) -> &ClientId {
                &self.0.counterparty_client_id
            }

            pub fn event_type(&self) -> &str {
                $kind
            }
        }

        impl From<$name> for abci::Event {
            fn from(v: $name) -> Self {
                abci::Event {
                    kind: $kind.to_string(),
                    attributes: v.0.into(),
                }
            }
        }
    };
}

connection_event!(
    /// Emitted on chain A when it starts a handshake.
    OpenInit,
    CONNECTION_OPEN_INIT_EVENT
);

connection_event!(
    /// Emitted on chain B when it answers a handshake.
    OpenTry,
    CONNECTION_OPEN_TRY_EVENT
);

connection_event!(
    /// Emitted on chain A when its end opens.
    OpenAck,
    CONNECTION_OPEN_ACK_EVENT
);

connection_event!(
    /// Emitted on chain B when its end opens.
    OpenConfirm,
    CONNECTION_OPEN_CONFIRM_EVENT
);

impl OpenInit {
    pub fn new(
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        client_id_on_b: ClientId,
    ) -> Self {
        Self(Attributes {
            connection_id: conn_id_on_a,
            client_id: client_id_on_a,
            counterparty_connection_id: None,
            counterparty_client_id: client_id_on_b,
        })
    }
}

impl OpenTry {
    pub fn new(
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        conn_id_on_a: Option<ConnectionId>,
        client_id_on_a: ClientId,
    ) -> Self {
        Self(Attributes {
            connection_id: conn_id_on_b,
            client_id: client_id_on_b,
            counterparty_connection_id: conn_id_on_a,
            counterparty_client_id: client_id_on_a,
        })
    }
}

impl OpenAck {
    pub fn new(
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
    ) -> Self {
        Self(Attributes {
            connection_id: conn_id_on_a,
            client_id: client_id_on_a,
            counterparty_connection_id: Some(conn_id_on_b),
            counterparty_client_id: client_id_on_b,
        })
    }
}

impl OpenConfirm {
    pub fn new(
        conn_id_on_b: ConnectionId,
        client_id_on_b: ClientId,
        conn_id_on_a: ConnectionId,
        client_id_on_a: ClientId,
    ) -> Self {
        Self(Attributes {
            connection_id: conn_id_on_b,
            client_id: client_id_on_b,
            counterparty_connection_id: Some(conn_id_on_a),
            counterparty_client_id: client_id_on_a,
        })
    }
}
