//! Defines the store paths of the client and connection components.
//!
//! The host store is split in two namespaces. Records that a counterparty
//! must be able to prove live in [`Namespace::Protocol`] and are covered by the
//! committed root; bookkeeping indexes live in [`Namespace::Free`] and are
//! never proven.
use core::str::FromStr;

use derive_more::{Display, From};
use ibc_primitives::prelude::*;

use crate::identifiers::{ClientId, ConnectionId};

pub const CLIENT_PREFIX: &str = "clients";
pub const CLIENT_STATE: &str = "clientState";
pub const CONSENSUS_STATE_PREFIX: &str = "consensusStates";
pub const CONNECTION_PREFIX: &str = "connections";

pub const PROTOCOL_NAMESPACE: &str = "protocol";
pub const FREE_NAMESPACE: &str = "free";

/// The two store namespaces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Namespace {
    /// Provable records, committed under the app hash.
    #[display(fmt = "{PROTOCOL_NAMESPACE}")]
    Protocol,
    /// Non-provable local indexes.
    #[display(fmt = "{FREE_NAMESPACE}")]
    Free,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protocol => PROTOCOL_NAMESPACE,
            Self::Free => FREE_NAMESPACE,
        }
    }

    pub fn is_provable(&self) -> bool {
        matches!(self, Self::Protocol)
    }
}

/// The Path enum abstracts out the different sub-paths.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From, Display)]
pub enum Path {
    ClientState(ClientStatePath),
    ClientConsensusState(ClientConsensusStatePath),
    ClientConnection(ClientConnectionPath),
    Connection(ConnectionPath),
}

impl Path {
    /// Returns the namespace the record behind this path is stored in.
    pub fn namespace(&self) -> Namespace {
        match self {
            Self::ClientState(_) | Self::ClientConsensusState(_) | Self::Connection(_) => {
                Namespace::Protocol
            }
            Self::ClientConnection(_) => Namespace::Free,
        }
    }

    /// Returns the full store key, `{namespace}/{path}`.
    pub fn store_key(&self) -> String {
        format!("{}/{}", self.namespace(), self)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display(fmt = "{CLIENT_PREFIX}/{_0}/{CLIENT_STATE}")]
pub struct ClientStatePath(pub ClientId);

impl ClientStatePath {
    pub fn new(client_id: ClientId) -> ClientStatePath {
        ClientStatePath(client_id)
    }

    /// Returns the client store prefix under which all the client states are
    /// stored: "clients".
    pub fn prefix() -> String {
        CLIENT_PREFIX.to_string()
    }

    /// Returns the final part (leaf) of the path under which an individual
    /// client state is stored: "clientState".
    pub fn leaf() -> String {
        CLIENT_STATE.to_string()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{CLIENT_PREFIX}/{client_id}/{CONSENSUS_STATE_PREFIX}/{height}")]
pub struct ClientConsensusStatePath {
    pub client_id: ClientId,
    pub height: u64,
}

/// Returns the parent of all consensus state paths of a client:
/// "clients/{client_id}/consensusStates".
pub fn full_consensus_state_path(client_id: &ClientId) -> String {
    format!("{CLIENT_PREFIX}/{client_id}/{CONSENSUS_STATE_PREFIX}")
}

impl ClientConsensusStatePath {
    /// Constructs a new `ClientConsensusStatePath`.
    pub fn new(client_id: ClientId, height: u64) -> ClientConsensusStatePath {
        ClientConsensusStatePath { client_id, height }
    }

    /// Returns the path representing the parent group under which all consensus
    /// states are stored: "clients/{client_id}/consensusStates".
    pub fn parent(&self) -> String {
        full_consensus_state_path(&self.client_id)
    }

    /// Returns the final part (leaf) of the path under which an individual
    /// consensus state is stored: "{height}".
    pub fn leaf(&self) -> String {
        self.height.to_string()
    }
}

/// Index of the connections built on top of a client. Lives in the free
/// namespace.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display(fmt = "{CLIENT_PREFIX}/{_0}/{CONNECTION_PREFIX}")]
pub struct ClientConnectionPath(pub ClientId);

impl ClientConnectionPath {
    pub fn new(client_id: ClientId) -> ClientConnectionPath {
        ClientConnectionPath(client_id)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[display(fmt = "{CONNECTION_PREFIX}/{_0}")]
pub struct ConnectionPath(pub ConnectionId);

impl ConnectionPath {
    pub fn new(connection_id: &ConnectionId) -> ConnectionPath {
        ConnectionPath(connection_id.clone())
    }

    /// Returns the connection store prefix under which all the connections are
    /// stored: "connections".
    pub fn prefix() -> String {
        CONNECTION_PREFIX.to_string()
    }
}

#[derive(Debug, displaydoc::Display)]
pub enum PathError {
    /// `{path}` could not be parsed into a Path
    ParseFailure { path: String },
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// Parses paths without their namespace, as rendered by `Display`.
impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split('/').collect();

        parse_client_paths(&components)
            .or_else(|| parse_connections(&components))
            .ok_or(PathError::ParseFailure {
                path: s.to_string(),
            })
    }
}

fn parse_client_paths(components: &[&str]) -> Option<Path> {
    if *components.first()? != CLIENT_PREFIX {
        return None;
    }

    let client_id = ClientId::from_str(components.get(1)?).ok()?;

    match components.len() {
        3 => match components[2] {
            CLIENT_STATE => Some(ClientStatePath(client_id).into()),
            CONNECTION_PREFIX => Some(ClientConnectionPath(client_id).into()),
            _ => None,
        },
        4 => {
            if components[2] != CONSENSUS_STATE_PREFIX {
                return None;
            }
            let height = components[3].parse::<u64>().ok().filter(|h| *h > 0)?;
            Some(ClientConsensusStatePath { client_id, height }.into())
        }
        _ => None,
    }
}

fn parse_connections(components: &[&str]) -> Option<Path> {
    if components.len() != 2 || components[0] != CONNECTION_PREFIX {
        return None;
    }

    let connection_id = ConnectionId::from_str(components[1]).ok()?;

    Some(ConnectionPath(connection_id).into())
}
