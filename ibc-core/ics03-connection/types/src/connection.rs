//! Defines the types that define a connection

use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_commitment_types::commitment::CommitmentPrefix;
use ibc_core_host_types::identifiers::{ClientId, ConnectionId};
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use ibc_primitives::DecodingError;
use ibc_proto::ibc::core::commitment::v1::MerklePrefix;
use ibc_proto::ibc::core::connection::v1::{
    ConnectionEnd as RawConnectionEnd, Counterparty as RawCounterparty,
    IdentifiedConnection as RawIdentifiedConnection,
};

use crate::error::ConnectionError;
use crate::version::Version;

/// A connection end paired with the identifier it is stored under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifiedConnectionEnd {
    pub connection_id: ConnectionId,
    pub connection_end: ConnectionEnd,
}

impl IdentifiedConnectionEnd {
    pub fn new(connection_id: ConnectionId, connection_end: ConnectionEnd) -> Self {
        IdentifiedConnectionEnd {
            connection_id,
            connection_end,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn end(&self) -> &ConnectionEnd {
        &self.connection_end
    }
}

impl Protobuf<RawIdentifiedConnection> for IdentifiedConnectionEnd {}

impl TryFrom<RawIdentifiedConnection> for IdentifiedConnectionEnd {
    type Error = ConnectionError;

    fn try_from(value: RawIdentifiedConnection) -> Result<Self, Self::Error> {
        let raw_connection_end = RawConnectionEnd {
            client_id: value.client_id,
            versions: value.versions,
            state: value.state,
            counterparty: value.counterparty,
            delay_period: value.delay_period,
        };

        Ok(IdentifiedConnectionEnd {
            connection_id: value.id.parse()?,
            connection_end: raw_connection_end.try_into()?,
        })
    }
}

impl From<IdentifiedConnectionEnd> for RawIdentifiedConnection {
    fn from(value: IdentifiedConnectionEnd) -> Self {
        let raw_end = RawConnectionEnd::from(value.connection_end);
        RawIdentifiedConnection {
            id: value.connection_id.to_string(),
            client_id: raw_end.client_id,
            versions: raw_end.versions,
            state: raw_end.state,
            delay_period: raw_end.delay_period,
            counterparty: raw_end.counterparty,
        }
    }
}

/// The record a chain keeps for its side of a connection.
///
/// The `versions` field carries the host's compatible versions while the
/// end is `Init`, and exactly the negotiated version from `TryOpen` onwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionEnd {
    pub state: State,
    client_id: ClientId,
    counterparty: Counterparty,
    versions: Vec<Version>,
}

impl Protobuf<RawConnectionEnd> for ConnectionEnd {}

impl TryFrom<RawConnectionEnd> for ConnectionEnd {
    type Error = ConnectionError;

    fn try_from(value: RawConnectionEnd) -> Result<Self, Self::Error> {
        let state = value.state.try_into()?;

        if value.client_id.is_empty() {
            return Err(DecodingError::missing_field("client_id").into());
        }

        if value.versions.is_empty() {
            return Err(ConnectionError::EmptyVersions);
        }

        if value.delay_period != 0 {
            return Err(DecodingError::invalid_field(format!(
                "delay period must be zero, got {}",
                value.delay_period
            ))
            .into());
        }

        Self::new(
            state,
            value.client_id.parse()?,
            value
                .counterparty
                .ok_or(DecodingError::missing_field("counterparty"))?
                .try_into()?,
            value
                .versions
                .into_iter()
                .map(Version::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }
}

impl From<ConnectionEnd> for RawConnectionEnd {
    fn from(value: ConnectionEnd) -> Self {
        RawConnectionEnd {
            client_id: value.client_id.to_string(),
            versions: value.versions.into_iter().map(Into::into).collect(),
            state: value.state.into(),
            counterparty: Some(value.counterparty.into()),
            delay_period: 0,
        }
    }
}

impl ConnectionEnd {
    pub fn new(
        state: State,
        client_id: ClientId,
        counterparty: Counterparty,
        versions: Vec<Version>,
    ) -> Result<Self, ConnectionError> {
        if versions.is_empty() {
            return Err(ConnectionError::EmptyVersions);
        }

        if state != State::Init && versions.len() != 1 {
            return Err(ConnectionError::version_mismatch(format!(
                "a {state} connection carries exactly one version, got {}",
                versions.len()
            )));
        }

        Ok(Self {
            state,
            client_id,
            counterparty,
            versions,
        })
    }

    /// Getter for the state of this connection end.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Getter for the client id on the local party of this connection end.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for the list of versions in this connection end.
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// The version agreed on by both ends, once the handshake has chosen one.
    pub fn negotiated_version(&self) -> Option<&Version> {
        match self.state {
            State::TryOpen | State::Open => self.versions.first(),
            State::Uninitialized | State::Init => None,
        }
    }

    /// Getter for the counterparty.
    pub fn counterparty(&self) -> &Counterparty {
        &self.counterparty
    }

    /// Helper function to compare the client id of this end with another client identifier.
    pub fn client_id_matches(&self, other: &ClientId) -> bool {
        self.client_id.eq(other)
    }

    /// Helper function to determine whether the connection is open.
    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    /// Checks if the state of this connection end matches with an expected state.
    pub fn verify_state_matches(&self, expected: &State) -> Result<(), ConnectionError> {
        if !self.state.eq(expected) {
            return Err(ConnectionError::WrongState {
                expected: expected.to_string(),
                actual: self.state.to_string(),
            });
        }
        Ok(())
    }

    /// Moves this end to `Open`, keeping the negotiated version.
    pub fn open(self, version: Version, counterparty: Counterparty) -> Self {
        Self {
            state: State::Open,
            client_id: self.client_id,
            counterparty,
            versions: vec![version],
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counterparty {
    pub client_id: ClientId,
    pub connection_id: Option<ConnectionId>,
    pub prefix: CommitmentPrefix,
}

impl Protobuf<RawCounterparty> for Counterparty {}

impl TryFrom<RawCounterparty> for Counterparty {
    type Error = ConnectionError;

    fn try_from(raw_counterparty: RawCounterparty) -> Result<Self, Self::Error> {
        let connection_id = if raw_counterparty.connection_id.is_empty() {
            None
        } else {
            Some(raw_counterparty.connection_id.parse()?)
        };

        let prefix = raw_counterparty
            .prefix
            .ok_or(DecodingError::missing_field("counterparty prefix"))?
            .key_prefix
            .try_into()
            .map_err(|e| DecodingError::invalid_field(format!("counterparty prefix: {e}")))?;

        Ok(Counterparty::new(
            raw_counterparty.client_id.parse()?,
            connection_id,
            prefix,
        ))
    }
}

impl From<Counterparty> for RawCounterparty {
    fn from(value: Counterparty) -> Self {
        RawCounterparty {
            client_id: value.client_id.to_string(),
            connection_id: value
                .connection_id
                .map_or_else(String::new, |v| v.to_string()),
            prefix: Some(MerklePrefix {
                key_prefix: value.prefix.into_vec(),
            }),
        }
    }
}

impl Counterparty {
    pub fn new(
        client_id: ClientId,
        connection_id: Option<ConnectionId>,
        prefix: CommitmentPrefix,
    ) -> Self {
        Self {
            client_id,
            connection_id,
            prefix,
        }
    }

    /// Getter for the client id.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Getter for connection id.
    pub fn connection_id(&self) -> Option<&ConnectionId> {
        self.connection_id.as_ref()
    }

    pub fn prefix(&self) -> &CommitmentPrefix {
        &self.prefix
    }

    /// Returns the counterparty connection id, failing when it has not been
    /// learned yet.
    pub fn expect_connection_id(&self) -> Result<&ConnectionId, ConnectionError> {
        self.connection_id()
            .ok_or_else(|| ConnectionError::invalid_counterparty("missing connection id"))
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Uninitialized = 0isize,
    Init = 1isize,
    TryOpen = 2isize,
    Open = 3isize,
}

impl State {
    /// Yields the State as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "UNINITIALIZED",
            Self::Init => "INIT",
            Self::TryOpen => "TRYOPEN",
            Self::Open => "OPEN",
        }
    }

    /// Returns whether or not this connection state is `Open`.
    pub fn is_open(self) -> bool {
        self == State::Open
    }

    /// Returns whether or not this connection with this state
    /// has progressed less or the same than the argument.
    pub fn less_or_equal_progress(self, other: Self) -> bool {
        self <= other
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i32> for State {
    type Error = ConnectionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Uninitialized),
            1 => Ok(Self::Init),
            2 => Ok(Self::TryOpen),
            3 => Ok(Self::Open),
            _ => Err(DecodingError::invalid_field(format!(
                "connection state must be one of 0, 1, 2, 3; got {value}"
            ))
            .into()),
        }
    }
}

impl From<State> for i32 {
    fn from(value: State) -> Self {
        value as i32
    }
}
