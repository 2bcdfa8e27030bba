//! The connection handshake as a pure state transition.
//!
//! [`transition`] decides what the local connection end becomes once a
//! handshake message is accepted. It looks only at the stored end and the
//! message; proofs of the counterparty's records are checked by the handlers
//! in [`crate::handler`].

use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::msgs::{
    ConnectionMsg, MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit,
    MsgConnectionOpenTry,
};
use ibc_core_connection_types::version::{pick_version, Version};
use ibc_core_connection_types::{ConnectionEnd, Counterparty, State};
use ibc_primitives::prelude::*;

/// Computes the connection end that results from applying `msg` to the
/// locally stored end `current`, given the versions the host supports.
///
/// The state only moves forward along `INIT -> TRYOPEN -> OPEN` (or
/// `INIT -> OPEN` on the initiating side). Any other move is rejected.
pub fn transition(
    current: Option<&ConnectionEnd>,
    msg: &ConnectionMsg,
    supported: &[Version],
) -> Result<ConnectionEnd, ConnectionError> {
    match msg {
        ConnectionMsg::OpenInit(msg) => open_init(current, msg, supported),
        ConnectionMsg::OpenTry(msg) => open_try(current, msg, supported),
        ConnectionMsg::OpenAck(msg) => open_ack(current, msg),
        ConnectionMsg::OpenConfirm(msg) => open_confirm(current, msg),
    }
}

/// `ConnOpenInit`: creates a fresh `INIT` end. Without an explicit version
/// the end offers every supported version.
pub fn open_init(
    current: Option<&ConnectionEnd>,
    msg: &MsgConnectionOpenInit,
    supported: &[Version],
) -> Result<ConnectionEnd, ConnectionError> {
    if current.is_some() {
        return Err(ConnectionError::ConnectionAlreadyExists {
            connection_id: msg.connection_id.clone(),
        });
    }

    let versions = match &msg.version {
        Some(version) => {
            version.verify_is_supported(supported)?;
            vec![version.clone()]
        }
        None => supported.to_vec(),
    };

    ConnectionEnd::new(
        State::Init,
        msg.client_id.clone(),
        msg.counterparty.clone(),
        versions,
    )
}

/// `ConnOpenTry`: creates the `TRYOPEN` end with the negotiated version,
/// possibly replacing a local `INIT` end for the same pair of clients.
pub fn open_try(
    current: Option<&ConnectionEnd>,
    msg: &MsgConnectionOpenTry,
    supported: &[Version],
) -> Result<ConnectionEnd, ConnectionError> {
    let version = pick_version(supported, &msg.counterparty_versions)?;

    // crossing hellos: both sides sent ConnOpenInit for the same pair
    if let Some(end) = current {
        end.verify_state_matches(&State::Init)?;

        if !end.client_id_matches(&msg.client_id)
            || end.counterparty().client_id() != msg.counterparty.client_id()
        {
            return Err(ConnectionError::invalid_counterparty(format!(
                "connection {} already binds clients {} and {}",
                msg.connection_id,
                end.client_id(),
                end.counterparty().client_id()
            )));
        }

        version.verify_is_supported(end.versions())?;
    }

    ConnectionEnd::new(
        State::TryOpen,
        msg.client_id.clone(),
        msg.counterparty.clone(),
        vec![version],
    )
}

/// `ConnOpenAck`: opens a local `INIT` end with the version chosen by the
/// counterparty.
pub fn open_ack(
    current: Option<&ConnectionEnd>,
    msg: &MsgConnectionOpenAck,
) -> Result<ConnectionEnd, ConnectionError> {
    let end = current.ok_or_else(|| ConnectionError::ConnectionNotFound {
        connection_id: msg.conn_id_on_a.clone(),
    })?;

    end.verify_state_matches(&State::Init)?;
    msg.version.verify_is_supported(end.versions())?;

    let counterparty = Counterparty::new(
        end.counterparty().client_id().clone(),
        Some(msg.conn_id_on_b.clone()),
        end.counterparty().prefix().clone(),
    );

    Ok(end.clone().open(msg.version.clone(), counterparty))
}

/// `ConnOpenConfirm`: opens a local `TRYOPEN` end.
pub fn open_confirm(
    current: Option<&ConnectionEnd>,
    msg: &MsgConnectionOpenConfirm,
) -> Result<ConnectionEnd, ConnectionError> {
    let end = current.ok_or_else(|| ConnectionError::ConnectionNotFound {
        connection_id: msg.conn_id_on_b.clone(),
    })?;

    end.verify_state_matches(&State::TryOpen)?;

    let version = end
        .negotiated_version()
        .cloned()
        .ok_or(ConnectionError::EmptyVersions)?;
    let counterparty = end.counterparty().clone();

    Ok(end.clone().open(version, counterparty))
}
