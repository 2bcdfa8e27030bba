use ibc::core::client::types::{ClientState, Height};
use ibc::core::commitment_types::commitment::CommitmentPrefix;
use ibc::core::connection::types::msgs::{
    MsgConnectionOpenAck, MsgConnectionOpenConfirm, MsgConnectionOpenInit, MsgConnectionOpenTry,
};
use ibc::core::connection::types::version::Version as ConnectionVersion;
use ibc::core::connection::types::Counterparty;
use ibc::core::host::types::identifiers::{ClientId, ConnectionId};
use ibc::core::primitives::prelude::*;
use typed_builder::TypedBuilder;

use super::commitment::dummy_commitment_proof_bytes;
use crate::testapp::ibc::core::types::DEFAULT_COMMITMENT_PREFIX;

#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = Counterparty))]
pub struct CounterpartyConfig {
    #[builder(default = ClientId::new("07-tendermint", 0).expect("Never fails"))]
    client_id: ClientId,
    #[builder(default, setter(strip_option))]
    connection_id: Option<ConnectionId>,
    #[builder(default = dummy_prefix())]
    prefix: CommitmentPrefix,
}

impl From<CounterpartyConfig> for Counterparty {
    fn from(config: CounterpartyConfig) -> Self {
        Self::new(config.client_id, config.connection_id, config.prefix)
    }
}

pub fn dummy_prefix() -> CommitmentPrefix {
    CommitmentPrefix::try_from(DEFAULT_COMMITMENT_PREFIX.to_vec()).expect("Never fails")
}

/// Returns a dummy `MsgConnectionOpenInit` opening `connection-0` on
/// `07-tendermint-0`, for testing purposes only!
pub fn dummy_msg_conn_open_init() -> MsgConnectionOpenInit {
    MsgConnectionOpenInit {
        connection_id: ConnectionId::zero(),
        client_id: ClientId::new("07-tendermint", 0).expect("Never fails"),
        counterparty: CounterpartyConfig::builder().build(),
        version: None,
    }
}

/// Setter for the `client_id`
pub fn msg_conn_open_init_with_client_id(
    msg: MsgConnectionOpenInit,
    client_id: ClientId,
) -> MsgConnectionOpenInit {
    MsgConnectionOpenInit { client_id, ..msg }
}

/// Returns a dummy `MsgConnectionOpenTry` whose proofs never verify. The
/// parameter `proof_height` is the height of chain A at which the proofs
/// were taken.
pub fn dummy_msg_conn_open_try(
    client_state_of_b_on_a: ClientState,
    proof_height: u64,
) -> MsgConnectionOpenTry {
    MsgConnectionOpenTry {
        connection_id: ConnectionId::zero(),
        client_id: ClientId::new("07-tendermint", 0).expect("Never fails"),
        client_state_of_b_on_a,
        counterparty: CounterpartyConfig::builder()
            .connection_id(ConnectionId::zero())
            .build(),
        counterparty_versions: ConnectionVersion::compatibles(),
        proof_conn_end_on_a: dummy_commitment_proof_bytes(),
        proof_client_state_of_b_on_a: dummy_commitment_proof_bytes(),
        proofs_height_on_a: Height::new(proof_height).expect("Never fails"),
    }
}

/// Returns a dummy `MsgConnectionOpenAck` whose proofs never verify.
pub fn dummy_msg_conn_open_ack(
    client_state_of_a_on_b: ClientState,
    proof_height: u64,
) -> MsgConnectionOpenAck {
    MsgConnectionOpenAck {
        conn_id_on_a: ConnectionId::zero(),
        conn_id_on_b: ConnectionId::new(1),
        client_state_of_a_on_b,
        proof_conn_end_on_b: dummy_commitment_proof_bytes(),
        proof_client_state_of_a_on_b: dummy_commitment_proof_bytes(),
        proofs_height_on_b: Height::new(proof_height).expect("Never fails"),
        version: ConnectionVersion::compatibles()[0].clone(),
    }
}

/// Returns a dummy `MsgConnectionOpenConfirm` whose proof never verifies.
pub fn dummy_msg_conn_open_confirm(proof_height: u64) -> MsgConnectionOpenConfirm {
    MsgConnectionOpenConfirm {
        conn_id_on_b: ConnectionId::zero(),
        proof_conn_end_on_a: dummy_commitment_proof_bytes(),
        proof_height_on_a: Height::new(proof_height).expect("Never fails"),
    }
}
