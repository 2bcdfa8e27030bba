use ibc::core::client::types::msgs::{MsgCreateClient, MsgSubmitMisbehaviour, MsgUpdateClient};
use ibc::core::client::types::{Header, Height, Misbehaviour};
use ibc::core::host::types::identifiers::ClientId;
use ibc::core::primitives::prelude::*;
use typed_builder::TypedBuilder;

use crate::context::MockContext;
use crate::hosts::{HostBlock, TestHost};

/// Configuration of a light client installed with
/// [`MockContext::with_light_client`].
#[derive(Debug, Default, TypedBuilder)]
pub struct MockClientConfig {
    /// Defaults to the next free identifier on the host.
    #[builder(default, setter(strip_option))]
    pub client_id: Option<ClientId>,
    /// Counterparty heights the client holds a consensus state for. Defaults
    /// to the counterparty's latest height.
    #[builder(default)]
    pub consensus_heights: Vec<Height>,
    #[builder(default)]
    pub frozen: bool,
}

/// Returns a `MsgCreateClient` tracking `counterparty` from its latest block.
pub fn dummy_msg_create_client<H: TestHost>(
    client_id: ClientId,
    counterparty: &MockContext<H>,
) -> MsgCreateClient<H::ValidatorSet> {
    let latest_height = counterparty.latest_height();

    MsgCreateClient::new(
        client_id,
        counterparty.light_client_state(latest_height),
        counterparty
            .light_consensus_state(&latest_height)
            .expect("Never fails"),
    )
}

pub fn dummy_msg_update_client<S, V>(
    client_id: ClientId,
    header: Header<S, V>,
) -> MsgUpdateClient<S, V> {
    MsgUpdateClient::new(client_id, header)
}

/// A block at `height` conflicting with the one `counterparty` committed:
/// same signers, different app hash.
pub fn conflicting_block<H: TestHost>(
    counterparty: &MockContext<H>,
    height: Height,
    params: &H::BlockParams,
) -> HostBlock<H> {
    let committed = counterparty
        .host_block(&height)
        .expect("counterparty block exists");
    let app_hash: Vec<u8> = committed.root().as_bytes().iter().map(|b| !b).collect();

    counterparty
        .host
        .generate_block(app_hash, height.value(), params)
}

/// Returns a `MsgSubmitMisbehaviour` pairing the block `counterparty`
/// committed at `height` with a forged one.
pub fn dummy_msg_submit_misbehaviour<H: TestHost>(
    client_id: ClientId,
    counterparty: &MockContext<H>,
    height: Height,
) -> MsgSubmitMisbehaviour<H::SignedHeader, H::ValidatorSet> {
    let committed = counterparty
        .host_block(&height)
        .expect("counterparty block exists")
        .clone();
    let forged = conflicting_block(counterparty, height, &Default::default());

    MsgSubmitMisbehaviour::new(Misbehaviour::new(client_id, committed, forged))
}
