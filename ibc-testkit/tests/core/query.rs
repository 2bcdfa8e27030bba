use ibc::core::client::types::{ConsensusState, Header, Height, WeightedSignerSet};
use ibc::core::connection::types::State;
use ibc::core::host::types::identifiers::{ChainId, ConnectionId};
use ibc_query::command::{run, QueryCommand};
use ibc_query::core::{
    query_connection, query_consensus_state, query_header, QueryConnectionRequest,
    ValidatorSetOffset,
};
use ibc_query::error::QueryError;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::context::{ics23, MockContextConfig};
use ibc_testkit::hosts::tendermint::BlockParams;
use ibc_testkit::hosts::{HostParams, MockHost, TendermintHost, TestHost};
use ibc_testkit::relayer::utils::TypedRelayerOps;
use tendermint_testgen::Validator as TestgenValidator;
use test_log::test;

use super::ics03_connection::{client_pair, ClientPair};

fn tendermint_chain(latest_height: u64) -> MockContext<TendermintHost> {
    MockContextConfig::builder()
        .host(TendermintHost::build(
            HostParams::builder()
                .chain_id(ChainId::new("mockgaia-1").expect("no error"))
                .build(),
        ))
        .latest_height(Height::new(latest_height).expect("no error"))
        .build()
}

fn validators(names: &[&str]) -> Vec<TestgenValidator> {
    names
        .iter()
        .map(|name| TestgenValidator::new(name).voting_power(50))
        .collect()
}

/// Once a height is committed, the consensus state served for it carries
/// the block's height, app hash and announced next validators.
#[test]
fn consensus_state_of_a_committed_height() {
    let mut ctx = tendermint_chain(100);
    ctx.advance_with_block_params(
        &BlockParams::builder()
            .validators(validators(&["1", "2"]))
            .next_validators(validators(&["1", "2", "3"]))
            .build(),
    );
    let header: Header<_, _> = ctx.latest_block().expect("block exists").clone();
    let height = Height::new(101).expect("no error");

    let consensus_state =
        query_consensus_state(&ctx, None, ValidatorSetOffset::Previous).expect("no error");

    assert_eq!(consensus_state.height, height);
    assert_eq!(consensus_state.chain_id, *ctx.chain_id());
    assert_eq!(consensus_state.root(), &header.root());
    assert_eq!(consensus_state.next_validator_set, header.next_validator_set);
    assert_eq!(consensus_state.next_validator_set.total_voting_power(), 150);
    assert_eq!(
        consensus_state,
        ConsensusState::from_header(&header).expect("no error")
    );

    assert_eq!(
        query_consensus_state(&ctx, Some(height), ValidatorSetOffset::Previous)
            .expect("no error"),
        consensus_state
    );
}

#[test]
fn header_of_a_committed_height() {
    let ctx = tendermint_chain(10);
    let height = Height::new(7).expect("no error");

    let header = query_header(&ctx, Some(height), ValidatorSetOffset::Previous).expect("no error");

    assert_eq!(&header, ctx.host_block(&height).expect("block exists"));
    assert!(header.validate_basic().is_ok());
    assert!(header.verify_commit().is_ok());
}

#[test]
fn header_beyond_the_latest_height() {
    let ctx = MockContext::<MockHost>::default();
    let height = ctx.latest_height().increment();

    let res = query_header(&ctx, Some(height), ValidatorSetOffset::Previous);

    assert!(
        matches!(&res, Err(QueryError::HeaderNotFound { height: h }) if *h == height),
        "{res:?}"
    );
}

/// Connection reads are pinned to a height: a later handshake step does not
/// change what an earlier height reports.
#[test]
fn connection_at_successive_heights() {
    let ClientPair {
        mut ctx_a,
        mut ctx_b,
        client_id_on_a,
        client_id_on_b,
    } = client_pair::<MockHost>(ics23());
    let before_init = ctx_a.latest_height();

    let conn_id_on_a = TypedRelayerOps::<MockHost>::connection_open_init_on_a(
        &mut ctx_a,
        &ctx_b,
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("init accepted on A");
    let after_init = ctx_a.latest_height();

    TypedRelayerOps::<MockHost>::update_client_on_a(&mut ctx_b, &ctx_a, client_id_on_b.clone())
        .expect("client updated on B");
    let conn_id_on_b = TypedRelayerOps::<MockHost>::connection_open_try_on_b(
        &mut ctx_b,
        &ctx_a,
        conn_id_on_a.clone(),
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("try accepted on B");
    TypedRelayerOps::<MockHost>::update_client_on_a(&mut ctx_a, &ctx_b, client_id_on_a)
        .expect("client updated on A");
    TypedRelayerOps::<MockHost>::connection_open_ack_on_a(
        &mut ctx_a,
        &ctx_b,
        conn_id_on_a.clone(),
        conn_id_on_b,
        client_id_on_b,
    )
    .expect("ack accepted on A");

    let request = |query_height| QueryConnectionRequest {
        connection_id: conn_id_on_a.clone(),
        query_height,
    };

    let res = query_connection(&ctx_a, &request(Some(before_init)));
    assert!(
        matches!(res, Err(QueryError::ConnectionNotFound { .. })),
        "{res:?}"
    );

    let at_init = query_connection(&ctx_a, &request(Some(after_init))).expect("no error");
    assert_eq!(at_init.height, after_init);
    assert_eq!(at_init.connection.connection_id, conn_id_on_a);
    assert_eq!(at_init.connection.connection_end.state(), &State::Init);

    let latest = query_connection(&ctx_a, &request(None)).expect("no error");
    assert_eq!(latest.height, ctx_a.latest_height());
    assert_eq!(latest.connection.connection_end.state(), &State::Open);
}

#[test]
fn unknown_connection() {
    let ctx = MockContext::<MockHost>::default();
    let connection_id = ConnectionId::new(3);

    let res = query_connection(
        &ctx,
        &QueryConnectionRequest {
            connection_id: connection_id.clone(),
            query_height: None,
        },
    );

    assert!(
        matches!(
            &res,
            Err(QueryError::ConnectionNotFound { connection_id: id, .. }) if *id == connection_id
        ),
        "{res:?}"
    );
}

/// The operator commands render as JSON and print nothing on failure.
#[test]
fn commands_render_json() {
    let ctx = tendermint_chain(5);

    for command in [QueryCommand::ConsensusState, QueryCommand::Header] {
        let json = run(&ctx, &command, ValidatorSetOffset::Previous).expect("no error");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value.is_object(), "{command:?} rendered {json}");
    }

    let res = run(
        &ctx,
        &QueryCommand::Connection {
            connection_id: ConnectionId::zero(),
        },
        ValidatorSetOffset::Previous,
    );
    assert!(
        matches!(res, Err(QueryError::ConnectionNotFound { .. })),
        "{res:?}"
    );
}
