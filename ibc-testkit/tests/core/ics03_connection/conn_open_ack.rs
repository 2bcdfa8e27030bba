use ibc::core::client::context::ClientValidationContext;
use ibc::core::client::types::error::ClientError;
use ibc::core::connection::types::error::ConnectionError;
use ibc::core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenAck};
use ibc::core::connection::types::version::Version;
use ibc::core::connection::types::State;
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ClientId, ConnectionId};
use ibc::core::host::types::path::{ClientStatePath, ConnectionPath};
use ibc::core::host::ValidationContext;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::context::ics23;
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::hosts::MockHost;
use ibc_testkit::relayer::error::RelayerError;
use ibc_testkit::relayer::utils::TypedRelayerOps;
use rstest::*;
use test_log::test;

use super::{client_pair, prove, ClientPair};

type Ops = TypedRelayerOps<MockHost>;

enum Msg {
    Default,
    UnknownConnection,
    UnofferedVersion,
}

/// Builds the acknowledgement of `B`'s end from `B`'s latest block.
fn msg_conn_open_ack(
    ctx_b: &MockContext<MockHost>,
    conn_id_on_a: ConnectionId,
    conn_id_on_b: ConnectionId,
    client_id_on_b: &ClientId,
) -> MsgConnectionOpenAck {
    let proofs_height_on_b = ctx_b.latest_height();

    MsgConnectionOpenAck {
        client_state_of_a_on_b: ctx_b
            .ibc_store()
            .client_state(client_id_on_b)
            .expect("no error")
            .expect("client exists"),
        proof_conn_end_on_b: prove(ctx_b, proofs_height_on_b, ConnectionPath::new(&conn_id_on_b)),
        proof_client_state_of_a_on_b: prove(
            ctx_b,
            proofs_height_on_b,
            ClientStatePath::new(client_id_on_b.clone()),
        ),
        conn_id_on_a,
        conn_id_on_b,
        proofs_height_on_b,
        version: Version::compatibles()[0].clone(),
    }
}

#[fixture]
fn fixture() -> Fixture<MsgConnectionOpenAck> {
    conn_open_ack_fixture(Msg::Default)
}

/// `A` holds an `INIT` end, `B` a `TRYOPEN` end, and `A`'s client has seen
/// the block committing it. The fixture context is `A`.
fn conn_open_ack_fixture(msg: Msg) -> Fixture<MsgConnectionOpenAck> {
    let ClientPair {
        mut ctx_a,
        mut ctx_b,
        client_id_on_a,
        client_id_on_b,
    } = client_pair::<MockHost>(ics23());

    let conn_id_on_a = Ops::connection_open_init_on_a(
        &mut ctx_a,
        &ctx_b,
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("init accepted on A");
    Ops::update_client_on_a(&mut ctx_b, &ctx_a, client_id_on_b.clone())
        .expect("client updated on B");
    let conn_id_on_b = Ops::connection_open_try_on_b(
        &mut ctx_b,
        &ctx_a,
        conn_id_on_a.clone(),
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("try accepted on B");
    Ops::update_client_on_a(&mut ctx_a, &ctx_b, client_id_on_a)
        .expect("client updated on A");

    let msg_default = msg_conn_open_ack(&ctx_b, conn_id_on_a, conn_id_on_b, &client_id_on_b);

    let msg = match msg {
        Msg::Default => msg_default,
        Msg::UnknownConnection => MsgConnectionOpenAck {
            conn_id_on_a: ConnectionId::new(7),
            ..msg_default
        },
        Msg::UnofferedVersion => MsgConnectionOpenAck {
            version: Version::new("2".to_string(), vec!["ORDER_ORDERED".to_string()]),
            ..msg_default
        },
    };

    Fixture { ctx: ctx_a, msg }
}

fn conn_open_ack_validate(fxt: &Fixture<MsgConnectionOpenAck>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenAck(fxt.msg.clone()));
    let res = validate(fxt.ctx.ibc_store(), &msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);
    match expect {
        Expect::Failure(Some(expected)) => {
            assert_eq!(
                res.map_err(|e| e.to_string()),
                Err(expected.to_string()),
                "{err_msg}"
            );
        }
        Expect::Failure(None) => {
            assert!(res.is_err(), "{err_msg}");
        }
        Expect::Success => {
            assert!(res.is_ok(), "{err_msg}");
        }
    }
}

fn conn_open_ack_execute(fxt: &mut Fixture<MsgConnectionOpenAck>, expect: Expect) {
    let events_before = fxt.ctx.get_events().len();
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenAck(fxt.msg.clone()));
    let res = execute(fxt.ctx.ibc_store_mut(), msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "execution", &res);
    match expect {
        Expect::Failure(_) => {
            assert!(res.is_err(), "{err_msg}");
        }
        Expect::Success => {
            assert!(res.is_ok(), "{err_msg}");

            let ibc_events = &fxt.ctx.get_events()[events_before..];
            assert_eq!(ibc_events.len(), 2);
            assert!(matches!(
                ibc_events[0],
                IbcEvent::Message(MessageEvent::Connection)
            ));
            let IbcEvent::OpenAckConnection(conn_open_ack_event) = &ibc_events[1] else {
                panic!("unexpected event {:?}", ibc_events[1]);
            };
            assert_eq!(conn_open_ack_event.connection_id(), &fxt.msg.conn_id_on_a);
            assert_eq!(
                conn_open_ack_event.counterparty_connection_id(),
                Some(&fxt.msg.conn_id_on_b)
            );

            let conn_end = fxt
                .ctx
                .ibc_store()
                .connection_end(&fxt.msg.conn_id_on_a)
                .expect("no error")
                .expect("connection exists");
            assert_eq!(conn_end.state(), &State::Open);
            assert_eq!(
                conn_end.counterparty().connection_id(),
                Some(&fxt.msg.conn_id_on_b)
            );
            assert_eq!(conn_end.versions(), &[fxt.msg.version.clone()]);
        }
    }
}

#[rstest]
#[test_log::test]
fn conn_open_ack_healthy(mut fixture: Fixture<MsgConnectionOpenAck>) {
    conn_open_ack_validate(&fixture, Expect::Success);
    conn_open_ack_execute(&mut fixture, Expect::Success);
}

#[test]
fn conn_open_ack_no_connection() {
    let fxt = conn_open_ack_fixture(Msg::UnknownConnection);
    let expected_err = ConnectionError::ConnectionNotFound {
        connection_id: fxt.msg.conn_id_on_a.clone(),
    };
    conn_open_ack_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn conn_open_ack_unoffered_version() {
    let fxt = conn_open_ack_fixture(Msg::UnofferedVersion);
    conn_open_ack_validate(&fxt, Expect::Failure(None));
}

#[test]
fn conn_open_ack_on_open_connection() {
    let mut fxt = conn_open_ack_fixture(Msg::Default);
    conn_open_ack_execute(&mut fxt, Expect::Success);

    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Connection(ConnectionMsg::OpenAck(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Connection(ConnectionError::WrongState { .. }))
        ),
        "{res:?}"
    );
}

/// Both sides ran `ConnOpenInit`. An acknowledgement proving the
/// counterparty end is still `INIT` is rejected and the local end stays
/// `INIT`.
#[test]
fn conn_open_ack_against_counterparty_init() {
    let ClientPair {
        mut ctx_a,
        mut ctx_b,
        client_id_on_a,
        client_id_on_b,
    } = client_pair::<MockHost>(ics23());

    let conn_id_on_b = Ops::connection_open_init_on_a(
        &mut ctx_b,
        &ctx_a,
        client_id_on_b.clone(),
        client_id_on_a.clone(),
    )
    .expect("init accepted on B");
    Ops::update_client_on_a(&mut ctx_a, &ctx_b, client_id_on_a.clone())
        .expect("client updated on A");
    let conn_id_on_a = Ops::connection_open_init_on_a(
        &mut ctx_a,
        &ctx_b,
        client_id_on_a,
        client_id_on_b.clone(),
    )
    .expect("init accepted on A");

    let msg = msg_conn_open_ack(&ctx_b, conn_id_on_a.clone(), conn_id_on_b, &client_id_on_b);
    let res = ctx_a.deliver(MsgEnvelope::Connection(msg.into()));

    assert!(
        matches!(
            res,
            Err(RelayerError::TransactionFailed(HandlerError::Connection(
                ConnectionError::Client(ClientError::ProofInvalid(_))
            )))
        ),
        "{res:?}"
    );

    let conn_end_on_a = ctx_a
        .ibc_store()
        .connection_end(&conn_id_on_a)
        .expect("no error")
        .expect("connection exists");
    assert_eq!(conn_end_on_a.state(), &State::Init);
    assert_eq!(conn_end_on_a.counterparty().connection_id(), None);
}
