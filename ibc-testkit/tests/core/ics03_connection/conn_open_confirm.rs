use ibc::core::client::types::error::ClientError;
use ibc::core::client::types::Height;
use ibc::core::commitment_types::verifier::ProofFormat;
use ibc::core::connection::types::error::ConnectionError;
use ibc::core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenConfirm};
use ibc::core::connection::types::State;
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::ConnectionId;
use ibc::core::host::types::path::ConnectionPath;
use ibc::core::host::ValidationContext;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::context::{ics23, simple_merkle};
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::hosts::MockHost;
use ibc_testkit::relayer::utils::TypedRelayerOps;
use rstest::*;
use test_log::test;

use super::{client_pair, prove, ClientPair};

type Ops = TypedRelayerOps<MockHost>;

enum Msg {
    Default,
    UnknownConnection,
    StaleProof,
}

#[fixture]
fn fixture() -> Fixture<MsgConnectionOpenConfirm> {
    conn_open_confirm_fixture(Msg::Default)
}

/// `A` has opened its end, `B` holds a `TRYOPEN` end and `B`'s client has
/// seen the block committing `A`'s open end. The fixture context is `B`.
fn conn_open_confirm_fixture(msg: Msg) -> Fixture<MsgConnectionOpenConfirm> {
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
    let init_height_on_a = ctx_a.latest_height();

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
    Ops::connection_open_ack_on_a(
        &mut ctx_a,
        &ctx_b,
        conn_id_on_a.clone(),
        conn_id_on_b.clone(),
        client_id_on_b.clone(),
    )
    .expect("ack accepted on A");
    Ops::update_client_on_a(&mut ctx_b, &ctx_a, client_id_on_b)
        .expect("client updated on B");

    let proof_height_on_a: Height = match msg {
        Msg::StaleProof => init_height_on_a,
        _ => ctx_a.latest_height(),
    };

    let conn_id_on_b = match msg {
        Msg::UnknownConnection => ConnectionId::new(7),
        _ => conn_id_on_b,
    };

    let msg = MsgConnectionOpenConfirm {
        conn_id_on_b,
        proof_conn_end_on_a: prove(
            &ctx_a,
            proof_height_on_a,
            ConnectionPath::new(&conn_id_on_a),
        ),
        proof_height_on_a,
    };

    Fixture { ctx: ctx_b, msg }
}

fn conn_open_confirm_validate(fxt: &Fixture<MsgConnectionOpenConfirm>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenConfirm(fxt.msg.clone()));
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

fn conn_open_confirm_execute(fxt: &mut Fixture<MsgConnectionOpenConfirm>, expect: Expect) {
    let events_before = fxt.ctx.get_events().len();
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenConfirm(fxt.msg.clone()));
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
            let IbcEvent::OpenConfirmConnection(conn_open_confirm_event) = &ibc_events[1] else {
                panic!("unexpected event {:?}", ibc_events[1]);
            };
            assert_eq!(
                conn_open_confirm_event.connection_id(),
                &fxt.msg.conn_id_on_b
            );

            let conn_end = fxt
                .ctx
                .ibc_store()
                .connection_end(&fxt.msg.conn_id_on_b)
                .expect("no error")
                .expect("connection exists");
            assert_eq!(conn_end.state(), &State::Open);
            assert_eq!(conn_end.versions().len(), 1);
        }
    }
}

#[rstest]
#[test_log::test]
fn conn_open_confirm_healthy(mut fixture: Fixture<MsgConnectionOpenConfirm>) {
    conn_open_confirm_validate(&fixture, Expect::Success);
    conn_open_confirm_execute(&mut fixture, Expect::Success);
}

#[test]
fn conn_open_confirm_no_connection() {
    let fxt = conn_open_confirm_fixture(Msg::UnknownConnection);
    let expected_err = ConnectionError::ConnectionNotFound {
        connection_id: fxt.msg.conn_id_on_b.clone(),
    };
    conn_open_confirm_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn conn_open_confirm_stale_proof() {
    let fxt = conn_open_confirm_fixture(Msg::StaleProof);
    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Connection(ConnectionMsg::OpenConfirm(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Connection(ConnectionError::Client(
                ClientError::ProofInvalid(_)
            )))
        ),
        "{res:?}"
    );
}

/// The end only moves forward: once open, a second confirmation is
/// rejected.
#[test]
fn conn_open_confirm_twice() {
    let mut fxt = conn_open_confirm_fixture(Msg::Default);
    conn_open_confirm_execute(&mut fxt, Expect::Success);

    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Connection(ConnectionMsg::OpenConfirm(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Connection(ConnectionError::WrongState { .. }))
        ),
        "{res:?}"
    );
}

/// The ends observed on both sides over a full handshake never skip or
/// revisit a state.
#[rstest]
#[case::ics23(ics23())]
#[case::simple_merkle(simple_merkle())]
#[test_log::test]
fn handshake_state_sequences(#[case] proof_format: ProofFormat) {
    let ClientPair {
        mut ctx_a,
        mut ctx_b,
        client_id_on_a,
        client_id_on_b,
    } = client_pair::<MockHost>(proof_format);

    let state_of = |ctx: &MockContext<MockHost>, conn_id: &ConnectionId| {
        ctx.ibc_store()
            .connection_end(conn_id)
            .expect("no error")
            .map(|end| *end.state())
    };

    let conn_id_on_a = Ops::connection_open_init_on_a(
        &mut ctx_a,
        &ctx_b,
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("init accepted on A");
    let mut states_on_a = vec![state_of(&ctx_a, &conn_id_on_a)];

    Ops::update_client_on_a(&mut ctx_b, &ctx_a, client_id_on_b.clone()).expect("no error");
    let conn_id_on_b = Ops::connection_open_try_on_b(
        &mut ctx_b,
        &ctx_a,
        conn_id_on_a.clone(),
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("try accepted on B");
    let mut states_on_b = vec![state_of(&ctx_b, &conn_id_on_b)];

    Ops::update_client_on_a(&mut ctx_a, &ctx_b, client_id_on_a).expect("no error");
    Ops::connection_open_ack_on_a(
        &mut ctx_a,
        &ctx_b,
        conn_id_on_a.clone(),
        conn_id_on_b.clone(),
        client_id_on_b.clone(),
    )
    .expect("ack accepted on A");
    states_on_a.push(state_of(&ctx_a, &conn_id_on_a));

    Ops::update_client_on_a(&mut ctx_b, &ctx_a, client_id_on_b).expect("no error");
    Ops::connection_open_confirm_on_b(&mut ctx_b, &ctx_a, conn_id_on_b.clone(), conn_id_on_a)
        .expect("confirm accepted on B");
    states_on_b.push(state_of(&ctx_b, &conn_id_on_b));

    assert_eq!(states_on_a, vec![Some(State::Init), Some(State::Open)]);
    assert_eq!(states_on_b, vec![Some(State::TryOpen), Some(State::Open)]);
}
