use ibc::core::client::context::ClientValidationContext;
use ibc::core::client::types::error::ClientError;
use ibc::core::connection::types::error::ConnectionError;
use ibc::core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenTry};
use ibc::core::connection::types::version::Version;
use ibc::core::connection::types::{Counterparty, State};
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ChainId, ConnectionId};
use ibc::core::host::types::path::{ClientStatePath, ConnectionPath};
use ibc::core::host::ValidationContext;
use ibc_testkit::fixtures::core::context::{ics23, simple_merkle};
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::hosts::MockHost;
use ibc_testkit::relayer::utils::TypedRelayerOps;
use rstest::*;
use test_log::test;

use super::{client_pair, prove, ClientPair};

type Ops = TypedRelayerOps<MockHost>;

enum Ctx {
    Default,
    CrossingHello,
}

enum Msg {
    Default,
    SwappedProofs,
    ForgedVersions,
    UntrustedHeight,
    ForeignClientState,
}

#[fixture]
fn fixture() -> Fixture<MsgConnectionOpenTry> {
    conn_open_try_fixture(Ctx::Default, Msg::Default)
}

/// `A` has committed an `INIT` end `connection-0` and `B`'s client has seen
/// the block committing it. The fixture context is `B`.
fn conn_open_try_fixture(ctx: Ctx, msg: Msg) -> Fixture<MsgConnectionOpenTry> {
    let ClientPair {
        mut ctx_a,
        mut ctx_b,
        client_id_on_a,
        client_id_on_b,
    } = client_pair::<MockHost>(ics23());

    if let Ctx::CrossingHello = ctx {
        Ops::connection_open_init_on_a(
            &mut ctx_b,
            &ctx_a,
            client_id_on_b.clone(),
            client_id_on_a.clone(),
        )
        .expect("init accepted on B");
        Ops::update_client_on_a(&mut ctx_a, &ctx_b, client_id_on_a.clone())
            .expect("client updated on A");
    }

    let conn_id_on_a = Ops::connection_open_init_on_a(
        &mut ctx_a,
        &ctx_b,
        client_id_on_a.clone(),
        client_id_on_b.clone(),
    )
    .expect("init accepted on A");
    Ops::update_client_on_a(&mut ctx_b, &ctx_a, client_id_on_b.clone())
        .expect("client updated on B");

    let proofs_height_on_a = ctx_a.latest_height();
    let conn_end_on_a = ctx_a
        .ibc_store()
        .connection_end(&conn_id_on_a)
        .expect("no error")
        .expect("connection exists");
    let client_state_of_b_on_a = ctx_a
        .ibc_store()
        .client_state(&client_id_on_a)
        .expect("no error")
        .expect("client exists");

    let proof_conn_end_on_a = prove(
        &ctx_a,
        proofs_height_on_a,
        ConnectionPath::new(&conn_id_on_a),
    );
    let proof_client_state_of_b_on_a = prove(
        &ctx_a,
        proofs_height_on_a,
        ClientStatePath::new(client_id_on_a.clone()),
    );

    let connection_id = match ctx {
        Ctx::Default => ctx_b.next_connection_id(),
        Ctx::CrossingHello => ConnectionId::zero(),
    };

    let msg_default = MsgConnectionOpenTry {
        connection_id,
        client_id: client_id_on_b,
        client_state_of_b_on_a,
        counterparty: Counterparty::new(
            client_id_on_a,
            Some(conn_id_on_a),
            ctx_a.ibc_store().commitment_prefix(),
        ),
        counterparty_versions: conn_end_on_a.versions().to_vec(),
        proof_conn_end_on_a,
        proof_client_state_of_b_on_a,
        proofs_height_on_a,
    };

    let msg = match msg {
        Msg::Default => msg_default,
        Msg::SwappedProofs => MsgConnectionOpenTry {
            proof_conn_end_on_a: msg_default.proof_client_state_of_b_on_a.clone(),
            ..msg_default
        },
        Msg::ForgedVersions => MsgConnectionOpenTry {
            counterparty_versions: vec![Version::new(
                "1".to_string(),
                vec!["ORDER_UNORDERED".to_string()],
            )],
            ..msg_default
        },
        Msg::UntrustedHeight => MsgConnectionOpenTry {
            proofs_height_on_a: msg_default.proofs_height_on_a.increment(),
            ..msg_default
        },
        Msg::ForeignClientState => {
            let mut client_state = msg_default.client_state_of_b_on_a.clone();
            client_state.chain_id = ChainId::new("mockgaia-2").expect("no error");
            MsgConnectionOpenTry {
                client_state_of_b_on_a: client_state,
                ..msg_default
            }
        }
    };

    Fixture { ctx: ctx_b, msg }
}

fn conn_open_try_validate(fxt: &Fixture<MsgConnectionOpenTry>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone()));
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

fn conn_open_try_execute(fxt: &mut Fixture<MsgConnectionOpenTry>, expect: Expect) {
    let events_before = fxt.ctx.get_events().len();
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone()));
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
            let IbcEvent::OpenTryConnection(conn_open_try_event) = &ibc_events[1] else {
                panic!("unexpected event {:?}", ibc_events[1]);
            };
            assert_eq!(conn_open_try_event.connection_id(), &fxt.msg.connection_id);
            assert_eq!(
                conn_open_try_event.counterparty_connection_id(),
                fxt.msg.counterparty.connection_id()
            );

            let conn_end = fxt
                .ctx
                .ibc_store()
                .connection_end(&fxt.msg.connection_id)
                .expect("no error")
                .expect("connection exists");
            assert_eq!(conn_end.state(), &State::TryOpen);
            assert_eq!(conn_end.counterparty(), &fxt.msg.counterparty);

            let version = conn_end.negotiated_version().expect("version negotiated");
            assert_eq!(conn_end.versions().len(), 1);
            assert!(fxt.msg.counterparty_versions.contains(version));
        }
    }
}

#[rstest]
#[test_log::test]
fn conn_open_try_healthy(mut fixture: Fixture<MsgConnectionOpenTry>) {
    conn_open_try_validate(&fixture, Expect::Success);
    conn_open_try_execute(&mut fixture, Expect::Success);
}

#[test]
fn conn_open_try_crossing_hello() {
    let mut fxt = conn_open_try_fixture(Ctx::CrossingHello, Msg::Default);
    conn_open_try_validate(&fxt, Expect::Success);
    conn_open_try_execute(&mut fxt, Expect::Success);
}

#[test]
fn conn_open_try_twice() {
    let mut fxt = conn_open_try_fixture(Ctx::Default, Msg::Default);
    conn_open_try_execute(&mut fxt, Expect::Success);

    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Connection(ConnectionError::WrongState { .. }))
        ),
        "{res:?}"
    );
}

#[rstest]
#[case::swapped_proofs(Msg::SwappedProofs)]
#[case::forged_versions(Msg::ForgedVersions)]
#[test_log::test]
fn conn_open_try_invalid_proof(#[case] msg: Msg) {
    let fxt = conn_open_try_fixture(Ctx::Default, msg);
    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone())),
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

#[test]
fn conn_open_try_untrusted_height() {
    let fxt = conn_open_try_fixture(Ctx::Default, Msg::UntrustedHeight);
    let expected_err = ConnectionError::from(ClientError::HeightNotFound {
        client_id: fxt.msg.client_id.clone(),
        height: fxt.msg.proofs_height_on_a,
    });
    conn_open_try_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn conn_open_try_foreign_client_state() {
    let fxt = conn_open_try_fixture(Ctx::Default, Msg::ForeignClientState);
    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Connection(ConnectionMsg::OpenTry(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Connection(
                ConnectionError::InvalidClientState { .. }
            ))
        ),
        "{res:?}"
    );
}

#[test]
fn conn_open_try_with_simple_merkle_proofs() {
    let ClientPair {
        mut ctx_a,
        mut ctx_b,
        client_id_on_a,
        client_id_on_b,
    } = client_pair::<MockHost>(simple_merkle());

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
        conn_id_on_a,
        client_id_on_a,
        client_id_on_b,
    )
    .expect("try accepted on B");

    let conn_end_on_b = ctx_b
        .ibc_store()
        .connection_end(&conn_id_on_b)
        .expect("no error")
        .expect("connection exists");
    assert_eq!(conn_end_on_b.state(), &State::TryOpen);
}
