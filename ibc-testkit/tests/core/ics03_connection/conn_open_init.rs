use ibc::core::client::types::error::ClientError;
use ibc::core::connection::types::error::ConnectionError;
use ibc::core::connection::types::msgs::{ConnectionMsg, MsgConnectionOpenInit};
use ibc::core::connection::types::version::Version;
use ibc::core::connection::types::State;
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ChainId, ClientId, ConnectionId};
use ibc::core::host::types::path::ClientConnectionPath;
use ibc::core::host::ValidationContext;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::client::MockClientConfig;
use ibc_testkit::fixtures::core::connection::{
    dummy_msg_conn_open_init, msg_conn_open_init_with_client_id, CounterpartyConfig,
};
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::hosts::{HostParams, MockHost, TestHost};
use ibc_testkit::relayer::error::RelayerError;
use rstest::*;
use test_log::test;

enum Ctx {
    Default,
    WithClient,
    FrozenClient,
}

enum Msg {
    Default,
    WithVersion,
    UnsupportedVersion,
    CounterpartyConnection,
}

#[fixture]
fn fixture() -> Fixture<MsgConnectionOpenInit> {
    conn_open_init_fixture(Ctx::WithClient, Msg::Default)
}

fn conn_open_init_fixture(ctx: Ctx, msg: Msg) -> Fixture<MsgConnectionOpenInit> {
    let client_id = ClientId::new(MockHost::CLIENT_TYPE, 0).expect("no error");
    let ctx_b = MockContextConfig::builder()
        .host(MockHost::build(
            HostParams::builder()
                .chain_id(ChainId::new("mockgaia-1").expect("no error"))
                .build(),
        ))
        .build();

    let ctx = match ctx {
        Ctx::Default => MockContext::default(),
        Ctx::WithClient => MockContext::default().with_light_client(
            &ctx_b,
            MockClientConfig::builder().client_id(client_id.clone()).build(),
        ),
        Ctx::FrozenClient => MockContext::default().with_light_client(
            &ctx_b,
            MockClientConfig::builder()
                .client_id(client_id.clone())
                .frozen(true)
                .build(),
        ),
    };

    let msg_default = msg_conn_open_init_with_client_id(dummy_msg_conn_open_init(), client_id);
    let msg = match msg {
        Msg::Default => msg_default,
        Msg::WithVersion => MsgConnectionOpenInit {
            version: Some(Version::compatibles()[0].clone()),
            ..msg_default
        },
        Msg::UnsupportedVersion => MsgConnectionOpenInit {
            version: Some(Version::new("2".to_string(), vec!["ORDER_ORDERED".to_string()])),
            ..msg_default
        },
        Msg::CounterpartyConnection => MsgConnectionOpenInit {
            counterparty: CounterpartyConfig::builder()
                .connection_id(ConnectionId::zero())
                .build(),
            ..msg_default
        },
    };

    Fixture { ctx, msg }
}

fn conn_open_init_validate(fxt: &Fixture<MsgConnectionOpenInit>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenInit(fxt.msg.clone()));
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

fn conn_open_init_execute(
    fxt: &mut Fixture<MsgConnectionOpenInit>,
    expect: Expect,
    expected_version: Vec<Version>,
) {
    let msg_envelope = MsgEnvelope::Connection(ConnectionMsg::OpenInit(fxt.msg.clone()));
    let res = execute(fxt.ctx.ibc_store_mut(), msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "execution", &res);
    match expect {
        Expect::Failure(_) => {
            assert!(res.is_err(), "{err_msg}");
        }
        Expect::Success => {
            assert!(res.is_ok(), "{err_msg}");

            let ibc_events = fxt.ctx.get_events();
            assert_eq!(ibc_events.len(), 2);
            assert!(matches!(
                ibc_events[0],
                IbcEvent::Message(MessageEvent::Connection)
            ));
            let IbcEvent::OpenInitConnection(conn_open_init_event) = &ibc_events[1] else {
                panic!("unexpected event {:?}", ibc_events[1]);
            };
            assert_eq!(conn_open_init_event.connection_id(), &fxt.msg.connection_id);
            assert_eq!(conn_open_init_event.client_id(), &fxt.msg.client_id);
            assert_eq!(conn_open_init_event.counterparty_connection_id(), None);

            let conn_end = fxt
                .ctx
                .ibc_store()
                .connection_end(conn_open_init_event.connection_id())
                .expect("no error")
                .expect("connection exists");
            assert_eq!(conn_end.state(), &State::Init);
            assert_eq!(conn_end.versions(), expected_version.as_slice());
            assert_eq!(conn_end.counterparty(), &fxt.msg.counterparty);

            assert_eq!(
                fxt.ctx
                    .ibc_store()
                    .client_connections(&ClientConnectionPath::new(fxt.msg.client_id.clone()))
                    .expect("no error"),
                vec![fxt.msg.connection_id.clone()]
            );
        }
    }
}

#[rstest]
#[test_log::test]
fn conn_open_init_healthy(mut fixture: Fixture<MsgConnectionOpenInit>) {
    conn_open_init_validate(&fixture, Expect::Success);
    conn_open_init_execute(&mut fixture, Expect::Success, Version::compatibles());
}

#[test]
fn conn_open_init_with_version() {
    let mut fxt = conn_open_init_fixture(Ctx::WithClient, Msg::WithVersion);
    conn_open_init_validate(&fxt, Expect::Success);
    conn_open_init_execute(
        &mut fxt,
        Expect::Success,
        vec![Version::compatibles()[0].clone()],
    );
}

#[test]
fn conn_open_init_no_client() {
    let fxt = conn_open_init_fixture(Ctx::Default, Msg::Default);
    let expected_err = ConnectionError::from(ClientError::ClientNotFound {
        client_id: fxt.msg.client_id.clone(),
    });
    conn_open_init_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn conn_open_init_frozen_client() {
    let fxt = conn_open_init_fixture(Ctx::FrozenClient, Msg::Default);
    let expected_err = ConnectionError::from(ClientError::ClientFrozen {
        client_id: fxt.msg.client_id.clone(),
    });
    conn_open_init_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[rstest]
#[case::unsupported_version(Msg::UnsupportedVersion)]
#[case::counterparty_connection(Msg::CounterpartyConnection)]
#[test_log::test]
fn conn_open_init_invalid_msg(#[case] msg: Msg) {
    let fxt = conn_open_init_fixture(Ctx::WithClient, msg);
    conn_open_init_validate(&fxt, Expect::Failure(None));
}

#[test]
fn conn_open_init_twice() {
    let Fixture { mut ctx, msg } = conn_open_init_fixture(Ctx::WithClient, Msg::Default);
    let conn_id = msg.connection_id.clone();

    ctx.deliver(MsgEnvelope::Connection(msg.clone().into()))
        .expect("first init accepted");
    let first_end = ctx
        .ibc_store()
        .connection_end(&conn_id)
        .expect("no error")
        .expect("connection exists");
    let events_len = ctx.get_events().len();

    let res = ctx.deliver(MsgEnvelope::Connection(msg.into()));
    assert!(
        matches!(
            res,
            Err(RelayerError::TransactionFailed(HandlerError::Connection(
                ConnectionError::ConnectionAlreadyExists { .. }
            )))
        ),
        "{res:?}"
    );

    assert_eq!(
        ctx.ibc_store()
            .connection_end(&conn_id)
            .expect("no error"),
        Some(first_end)
    );
    assert_eq!(ctx.get_events().len(), events_len);
}
