use ibc::core::client::context::ClientValidationContext;
use ibc::core::client::types::error::ClientError;
use ibc::core::client::types::msgs::{ClientMsg, MsgSubmitMisbehaviour};
use ibc::core::client::types::Height;
use ibc::core::client::verify::verify_membership;
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ChainId, ClientId};
use ibc::core::host::types::path::{ClientStatePath, Path};
use ibc::core::host::ValidationContext;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::client::{
    dummy_msg_submit_misbehaviour, dummy_msg_update_client, MockClientConfig,
};
use ibc_testkit::fixtures::core::commitment::dummy_commitment_proof_bytes;
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::hosts::{HostParams, MockHost, TendermintHost, TestHost};
use ibc_testkit::relayer::error::RelayerError;
use ibc_testkit::testapp::ibc::clients::mock::header::MockSignedHeader;
use ibc_testkit::testapp::ibc::clients::mock::validator_set::MockValidatorSet;
use rstest::*;
use test_log::test;

type MockMsgSubmitMisbehaviour = MsgSubmitMisbehaviour<MockSignedHeader, MockValidatorSet>;

enum Ctx {
    Default,
    Frozen,
    NoTrustedState,
}

enum Msg {
    Default,
    SameBlock,
}

fn counterparty<H: TestHost>() -> MockContext<H> {
    MockContextConfig::builder()
        .host(H::build(
            HostParams::builder()
                .chain_id(ChainId::new("mockgaia-1").expect("no error"))
                .build(),
        ))
        .latest_height(Height::new(10).expect("no error"))
        .build()
}

fn height(value: u64) -> Height {
    Height::new(value).expect("no error")
}

#[fixture]
fn fixture() -> Fixture<MockMsgSubmitMisbehaviour> {
    misbehaviour_fixture(Ctx::Default, Msg::Default)
}

/// The client trusts the counterparty at heights 7 and 8 and is shown two
/// blocks for height 9.
fn misbehaviour_fixture(ctx: Ctx, msg: Msg) -> Fixture<MockMsgSubmitMisbehaviour> {
    let ctx_b = counterparty::<MockHost>();
    let client_id = ClientId::new(MockHost::CLIENT_TYPE, 0).expect("no error");

    let config = MockClientConfig::builder().client_id(client_id.clone());
    let config = match ctx {
        Ctx::Default => config.consensus_heights(vec![height(7), height(8)]).build(),
        Ctx::Frozen => config
            .consensus_heights(vec![height(7), height(8)])
            .frozen(true)
            .build(),
        Ctx::NoTrustedState => config.consensus_heights(vec![height(9)]).build(),
    };
    let ctx = MockContext::default().with_light_client(&ctx_b, config);

    let mut msg_misbehaviour = dummy_msg_submit_misbehaviour(client_id, &ctx_b, height(9));
    if let Msg::SameBlock = msg {
        msg_misbehaviour.misbehaviour.header2 = msg_misbehaviour.misbehaviour.header1.clone();
    }

    Fixture {
        ctx,
        msg: msg_misbehaviour,
    }
}

fn misbehaviour_validate(fxt: &Fixture<MockMsgSubmitMisbehaviour>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Client(ClientMsg::Misbehaviour(fxt.msg.clone()));
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

fn misbehaviour_execute(fxt: &mut Fixture<MockMsgSubmitMisbehaviour>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Client(ClientMsg::Misbehaviour(fxt.msg.clone()));
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
                IbcEvent::Message(MessageEvent::Client)
            ));
            let IbcEvent::ClientMisbehaviour(misbehaviour_event) = &ibc_events[1] else {
                panic!("unexpected event {:?}", ibc_events[1]);
            };
            assert_eq!(
                misbehaviour_event.client_id(),
                &fxt.msg.misbehaviour.client_id
            );

            let client_state = fxt
                .ctx
                .ibc_store()
                .client_state(&fxt.msg.misbehaviour.client_id)
                .expect("no error")
                .expect("client exists");
            assert!(client_state.is_frozen());
            assert_eq!(client_state.latest_height(), height(8));
        }
    }
}

#[rstest]
#[test_log::test]
fn misbehaviour_healthy(mut fixture: Fixture<MockMsgSubmitMisbehaviour>) {
    misbehaviour_validate(&fixture, Expect::Success);
    misbehaviour_execute(&mut fixture, Expect::Success);
}

#[test]
fn misbehaviour_on_frozen_client() {
    let fxt = misbehaviour_fixture(Ctx::Frozen, Msg::Default);
    let expected_err = ClientError::ClientFrozen {
        client_id: fxt.msg.misbehaviour.client_id.clone(),
    };
    misbehaviour_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[rstest]
#[case::no_trusted_state(Ctx::NoTrustedState, Msg::Default)]
#[case::same_block(Ctx::Default, Msg::SameBlock)]
#[test_log::test]
fn misbehaviour_invalid_evidence(#[case] ctx: Ctx, #[case] msg: Msg) {
    let fxt = misbehaviour_fixture(ctx, msg);
    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Client(ClientMsg::Misbehaviour(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Client(ClientError::InvalidMisbehaviour { .. }))
        ),
        "{res:?}"
    );
}

/// Once frozen, a client accepts neither headers nor proofs.
#[test]
fn frozen_client_rejects_updates_and_proofs() {
    let ctx_b = counterparty::<TendermintHost>();
    let client_id = ClientId::new(TendermintHost::CLIENT_TYPE, 0).expect("no error");
    let mut ctx_a = MockContext::<TendermintHost>::default().with_light_client(
        &ctx_b,
        MockClientConfig::builder()
            .client_id(client_id.clone())
            .consensus_heights(vec![height(8)])
            .build(),
    );

    ctx_a
        .deliver(MsgEnvelope::Client(
            dummy_msg_submit_misbehaviour(client_id.clone(), &ctx_b, height(9)).into(),
        ))
        .expect("misbehaviour accepted");

    let res = ctx_a.deliver(MsgEnvelope::Client(
        dummy_msg_update_client(
            client_id.clone(),
            ctx_b.host_block(&height(10)).expect("block exists").clone(),
        )
        .into(),
    ));
    assert!(
        matches!(
            res,
            Err(RelayerError::TransactionFailed(HandlerError::Client(
                ClientError::ClientFrozen { .. }
            )))
        ),
        "{res:?}"
    );

    let res = verify_membership(
        ctx_a.ibc_store(),
        &client_id,
        height(8),
        &ctx_b.ibc_store().commitment_prefix(),
        &Path::ClientState(ClientStatePath::new(client_id.clone())),
        b"value",
        &dummy_commitment_proof_bytes(),
    );
    assert!(
        matches!(res, Err(ClientError::ClientFrozen { .. })),
        "{res:?}"
    );
}
