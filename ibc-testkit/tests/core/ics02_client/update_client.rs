use ibc::clients::tendermint::TENDERMINT_CLIENT_TYPE;
use ibc::core::client::context::ClientValidationContext;
use ibc::core::client::types::error::ClientError;
use ibc::core::client::types::msgs::{ClientMsg, MsgUpdateClient};
use ibc::core::client::types::{ConsensusState, Header, Height, WeightedSignerSet};
use ibc::core::client::verify::consensus_state_at;
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ChainId, ClientId};
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::client::{dummy_msg_update_client, MockClientConfig};
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::hosts::mock::MockBlockParams;
use ibc_testkit::hosts::tendermint::BlockParams;
use ibc_testkit::hosts::{HostParams, MockHost, TendermintHost, TestHost};
use ibc_testkit::relayer::error::RelayerError;
use ibc_testkit::testapp::ibc::clients::mock::header::MockSignedHeader;
use ibc_testkit::testapp::ibc::clients::mock::validator_set::MockValidatorSet;
use ibc_testkit::testapp::ibc::clients::MockHeader;
use rstest::*;
use tendermint_testgen::Validator as TestgenValidator;
use test_log::test;

type MockMsgUpdateClient = MsgUpdateClient<MockSignedHeader, MockValidatorSet>;

enum Ctx {
    Default,
    Frozen,
    NoClient,
}

enum Msg {
    Default,
    SameHeight,
    LowerHeight,
    WrongChain,
    Unsigned,
    Skipping,
}

fn counterparty<H: TestHost>(latest_height: u64) -> MockContext<H> {
    MockContextConfig::builder()
        .host(H::build(
            HostParams::builder()
                .chain_id(ChainId::new("mockgaia-1").expect("no error"))
                .build(),
        ))
        .latest_height(Height::new(latest_height).expect("no error"))
        .build()
}

fn rotated_set() -> MockValidatorSet {
    MockValidatorSet::uniform(&["1", "2", "3"], 50)
}

#[fixture]
fn fixture() -> Fixture<MockMsgUpdateClient> {
    update_client_fixture(Ctx::Default, Msg::Default)
}

/// The client tracks the counterparty at height 5. The counterparty has
/// produced block 6, announcing a rotated set, and block 7 signed by it.
fn update_client_fixture(ctx: Ctx, msg: Msg) -> Fixture<MockMsgUpdateClient> {
    let mut ctx_b = counterparty::<MockHost>(5);
    let client_id = ClientId::new(MockHost::CLIENT_TYPE, 0).expect("no error");

    let ctx = match ctx {
        Ctx::Default => MockContext::default().with_light_client(
            &ctx_b,
            MockClientConfig::builder().client_id(client_id.clone()).build(),
        ),
        Ctx::Frozen => MockContext::default().with_light_client(
            &ctx_b,
            MockClientConfig::builder()
                .client_id(client_id.clone())
                .frozen(true)
                .build(),
        ),
        Ctx::NoClient => MockContext::default(),
    };

    ctx_b.advance_with_block_params(
        &MockBlockParams::builder()
            .next_validators(rotated_set())
            .build(),
    );
    ctx_b.advance_with_block_params(
        &MockBlockParams::builder()
            .validators(rotated_set())
            .next_validators(rotated_set())
            .build(),
    );

    let block_at = |height: u64| {
        ctx_b
            .host_block(&Height::new(height).expect("no error"))
            .expect("block exists")
            .clone()
    };

    let header = match msg {
        Msg::Default => block_at(6),
        Msg::SameHeight => block_at(5),
        Msg::LowerHeight => block_at(4),
        Msg::WrongChain => MockHost::builder()
            .chain_id(ChainId::new("mockgaia-2").expect("no error"))
            .build()
            .generate_block(vec![0; 32], 6, &MockBlockParams::default()),
        Msg::Unsigned => {
            let validators = MockValidatorSet::default();
            let signed_header = MockSignedHeader::new(
                ctx_b.chain_id().clone(),
                6,
                vec![0; 32],
                &validators,
                &validators,
            )
            .signed_by(&["1"]);
            MockHeader::new(signed_header, validators.clone(), validators)
        }
        Msg::Skipping => block_at(7),
    };

    Fixture {
        ctx,
        msg: dummy_msg_update_client(client_id, header),
    }
}

fn update_client_validate(fxt: &Fixture<MockMsgUpdateClient>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Client(ClientMsg::UpdateClient(fxt.msg.clone()));
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

fn update_client_execute(fxt: &mut Fixture<MockMsgUpdateClient>, expect: Expect) {
    let msg_envelope = MsgEnvelope::Client(ClientMsg::UpdateClient(fxt.msg.clone()));
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
            let IbcEvent::UpdateClient(update_client_event) = &ibc_events[1] else {
                panic!("unexpected event {:?}", ibc_events[1]);
            };

            let header = &fxt.msg.header;
            let height = header.height().expect("no error");
            assert_eq!(update_client_event.client_id(), &fxt.msg.client_id);
            assert_eq!(update_client_event.consensus_height(), &height);

            let client_state = fxt
                .ctx
                .ibc_store()
                .client_state(&fxt.msg.client_id)
                .expect("no error")
                .expect("client exists");
            assert_eq!(client_state.latest_height(), height);

            let consensus_state =
                consensus_state_at(fxt.ctx.ibc_store(), &fxt.msg.client_id, height)
                    .expect("no error")
                .expect("consensus state exists");
            assert_eq!(
                consensus_state,
                ConsensusState::from_header(header).expect("no error")
            );
        }
    }
}

#[rstest]
#[test_log::test]
fn update_client_healthy(mut fixture: Fixture<MockMsgUpdateClient>) {
    update_client_validate(&fixture, Expect::Success);
    update_client_execute(&mut fixture, Expect::Success);
}

#[test]
fn update_client_not_found() {
    let fxt = update_client_fixture(Ctx::NoClient, Msg::Default);
    let expected_err = ClientError::ClientNotFound {
        client_id: fxt.msg.client_id.clone(),
    };
    update_client_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn update_frozen_client() {
    let fxt = update_client_fixture(Ctx::Frozen, Msg::Default);
    let expected_err = ClientError::ClientFrozen {
        client_id: fxt.msg.client_id.clone(),
    };
    update_client_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[rstest]
#[case::same_height(Msg::SameHeight)]
#[case::lower_height(Msg::LowerHeight)]
#[case::wrong_chain(Msg::WrongChain)]
#[test_log::test]
fn update_client_invalid_header(#[case] msg: Msg) {
    let fxt = update_client_fixture(Ctx::Default, msg);
    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Client(ClientMsg::UpdateClient(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Client(ClientError::InvalidHeader { .. }))
        ),
        "{res:?}"
    );
}

#[test]
fn update_client_insufficient_voting_power() {
    let fxt = update_client_fixture(Ctx::Default, Msg::Unsigned);
    let expected_err = ClientError::InsufficientVotingPower {
        signed: 50,
        total: 100,
    };
    update_client_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn update_client_cannot_skip_a_rotation() {
    let fxt = update_client_fixture(Ctx::Default, Msg::Skipping);
    let res = validate(
        fxt.ctx.ibc_store(),
        &MsgEnvelope::Client(ClientMsg::UpdateClient(fxt.msg.clone())),
    );
    assert!(
        matches!(
            res,
            Err(HandlerError::Client(ClientError::ValidatorSetMismatch { .. }))
        ),
        "{res:?}"
    );
}

/// Every accepted update raises the latest height and is signed by the set
/// the previously trusted state announced.
#[test]
fn consecutive_updates_follow_the_validator_sets() {
    let mut ctx_b = counterparty::<MockHost>(5);
    let mut ctx_a = MockContext::<MockHost>::default()
        .with_light_client(&ctx_b, MockClientConfig::default());
    let client_id = ClientId::new(MockHost::CLIENT_TYPE, 0).expect("no error");

    let history = vec![
        MockValidatorSet::default(),
        rotated_set(),
        MockValidatorSet::uniform(&["2", "3"], 50),
        MockValidatorSet::uniform(&["3", "4"], 50),
    ];

    let mut trusted = consensus_state_at(
        ctx_a.ibc_store(),
        &client_id,
        ctx_b.latest_height(),
    )
    .expect("no error")
    .expect("consensus state exists");

    for params in MockBlockParams::from_validator_history(history) {
        ctx_b.advance_with_block_params(&params);
        let header = ctx_b.latest_block().expect("block exists").clone();
        let height = header.height().expect("no error");

        assert_eq!(trusted.next_validator_set, header.validator_set);

        ctx_a
            .deliver(MsgEnvelope::Client(
                dummy_msg_update_client(client_id.clone(), header).into(),
            ))
            .expect("update accepted");

        let updated = consensus_state_at(ctx_a.ibc_store(), &client_id, height)
            .expect("no error")
            .expect("consensus state exists");
        assert!(updated.height > trusted.height);
        trusted = updated;
    }

    assert_eq!(trusted.height, Height::new(8).expect("no error"));
    assert_eq!(trusted.next_validator_set.total_voting_power(), 100);
}

struct TendermintFixture {
    ctx_a: MockContext<TendermintHost>,
    ctx_b: MockContext<TendermintHost>,
    client_id: ClientId,
}

fn v1() -> Vec<TestgenValidator> {
    vec![
        TestgenValidator::new("1").voting_power(50),
        TestgenValidator::new("2").voting_power(50),
    ]
}

fn v2() -> Vec<TestgenValidator> {
    vec![
        TestgenValidator::new("1").voting_power(50),
        TestgenValidator::new("2").voting_power(50),
        TestgenValidator::new("3").voting_power(50),
    ]
}

/// A Tendermint client `07-tendermint-0` trusting the counterparty at
/// height 100, whose signers are `v1`.
fn tendermint_fixture() -> TendermintFixture {
    let ctx_b = counterparty::<TendermintHost>(100);
    let client_id = ClientId::new(TENDERMINT_CLIENT_TYPE, 0).expect("no error");
    let ctx_a = MockContext::<TendermintHost>::default().with_light_client(
        &ctx_b,
        MockClientConfig::builder().client_id(client_id.clone()).build(),
    );

    TendermintFixture {
        ctx_a,
        ctx_b,
        client_id,
    }
}

fn latest_client_height(ctx: &MockContext<TendermintHost>, client_id: &ClientId) -> Height {
    ctx.ibc_store()
        .client_state(client_id)
        .expect("no error")
        .expect("client exists")
        .latest_height()
}

#[test]
fn tendermint_update_with_rotation() {
    let TendermintFixture {
        mut ctx_a,
        mut ctx_b,
        client_id,
    } = tendermint_fixture();
    assert_eq!(client_id.as_str(), "07-tendermint-0");
    assert_eq!(
        latest_client_height(&ctx_a, &client_id),
        Height::new(100).expect("no error")
    );

    ctx_b.advance_with_block_params(
        &BlockParams::builder()
            .validators(v1())
            .next_validators(v2())
            .build(),
    );
    let header: Header<_, _> = ctx_b.latest_block().expect("block exists").clone();

    ctx_a
        .deliver(MsgEnvelope::Client(
            dummy_msg_update_client(client_id.clone(), header.clone()).into(),
        ))
        .expect("update accepted");

    let height = Height::new(101).expect("no error");
    assert_eq!(latest_client_height(&ctx_a, &client_id), height);

    let consensus_state = consensus_state_at(ctx_a.ibc_store(), &client_id, height)
        .expect("no error")
        .expect("consensus state exists");
    assert_eq!(consensus_state.root(), &header.root());
    assert_eq!(consensus_state.next_validator_set.total_voting_power(), 150);
}

#[test]
fn tendermint_update_signed_by_unannounced_set() {
    let TendermintFixture {
        mut ctx_a,
        ctx_b,
        client_id,
    } = tendermint_fixture();

    let header = ctx_b.host.generate_block(
        vec![0; 32],
        101,
        &BlockParams::builder()
            .validators(v2())
            .next_validators(v2())
            .build(),
    );

    let res = ctx_a.deliver(MsgEnvelope::Client(
        dummy_msg_update_client(client_id.clone(), header).into(),
    ));

    assert!(
        matches!(
            res,
            Err(RelayerError::TransactionFailed(HandlerError::Client(
                ClientError::ValidatorSetMismatch { .. }
            )))
        ),
        "{res:?}"
    );
    assert_eq!(
        latest_client_height(&ctx_a, &client_id),
        Height::new(100).expect("no error")
    );
}
