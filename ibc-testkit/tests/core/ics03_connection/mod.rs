use ibc::core::client::types::Height;
use ibc::core::commitment_types::commitment::CommitmentProofBytes;
use ibc::core::commitment_types::verifier::ProofFormat;
use ibc::core::host::types::identifiers::{ChainId, ClientId};
use ibc::core::host::types::path::Path;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::hosts::{HostParams, TestHost};
use ibc_testkit::relayer::utils::TypedRelayerOps;

pub mod conn_open_ack;
pub mod conn_open_confirm;
pub mod conn_open_init;
pub mod conn_open_try;

/// Two chains, each running a client of the other.
pub struct ClientPair<H: TestHost> {
    pub ctx_a: MockContext<H>,
    pub ctx_b: MockContext<H>,
    pub client_id_on_a: ClientId,
    pub client_id_on_b: ClientId,
}

fn chain<H: TestHost>(chain_id: &str, proof_format: ProofFormat) -> MockContext<H> {
    MockContextConfig::builder()
        .host(H::build(
            HostParams::builder()
                .chain_id(ChainId::new(chain_id).expect("no error"))
                .build(),
        ))
        .proof_format(proof_format)
        .build()
}

pub fn client_pair<H: TestHost>(proof_format: ProofFormat) -> ClientPair<H> {
    let mut ctx_a = chain::<H>("mockgaia-0", proof_format.clone());
    let mut ctx_b = chain::<H>("mockgaia-1", proof_format);

    let client_id_on_a =
        TypedRelayerOps::<H>::create_client_on_a(&mut ctx_a, &ctx_b).expect("client created");
    let client_id_on_b =
        TypedRelayerOps::<H>::create_client_on_a(&mut ctx_b, &ctx_a).expect("client created");

    ClientPair {
        ctx_a,
        ctx_b,
        client_id_on_a,
        client_id_on_b,
    }
}

pub fn prove<H: TestHost>(
    ctx: &MockContext<H>,
    height: Height,
    path: impl Into<Path>,
) -> CommitmentProofBytes {
    ctx.get_proof(height, &path.into())
        .expect("record committed")
}
