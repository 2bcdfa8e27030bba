use ibc::core::client::types::{ClientState, ConsensusState, Height};
use ibc::core::commitment_types::commitment::CommitmentProofBytes;
use ibc::core::commitment_types::merkle::MerkleProof;
use ibc::core::commitment_types::simple::{SimpleMerkleProof, SimpleMerkleTree};
use ibc::core::commitment_types::verifier::ProofFormat;
use ibc::core::connection::types::ConnectionEnd;
use ibc::core::entrypoint::{dispatch, MsgEnvelopeOf};
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::{ChainId, ClientId, ConnectionId};
use ibc::core::host::types::path::{
    ClientConsensusStatePath, ClientStatePath, ConnectionPath, Path as IbcPath,
};
use ibc::core::host::ValidationContext;
use ibc::core::primitives::prelude::*;
use ibc_query::core::{ChainNode, ValidatorSetOffset};
use ibc_testkit_store::context::{ProvableStore, Store};
use ibc_testkit_store::impls::{InMemoryStore, RevertibleStore, SharedStore};
use ibc_testkit_store::types::{Height as StoreHeight, MainStore, Path as StorePath};
use tracing::debug;

use crate::fixtures::core::client::MockClientConfig;
use crate::fixtures::core::context::MockContextConfig;
use crate::hosts::{HostBlock, HostConsensusState, TestHost};
use crate::relayer::error::RelayerError;
use crate::testapp::ibc::core::client_ctx::corrupted;
use crate::testapp::ibc::core::types::MockIbcStore;

/// A context implementing the dependencies necessary for testing any IBC
/// module.
///
/// The host produces the blocks. The outer `main_store` holds a single
/// record, the root of the IBC store under the commitment prefix, and its
/// root is the app hash of every block.
#[derive(Debug)]
pub struct MockContext<H>
where
    H: TestHost,
{
    /// The type of host chain underlying this mock context.
    pub host: H,

    /// Store committing to the IBC store root, one version per block.
    pub main_store: MainStore,

    /// An object that stores all IBC related data.
    pub ibc_store: MockIbcStore<H>,

    /// Where the context publishes, as a node, the set signing each block.
    pub validator_set_offset: ValidatorSetOffset,
}

pub type MockMsgEnvelope<H> = MsgEnvelopeOf<MockIbcStore<H>>;

impl<H> MockContext<H>
where
    H: TestHost,
{
    /// An empty context without any block. Use [`MockContextConfig`] to
    /// obtain a context with a history.
    pub fn new(
        host: H,
        proof_format: ProofFormat,
        validator_set_offset: ValidatorSetOffset,
    ) -> Self {
        let ibc_store = MockIbcStore::new(host.chain_id().clone(), proof_format);

        Self {
            host,
            main_store: SharedStore::new(RevertibleStore::new(InMemoryStore::default())),
            ibc_store,
            validator_set_offset,
        }
    }

    pub fn ibc_store(&self) -> &MockIbcStore<H> {
        &self.ibc_store
    }

    pub fn ibc_store_mut(&mut self) -> &mut MockIbcStore<H> {
        &mut self.ibc_store
    }

    pub fn chain_id(&self) -> &ChainId {
        self.host.chain_id()
    }

    pub fn proof_format(&self) -> &ProofFormat {
        &self.ibc_store.proof_format
    }

    /// Commits the IBC store and records its root under the prefix.
    pub fn end_block(&mut self) {
        let root = self.ibc_store.commit();
        let key = self.prefix_key();
        self.main_store.set(key, root);
    }

    /// Commits the outer store and produces the block committing to it.
    pub fn produce_block(&mut self, params: &H::BlockParams) {
        let app_hash = self.commit_main_store();
        self.host.advance_block(app_hash, params);
    }

    /// Exposes the freshly produced block to the IBC handlers.
    pub fn begin_block(&mut self) {
        self.ibc_store.host_height = self.host.latest_height();
    }

    /// Produces the genesis block. Called once, on an empty context.
    pub fn generate_genesis_block(&mut self, genesis_params: &H::BlockParams) {
        assert!(self.host.is_empty(), "genesis block already produced");
        self.advance_with_block_params(genesis_params);
    }

    pub fn advance_with_block_params(&mut self, params: &H::BlockParams) {
        self.end_block();
        self.produce_block(params);
        self.begin_block();
    }

    /// Advances the host chain height by one block, signed with the default
    /// parameters.
    pub fn advance_block(&mut self) {
        self.advance_with_block_params(&Default::default())
    }

    /// Advances the host chain height to the given target height.
    pub fn advance_block_up_to(mut self, target_height: Height) -> Self {
        let latest_height = self.latest_height();
        if target_height <= latest_height {
            panic!(
                "advance_block_up_to({target_height}) is not beyond latest height {latest_height}"
            );
        }

        for _ in latest_height.value()..target_height.value() {
            self.advance_block()
        }

        self
    }

    /// Returns the latest height of the host. The IBC store always agrees.
    pub fn latest_height(&self) -> Height {
        let latest_ibc_height = self
            .ibc_store
            .host_height()
            .expect("Never fails");
        let latest_host_height = self.host.latest_height().expect("Never fails");
        assert_eq!(
            latest_ibc_height, latest_host_height,
            "The IBC store and the host chain must have the same height"
        );
        latest_host_height
    }

    pub fn host_block(&self, height: &Height) -> Option<&HostBlock<H>> {
        self.host.get_block(height)
    }

    pub fn latest_block(&self) -> Option<&HostBlock<H>> {
        self.host.latest_block()
    }

    /// The client state a counterparty tracking this chain at `height`
    /// starts from.
    pub fn light_client_state(&self, height: Height) -> ClientState {
        ClientState::new(
            self.chain_id().clone(),
            height,
            self.proof_format().clone(),
        )
    }

    /// The consensus state a light client derives from the block at `height`.
    pub fn light_consensus_state(&self, height: &Height) -> Option<HostConsensusState<H>> {
        self.host_block(height)
            .and_then(|block| ConsensusState::from_header(block).ok())
    }

    /// Associates a client record to this context.
    pub fn with_client_state(mut self, client_id: &ClientId, client_state: ClientState) -> Self {
        self.ibc_store
            .client_state_store
            .set(ClientStatePath::new(client_id.clone()), client_state)
            .expect("error writing to store");
        self
    }

    /// Associates a consensus state to this context.
    pub fn with_consensus_state(
        mut self,
        client_id: &ClientId,
        height: Height,
        consensus_state: HostConsensusState<H>,
    ) -> Self {
        self.ibc_store
            .consensus_state_store
            .set(
                ClientConsensusStatePath::new(client_id.clone(), height.value()),
                consensus_state,
            )
            .expect("error writing to store");
        self
    }

    /// Associates a connection to this context.
    pub fn with_connection(
        mut self,
        connection_id: ConnectionId,
        connection_end: ConnectionEnd,
    ) -> Self {
        self.ibc_store
            .connection_end_store
            .set(ConnectionPath::new(&connection_id), connection_end)
            .expect("error writing to store");
        self
    }

    /// Installs a client of `counterparty` trusting the blocks listed in
    /// `config`, the counterparty's latest block by default.
    pub fn with_light_client(
        self,
        counterparty: &MockContext<H>,
        config: MockClientConfig,
    ) -> Self {
        let client_id = config
            .client_id
            .unwrap_or_else(|| self.next_client_id());

        let consensus_heights = if config.consensus_heights.is_empty() {
            vec![counterparty.latest_height()]
        } else {
            config.consensus_heights
        };
        let latest_height = consensus_heights
            .iter()
            .copied()
            .max()
            .expect("Never fails");

        let client_state = counterparty.light_client_state(latest_height);
        let client_state = if config.frozen {
            client_state.frozen()
        } else {
            client_state
        };

        consensus_heights.into_iter().fold(
            self.with_client_state(&client_id, client_state),
            |ctx, height| {
                let consensus_state = counterparty
                    .light_consensus_state(&height)
                    .expect("counterparty block exists");
                ctx.with_consensus_state(&client_id, height, consensus_state)
            },
        )
    }

    /// Processes a message as a transaction of its own. A failed message
    /// leaves no trace: its writes, events and logs are dropped. A successful
    /// one is committed in a new block.
    pub fn deliver(&mut self, msg: MockMsgEnvelope<H>) -> Result<(), RelayerError> {
        // records seeded with the `with_*` builders survive a failed message
        self.ibc_store.apply();

        let events_len = self.ibc_store.events.lock().len();
        let logs_len = self.ibc_store.logs.lock().len();

        if let Err(e) = dispatch(&mut self.ibc_store, msg) {
            debug!(chain_id = %self.chain_id(), error = %e, "message rejected");
            self.ibc_store.reset();
            self.ibc_store.events.lock().truncate(events_len);
            self.ibc_store.logs.lock().truncate(logs_len);
            return Err(RelayerError::TransactionFailed(e));
        }

        self.ibc_store.apply();
        self.advance_block();

        Ok(())
    }

    /// Proof of the record at `path` in the state committed by the block at
    /// `height`, from the IBC store up to the app hash. With the simple
    /// merkle format an empty `path` yields a proof of absence.
    pub fn get_proof(&self, height: Height, path: &IbcPath) -> Option<CommitmentProofBytes> {
        let version = height.value();
        if version > self.main_store.current_height() {
            return None;
        }

        match self.proof_format() {
            ProofFormat::Ics23(_) => {
                let inner = self.ibc_store.ics23_proof(version, path)?;
                let outer = self
                    .main_store
                    .get_proof(StoreHeight::Stable(version), &self.prefix_key())?;
                MerkleProof {
                    proofs: vec![inner, outer],
                }
                .try_into()
                .ok()
            }
            ProofFormat::SimpleMerkle => {
                let inner = self.ibc_store.simple_proof(version, path)?;
                let outer = self
                    .main_tree(StoreHeight::Stable(version))?
                    .prove(self.ibc_store.commitment_prefix.as_bytes());
                SimpleMerkleProof {
                    levels: vec![inner, outer],
                }
                .try_into()
                .ok()
            }
        }
    }

    pub fn get_events(&self) -> Vec<IbcEvent> {
        self.ibc_store.get_events()
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.ibc_store.get_logs()
    }

    /// Identifier the next created client should take.
    pub fn next_client_id(&self) -> ClientId {
        let counter = self
            .ibc_store
            .client_state_store
            .get_keys(&StorePath::from("protocol/clients/"))
            .iter()
            .filter(|key| key.as_str().ends_with("/clientState"))
            .count();
        ClientId::new(H::CLIENT_TYPE, counter as u64).expect("Never fails")
    }

    /// Identifier the next opened connection should take.
    pub fn next_connection_id(&self) -> ConnectionId {
        let counter = self
            .ibc_store
            .connection_end_store
            .get_keys(&StorePath::from("protocol/connections/"))
            .len();
        ConnectionId::new(counter as u64)
    }

    fn prefix_key(&self) -> StorePath {
        String::from_utf8(self.ibc_store.commitment_prefix.as_bytes().to_vec())
            .expect("Never fails")
            .into()
    }

    fn commit_main_store(&mut self) -> Vec<u8> {
        let root = self.main_store.commit();
        match self.proof_format() {
            ProofFormat::Ics23(_) => root,
            ProofFormat::SimpleMerkle => self
                .main_tree(StoreHeight::Latest)
                .map(|tree| tree.root())
                .unwrap_or(root),
        }
    }

    fn main_tree(&self, height: StoreHeight) -> Option<SimpleMerkleTree> {
        let entries = self.main_store.get_entries(height)?;
        Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.as_str().as_bytes().to_vec(), value))
                .collect(),
        )
    }

    fn block_at(&self, height: u64) -> Option<&HostBlock<H>> {
        Height::new(height)
            .ok()
            .and_then(|height| self.host.get_block(&height))
    }
}

impl<H> Default for MockContext<H>
where
    H: TestHost,
{
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

/// The context answers queries as a full node of its chain. Reads are pinned
/// to committed blocks.
impl<H> ChainNode for MockContext<H>
where
    H: TestHost,
{
    type SignedHeader = H::SignedHeader;
    type ValidatorSet = H::ValidatorSet;

    fn latest_height(&self) -> Result<Height, HostError> {
        self.host
            .latest_height()
            .ok_or_else(|| HostError::broken_invariant("host has not produced any block"))
    }

    fn signed_header(&self, height: Height) -> Result<Option<H::SignedHeader>, HostError> {
        Ok(self
            .host
            .get_block(&height)
            .map(|block| block.signed_header.clone()))
    }

    fn validator_set(&self, index: u64) -> Result<Option<H::ValidatorSet>, HostError> {
        // the set signing the block after the latest one is only known as
        // the announced next set
        let validator_set = match self.validator_set_offset {
            ValidatorSetOffset::Previous => index
                .checked_add(1)
                .and_then(|signed| self.block_at(signed))
                .map(|block| block.validator_set.clone())
                .or_else(|| {
                    self.block_at(index)
                        .map(|block| block.next_validator_set.clone())
                }),
            ValidatorSetOffset::Current => self
                .block_at(index)
                .map(|block| block.validator_set.clone())
                .or_else(|| {
                    index
                        .checked_sub(1)
                        .and_then(|previous| self.block_at(previous))
                        .map(|block| block.next_validator_set.clone())
                }),
        };

        Ok(validator_set)
    }

    fn connection_end(
        &self,
        conn_id: &ConnectionId,
        height: Height,
    ) -> Result<Option<ConnectionEnd>, HostError> {
        if height.value() > self.ibc_store.store_version() {
            return Ok(None);
        }

        self.ibc_store
            .connection_end_store
            .get(StoreHeight::Stable(height.value()), &ConnectionPath::new(conn_id))
            .map_err(corrupted)
    }
}
