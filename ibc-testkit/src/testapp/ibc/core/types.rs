//! The IBC store of a mock chain.

use std::sync::Arc;

use ibc::core::client::types::{ClientState, Height, RawClientState};
use ibc::core::commitment_types::commitment::CommitmentPrefix;
use ibc::core::commitment_types::simple::{RawSimpleProofLevel, SimpleMerkleTree};
use ibc::core::commitment_types::verifier::ProofFormat;
use ibc::core::connection::types::ConnectionEnd;
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::host::types::identifiers::{ChainId, ConnectionId};
use ibc::core::host::types::path::{
    ClientConnectionPath, ClientConsensusStatePath, ClientStatePath, ConnectionPath,
    Path as IbcPath,
};
use ibc::core::primitives::prelude::*;
use ibc_proto::ibc::core::connection::v1::ConnectionEnd as RawConnectionEnd;
use ibc_proto::ics23::CommitmentProof;
use ibc_testkit_store::context::{ProvableStore, Store};
use ibc_testkit_store::impls::{InMemoryStore, RevertibleStore, SharedStore};
use ibc_testkit_store::types::{
    Height as StoreHeight, JsonStore, MainStore, Path as StorePath, ProtobufStore,
};
use parking_lot::Mutex;
use tracing::trace;

use crate::hosts::{HostConsensusState, TestHost};

/// Prefix under which a mock chain commits its IBC store.
pub const DEFAULT_COMMITMENT_PREFIX: &[u8] = b"ibc";

/// An object that stores all IBC related data of a chain of type `H`, and
/// of the chains of the same type it tracks.
///
/// Records in the `protocol` namespace go to the provable store whose root
/// the host commits to. The client to connection index lives in a separate,
/// unprovable store.
#[derive(Debug)]
pub struct MockIbcStore<H>
where
    H: TestHost,
{
    /// Host chain identifier.
    pub chain_id: ChainId,

    pub commitment_prefix: CommitmentPrefix,

    /// How the host proves its own state.
    pub proof_format: ProofFormat,

    /// Latest committed height of the host, unset before genesis.
    pub host_height: Option<Height>,

    /// Handle to the provable store.
    pub store: MainStore,

    /// Handle to the unprovable store.
    pub free_store: MainStore,

    pub client_state_store: ProtobufStore<MainStore, ClientStatePath, ClientState, RawClientState>,

    pub consensus_state_store:
        JsonStore<MainStore, ClientConsensusStatePath, HostConsensusState<H>>,

    pub connection_end_store:
        ProtobufStore<MainStore, ConnectionPath, ConnectionEnd, RawConnectionEnd>,

    pub connection_ids_store: JsonStore<MainStore, ClientConnectionPath, Vec<ConnectionId>>,

    /// Emitted IBC events in order
    pub events: Arc<Mutex<Vec<IbcEvent>>>,

    /// Logs of the IBC module
    pub logs: Arc<Mutex<Vec<String>>>,
}

impl<H> MockIbcStore<H>
where
    H: TestHost,
{
    pub fn new(chain_id: ChainId, proof_format: ProofFormat) -> Self {
        let store = SharedStore::new(RevertibleStore::new(InMemoryStore::default()));
        let free_store = SharedStore::new(RevertibleStore::new(InMemoryStore::default()));

        Self {
            chain_id,
            commitment_prefix: CommitmentPrefix::try_from(DEFAULT_COMMITMENT_PREFIX.to_vec())
                .expect("Never fails"),
            proof_format,
            host_height: None,
            client_state_store: ProtobufStore::new(store.share()),
            consensus_state_store: JsonStore::new(store.share()),
            connection_end_store: ProtobufStore::new(store.share()),
            connection_ids_store: JsonStore::new(free_store.share()),
            store,
            free_store,
            events: Arc::new(Mutex::new(Vec::new())),
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seals the pending writes as the next store version and returns the
    /// root the host commits to.
    pub fn commit(&mut self) -> Vec<u8> {
        self.free_store.commit();
        let root = self.store.commit();

        match self.proof_format {
            ProofFormat::Ics23(_) => root,
            ProofFormat::SimpleMerkle => self
                .merkle_tree(StoreHeight::Latest)
                .map(|tree| tree.root())
                .unwrap_or(root),
        }
    }

    /// Keeps the writes of the last message.
    pub fn apply(&mut self) {
        self.store.apply();
        self.free_store.apply();
    }

    /// Discards the writes of the last message.
    pub fn reset(&mut self) {
        trace!(chain_id = %self.chain_id, "discarding uncommitted writes");
        self.store.reset();
        self.free_store.reset();
    }

    /// Number of committed store versions.
    pub fn store_version(&self) -> u64 {
        self.store.current_height()
    }

    /// ICS-23 proof of `path` in the store version `version`.
    pub fn ics23_proof(&self, version: u64, path: &IbcPath) -> Option<CommitmentProof> {
        self.store
            .get_proof(StoreHeight::Stable(version), &StorePath::from(path.clone()))
    }

    /// Simple merkle proof level of `path` in the store version `version`,
    /// proving its absence when nothing is stored there.
    pub fn simple_proof(&self, version: u64, path: &IbcPath) -> Option<RawSimpleProofLevel> {
        let tree = self.merkle_tree(StoreHeight::Stable(version))?;
        Some(tree.prove(path.store_key().as_bytes()))
    }

    fn merkle_tree(&self, height: StoreHeight) -> Option<SimpleMerkleTree> {
        let entries = self.store.get_entries(height)?;
        Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.as_str().as_bytes().to_vec(), value))
                .collect(),
        )
    }

    pub fn get_events(&self) -> Vec<IbcEvent> {
        self.events.lock().clone()
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.logs.lock().clone()
    }
}
