use std::sync::Arc;

use ics23::CommitmentProof;
use tracing::trace;

use crate::context::{ProvableStore, Store};
use crate::types::{Height, Path, RawHeight, State};

/// Root hash reported for an empty state.
const EMPTY_ROOT: [u8; 32] = [0; 32];

/// An in-memory store keeping one [`State`] snapshot per committed version.
///
/// Committed snapshots are shared, so cloning the store copies only the
/// pending state.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    committed: Vec<Arc<State>>,
    pending: State,
}

impl InMemoryStore {
    fn get_state(&self, height: Height) -> Option<&State> {
        match height {
            Height::Pending => Some(&self.pending),
            Height::Latest => self.committed.last().map(Arc::as_ref),
            Height::Stable(0) => None,
            Height::Stable(height) => {
                let index = usize::try_from(height - 1).ok()?;
                self.committed.get(index).map(Arc::as_ref)
            }
        }
    }
}

impl Store for InMemoryStore {
    fn set(&mut self, path: Path, value: Vec<u8>) -> Option<Vec<u8>> {
        trace!(%path, "set");
        self.pending.insert(path, value)
    }

    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        trace!(%path, %height, "get");
        self.get_state(height)?.get(path).cloned()
    }

    fn commit(&mut self) -> Vec<u8> {
        self.committed.push(Arc::new(self.pending.clone()));
        trace!(height = self.committed.len(), "committed");
        self.root_hash()
    }

    fn current_height(&self) -> RawHeight {
        self.committed.len() as RawHeight
    }

    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.pending
            .get_keys()
            .into_iter()
            .filter(|key| key.starts_with(key_prefix))
            .cloned()
            .collect()
    }

    fn get_entries(&self, height: Height) -> Option<Vec<(Path, Vec<u8>)>> {
        let entries = self
            .get_state(height)?
            .entries()
            .into_iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(entries)
    }
}

impl ProvableStore for InMemoryStore {
    fn root_hash(&self) -> Vec<u8> {
        self.pending.root_hash().unwrap_or(&EMPTY_ROOT).to_vec()
    }

    fn get_proof(&self, height: Height, key: &Path) -> Option<CommitmentProof> {
        trace!(%key, %height, "get proof");
        self.get_state(height)?.get_proof(key)
    }
}
