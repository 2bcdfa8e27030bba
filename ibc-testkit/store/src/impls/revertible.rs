use ics23::CommitmentProof;
use tracing::trace;

use crate::context::{ProvableStore, Store};
use crate::types::{Height, Path, RawHeight};

/// Adds `apply()`/`reset()` to a store by checkpointing it before the first
/// write that follows an `apply()`.
///
/// The inner store must have value semantics under `Clone`.
#[derive(Clone, Debug, Default)]
pub struct RevertibleStore<S> {
    store: S,
    checkpoint: Option<S>,
}

impl<S> RevertibleStore<S>
where
    S: Store + Clone,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            checkpoint: None,
        }
    }

    /// Whether there are writes that `reset()` would discard.
    pub fn is_dirty(&self) -> bool {
        self.checkpoint.is_some()
    }
}

impl<S> Store for RevertibleStore<S>
where
    S: Store + Clone,
{
    fn set(&mut self, path: Path, value: Vec<u8>) -> Option<Vec<u8>> {
        if self.checkpoint.is_none() {
            self.checkpoint = Some(self.store.clone());
        }
        self.store.set(path, value)
    }

    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        self.store.get(height, path)
    }

    fn commit(&mut self) -> Vec<u8> {
        self.apply();
        self.store.commit()
    }

    fn apply(&mut self) {
        self.checkpoint = None;
    }

    fn reset(&mut self) {
        if let Some(checkpoint) = self.checkpoint.take() {
            trace!("rolling back uncommitted writes");
            self.store = checkpoint;
        }
    }

    fn current_height(&self) -> RawHeight {
        self.store.current_height()
    }

    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.store.get_keys(key_prefix)
    }

    fn get_entries(&self, height: Height) -> Option<Vec<(Path, Vec<u8>)>> {
        self.store.get_entries(height)
    }
}

impl<S> ProvableStore for RevertibleStore<S>
where
    S: ProvableStore + Clone,
{
    fn root_hash(&self) -> Vec<u8> {
        self.store.root_hash()
    }

    fn get_proof(&self, height: Height, key: &Path) -> Option<CommitmentProof> {
        self.store.get_proof(height, key)
    }
}
