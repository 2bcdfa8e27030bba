use std::sync::Arc;

use ics23::CommitmentProof;
use parking_lot::RwLock;

use crate::context::{ProvableStore, Store};
use crate::types::{Height, Path, RawHeight};

/// A store handle whose clones all see the same underlying store.
#[derive(Clone, Debug, Default)]
pub struct SharedStore<S>(Arc<RwLock<S>>);

impl<S> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    pub fn share(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S> Store for SharedStore<S>
where
    S: Store,
{
    fn set(&mut self, path: Path, value: Vec<u8>) -> Option<Vec<u8>> {
        self.0.write().set(path, value)
    }

    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>> {
        self.0.read().get(height, path)
    }

    fn commit(&mut self) -> Vec<u8> {
        self.0.write().commit()
    }

    fn apply(&mut self) {
        self.0.write().apply()
    }

    fn reset(&mut self) {
        self.0.write().reset()
    }

    fn current_height(&self) -> RawHeight {
        self.0.read().current_height()
    }

    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.0.read().get_keys(key_prefix)
    }

    fn get_entries(&self, height: Height) -> Option<Vec<(Path, Vec<u8>)>> {
        self.0.read().get_entries(height)
    }
}

impl<S> ProvableStore for SharedStore<S>
where
    S: ProvableStore,
{
    fn root_hash(&self) -> Vec<u8> {
        self.0.read().root_hash()
    }

    fn get_proof(&self, height: Height, key: &Path) -> Option<CommitmentProof> {
        self.0.read().get_proof(height, key)
    }
}
