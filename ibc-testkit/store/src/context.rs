use core::fmt::Debug;

use ics23::CommitmentProof;

use crate::types::{Height, Path, RawHeight};

/// A versioned key-value store.
///
/// Writes land in a pending state; `commit` seals it as the next version.
pub trait Store: Debug + Send + Sync {
    /// Sets `value` at `path` in the pending state, returning the old value.
    fn set(&mut self, path: Path, value: Vec<u8>) -> Option<Vec<u8>>;

    /// Reads `path` as of `height`.
    fn get(&self, height: Height, path: &Path) -> Option<Vec<u8>>;

    /// Seals the pending state as a new version and returns its root hash.
    fn commit(&mut self) -> Vec<u8>;

    /// Accepts the writes made since the last `apply` or `reset`.
    fn apply(&mut self) {}

    /// Discards the writes made since the last `apply` or `reset`.
    fn reset(&mut self) {}

    /// Number of committed versions.
    fn current_height(&self) -> RawHeight;

    /// Pending keys starting with `key_prefix`, in key order.
    fn get_keys(&self, key_prefix: &Path) -> Vec<Path>;

    /// Every entry of the state at `height`, in key order.
    fn get_entries(&self, height: Height) -> Option<Vec<(Path, Vec<u8>)>>;
}

/// A store whose states are merkleized.
pub trait ProvableStore: Store {
    /// Root hash of the pending state.
    fn root_hash(&self) -> Vec<u8>;

    /// ICS-23 existence proof of `key` in the state at `height`.
    fn get_proof(&self, height: Height, key: &Path) -> Option<CommitmentProof>;
}
