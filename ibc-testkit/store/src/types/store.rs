use core::marker::PhantomData;

use displaydoc::Display;

use crate::avl::AvlTree;
use crate::context::Store;
use crate::impls::{InMemoryStore, RevertibleStore, SharedStore};
use crate::types::{Height, Path};
use crate::utils::codec::{JsonCodec, NullCodec, ProtobufCodec};
use crate::utils::{Codec, CodecError};

/// A snapshot of the store at one version.
pub type State = AvlTree<Path, Vec<u8>>;

/// The store stack of a mock chain.
pub type MainStore = SharedStore<RevertibleStore<InMemoryStore>>;

pub type JsonStore<S, K, V> = TypedStore<S, K, JsonCodec<V>>;

pub type ProtobufStore<S, K, V, R> = TypedStore<S, K, ProtobufCodec<V, R>>;

/// A `TypedStore` of keys without values.
pub type TypedSet<S, K> = TypedStore<S, K, NullCodec>;

#[derive(Debug, Display)]
pub enum StoreError {
    /// failed to encode the value at `{path}`: {error}
    Encode { path: Path, error: CodecError },
    /// stored value at `{path}` is undecodable: {error}
    Decode { path: Path, error: CodecError },
}

impl std::error::Error for StoreError {}

/// A view of a store where every key of type `K` holds a value encoded by
/// the codec `C`.
#[derive(Clone, Debug)]
pub struct TypedStore<S, K, C> {
    store: S,
    _key: PhantomData<K>,
    _codec: PhantomData<C>,
}

impl<S, K, C, V> TypedStore<S, K, C>
where
    S: Store,
    C: Codec<Type = V>,
    K: Into<Path> + Clone,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _key: PhantomData,
            _codec: PhantomData,
        }
    }

    pub fn set(&mut self, path: K, value: V) -> Result<(), StoreError> {
        let path = path.into();
        let encoded = C::encode(&value).map_err(|error| StoreError::Encode {
            path: path.clone(),
            error,
        })?;
        self.store.set(path, encoded.as_ref().to_vec());
        Ok(())
    }

    /// `Ok(None)` when nothing is stored, `Err` when what is stored does not
    /// decode.
    pub fn get(&self, height: Height, path: &K) -> Result<Option<V>, StoreError> {
        let path: Path = path.clone().into();
        self.store
            .get(height, &path)
            .map(|bytes| C::decode(&bytes).map_err(|error| StoreError::Decode { path, error }))
            .transpose()
    }

    pub fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.store.get_keys(key_prefix)
    }
}

impl<S, K> TypedStore<S, K, NullCodec>
where
    S: Store,
    K: Into<Path> + Clone,
{
    pub fn set_path(&mut self, path: K) {
        self.store.set(path.into(), vec![0x00]);
    }

    pub fn is_path_set(&self, height: Height, path: &K) -> bool {
        self.store.get(height, &path.clone().into()).is_some()
    }
}
