pub mod height;
pub mod path;
pub mod store;

pub use height::{Height, RawHeight};
pub use path::Path;
pub use store::{JsonStore, MainStore, ProtobufStore, State, StoreError, TypedSet, TypedStore};
