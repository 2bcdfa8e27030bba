mod in_memory;
mod revertible;
mod shared;

pub use in_memory::InMemoryStore;
pub use revertible::RevertibleStore;
pub use shared::SharedStore;
