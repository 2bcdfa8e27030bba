//! # AVL Tree
//!
//! A merkleized AVL tree supporting `get` and `insert`. Entries are never
//! removed: a chain store only grows, and rollbacks are handled one layer up
//! by [`RevertibleStore`](crate::impls::RevertibleStore).
//!
//! Existence proofs follow [ICS-23](https://github.com/cosmos/ics23) and
//! verify against [`proof_spec`].

pub use node::AvlNode;
pub use proof::{proof_spec, LEAF_PREFIX};
pub use tree::AvlTree;

mod node;
mod proof;
mod tree;


/// A sha256 digest.
pub type Hash = [u8; 32];
