use core::borrow::Borrow;
use core::cmp::Ordering;

use ics23::commitment_proof::Proof;
use ics23::{CommitmentProof, ExistenceProof, HashOp, InnerOp};

use super::node::{as_node_ref, NodeRef};
use super::proof::leaf_op;
use super::Hash;

/// An AVL Tree that supports `get` and `insert` and proves the existence of
/// its entries.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct AvlTree<K, V> {
    pub root: NodeRef<K, V>,
}

impl<K, V> AvlTree<K, V>
where
    K: Ord + AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    pub fn new() -> Self {
        AvlTree { root: None }
    }

    /// The merkle hash of the root, if the tree holds at least one entry.
    pub fn root_hash(&self) -> Option<&Hash> {
        Some(&self.root.as_ref()?.merkle_hash)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node_ref = &self.root;
        while let Some(node) = node_ref {
            match node.key.borrow().cmp(key) {
                Ordering::Greater => node_ref = &node.left,
                Ordering::Less => node_ref = &node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Inserts an entry in O(log(n)), returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut old_value = None;
        Self::insert_rec(&mut self.root, key, value, &mut old_value);
        old_value
    }

    fn insert_rec(node_ref: &mut NodeRef<K, V>, key: K, value: V, old_value: &mut Option<V>) {
        match node_ref {
            Some(node) => {
                match node.key.cmp(&key) {
                    Ordering::Greater => Self::insert_rec(&mut node.left, key, value, old_value),
                    Ordering::Less => Self::insert_rec(&mut node.right, key, value, old_value),
                    Ordering::Equal => *old_value = Some(node.set_value(value)),
                }
                node.update();
                Self::balance_node(node_ref);
            }
            None => *node_ref = as_node_ref(key, value),
        }
    }

    /// Returns an ICS-23 existence proof for `key`, if present.
    pub fn get_proof<Q>(&self, key: &Q) -> Option<CommitmentProof>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let proof = Self::get_proof_rec(key, &self.root)?;
        Some(CommitmentProof {
            proof: Some(Proof::Exist(proof)),
        })
    }

    /// Builds the proof bottom-up: the leaf first, then one inner op per
    /// ancestor on the way back to the root.
    fn get_proof_rec<Q>(key: &Q, node_ref: &NodeRef<K, V>) -> Option<ExistenceProof>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = node_ref.as_ref()?;
        let left = node.left_hash().unwrap_or_default();
        let right = node.right_hash().unwrap_or_default();

        let (mut proof, prefix, suffix) = match node.key.borrow().cmp(key) {
            Ordering::Greater => {
                let proof = Self::get_proof_rec(key, &node.left)?;
                (proof, vec![], [node.hash.as_slice(), right].concat())
            }
            Ordering::Less => {
                let proof = Self::get_proof_rec(key, &node.right)?;
                (proof, [left, node.hash.as_slice()].concat(), vec![])
            }
            Ordering::Equal => {
                let proof = ExistenceProof {
                    key: node.key.as_ref().to_vec(),
                    value: node.value.as_ref().to_vec(),
                    leaf: Some(leaf_op()),
                    path: vec![],
                };
                (proof, left.to_vec(), right.to_vec())
            }
        };

        proof.path.push(InnerOp {
            hash: HashOp::Sha256.into(),
            prefix,
            suffix,
        });
        Some(proof)
    }

    fn balance_node(node_ref: &mut NodeRef<K, V>) {
        let Some(node) = node_ref.as_mut() else {
            return;
        };
        let balance_factor = node.balance_factor();
        if balance_factor >= 2 {
            if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
                Self::rotate_left(&mut node.left);
            }
            Self::rotate_right(node_ref);
        } else if balance_factor <= -2 {
            if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
                Self::rotate_right(&mut node.right);
            }
            Self::rotate_left(node_ref);
        }
    }

    /// Lifts the left child into `root`'s place. No-op without a left child.
    pub fn rotate_right(root: &mut NodeRef<K, V>) {
        let Some(mut node) = root.take() else {
            return;
        };
        let Some(mut left) = node.left.take() else {
            *root = Some(node);
            return;
        };
        node.left = left.right.take();
        node.update();
        left.right = Some(node);
        left.update();
        *root = Some(left);
    }

    /// Lifts the right child into `root`'s place. No-op without a right child.
    pub fn rotate_left(root: &mut NodeRef<K, V>) {
        let Some(mut node) = root.take() else {
            return;
        };
        let Some(mut right) = node.right.take() else {
            *root = Some(node);
            return;
        };
        node.right = right.left.take();
        node.update();
        right.left = Some(node);
        right.update();
        *root = Some(right);
    }

    /// All entries in key order.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::new();
        Self::entries_rec(&self.root, &mut entries);
        entries
    }

    fn entries_rec<'a>(node_ref: &'a NodeRef<K, V>, entries: &mut Vec<(&'a K, &'a V)>) {
        if let Some(node) = node_ref {
            Self::entries_rec(&node.left, entries);
            entries.push((&node.key, &node.value));
            Self::entries_rec(&node.right, entries);
        }
    }

    pub fn get_keys(&self) -> Vec<&K> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<K, V> Default for AvlTree<K, V>
where
    K: Ord + AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    fn default() -> Self {
        Self::new()
    }
}
