use core::cmp::max;
use core::mem;

use sha2::{Digest, Sha256};

use super::{Hash, LEAF_PREFIX};

pub type NodeRef<K, V> = Option<Box<AvlNode<K, V>>>;

/// A node in the AVL Tree.
///
/// `hash` commits to the node's own entry, `merkle_hash` to the whole subtree
/// rooted here.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AvlNode<K, V> {
    pub key: K,
    pub value: V,
    pub hash: Hash,
    pub merkle_hash: Hash,
    pub height: u32,
    pub left: NodeRef<K, V>,
    pub right: NodeRef<K, V>,
}

pub fn as_node_ref<K, V>(key: K, value: V) -> NodeRef<K, V>
where
    K: Ord + AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    Some(Box::new(AvlNode::new(key, value)))
}

impl<K, V> AvlNode<K, V>
where
    K: Ord + AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    fn new(key: K, value: V) -> Self {
        let hash = Self::local_hash(&key, &value);
        let mut node = AvlNode {
            key,
            value,
            hash,
            merkle_hash: [0; 32],
            height: 0,
            left: None,
            right: None,
        };
        node.update();
        node
    }

    /// Replaces the value and returns the previous one. Hashes are refreshed
    /// by the caller once the insertion unwinds.
    pub(crate) fn set_value(&mut self, value: V) -> V {
        self.hash = Self::local_hash(&self.key, &value);
        mem::replace(&mut self.value, value)
    }

    fn local_hash(key: &K, value: &V) -> Hash {
        let mut sha = Sha256::new();
        sha.update(LEAF_PREFIX);
        sha.update(key.as_ref());
        sha.update(value.as_ref());
        sha.finalize().into()
    }

    pub fn left_hash(&self) -> Option<&[u8]> {
        Some(self.left.as_ref()?.merkle_hash.as_slice())
    }

    pub fn right_hash(&self) -> Option<&[u8]> {
        Some(self.right.as_ref()?.merkle_hash.as_slice())
    }

    fn child_height(child: &NodeRef<K, V>) -> Option<u32> {
        child.as_ref().map(|node| node.height)
    }

    /// Refreshes height and merkle hash from the two children.
    pub fn update(&mut self) {
        let mut sha = Sha256::new();
        if let Some(left) = self.left_hash() {
            sha.update(left);
        }
        sha.update(self.hash);
        if let Some(right) = self.right_hash() {
            sha.update(right);
        }
        self.merkle_hash = sha.finalize().into();

        self.height = match (
            Self::child_height(&self.left),
            Self::child_height(&self.right),
        ) {
            (None, None) => 0,
            (Some(h), None) | (None, Some(h)) => h + 1,
            (Some(l), Some(r)) => max(l, r) + 1,
        };
    }

    /// Left height minus right height, where a missing child counts as -1.
    pub fn balance_factor(&self) -> i64 {
        let height = |child: &NodeRef<K, V>| Self::child_height(child).map_or(-1, i64::from);
        height(&self.left) - height(&self.right)
    }
}
