//! Capabilities shared by every tree in this crate.

use crate::error::Result;
use crate::red_black_tree::Color;
use std::borrow::Borrow;

/// The operations every ordered tree supports.
///
/// Keys are unique: `insert` rejects a key that is already present and `count` is therefore
/// always `0` or `1`.
pub trait SearchTree<T> {
    /// A read-only handle to a node of the tree.
    type Node<'a>: TreeNode<'a, T>
    where
        Self: 'a;

    /// Inserts a key into the tree. Fails with `Error::DuplicateKey` and leaves the tree unchanged
    /// if an equal key is already present.
    fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord;

    /// Removes a key from the tree and returns it. Fails with `Error::NotFound` and leaves the
    /// tree unchanged if the key is absent.
    fn delete<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized;

    /// Returns the number of stored keys equal to `key`.
    fn count<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized;

    /// Returns the number of keys in the tree.
    fn size(&self) -> usize;

    /// Returns the root of the tree, or `None` if the tree is empty.
    fn root(&self) -> Option<Self::Node<'_>>;
}

/// Read-only access to a node of a tree.
///
/// Handles borrow the tree they were obtained from, so the tree cannot be mutated while a handle
/// is alive. Missing relatives are reported as `None`.
pub trait TreeNode<'a, T>: Copy {
    /// Returns the parent of the node, or `None` for the root.
    fn parent(&self) -> Option<Self>;

    fn left(&self) -> Option<Self>;

    fn right(&self) -> Option<Self>;

    fn value(&self) -> &'a T;

    /// Returns the number of keys held by the node, which is always `1`.
    fn count(&self) -> usize {
        1
    }

    /// Returns the node's color capability if it has one.
    fn as_colored(&self) -> Option<&dyn Colored> {
        None
    }
}

/// Nodes that carry a color bit.
pub trait Colored {
    fn color(&self) -> Color;
}
