//! Structural primitives shared by the tree engines.
//!
//! Both engines store their nodes in an `Arena` and link them by `NodeId`, but they disagree on
//! how a missing edge is spelled: the binary search tree uses `Option<NodeId>` while the red black
//! tree points every missing edge at its sentinel. `Links` abstracts over that choice so that
//! descent and transplant are written once.

use crate::arena::NodeId;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub trait Links {
    type Key;

    /// The representation of an edge that may be missing.
    type Link: Copy + PartialEq;

    /// Resolves a link to the node it points at, or `None` if the link is missing.
    fn node(&self, link: Self::Link) -> Option<NodeId>;

    /// Wraps a real node into a link.
    fn link(&self, node: NodeId) -> Self::Link;

    fn root_link(&self) -> Self::Link;

    fn set_root_link(&mut self, link: Self::Link);

    fn key(&self, node: NodeId) -> &Self::Key;

    fn parent(&self, node: NodeId) -> Self::Link;

    fn left(&self, node: NodeId) -> Self::Link;

    fn right(&self, node: NodeId) -> Self::Link;

    fn set_left(&mut self, node: NodeId, child: Self::Link);

    fn set_right(&mut self, node: NodeId, child: Self::Link);

    /// Sets the parent of whatever `link` points at. Engines without a sentinel ignore missing
    /// links.
    fn set_parent(&mut self, link: Self::Link, parent: Self::Link);
}

/// The outcome of walking the search path for a key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Descent {
    /// A node holding an equal key.
    Found(NodeId),
    /// The key is absent. Holds the last node visited and which side of it the key belongs on,
    /// or `None` if the tree is empty.
    Vacant(Option<(NodeId, Ordering)>),
}

pub fn descend<V, S>(tree: &S, key: &V) -> Descent
where
    S: Links + ?Sized,
    S::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut last = None;
    let mut curr = tree.node(tree.root_link());
    while let Some(node) = curr {
        let ordering = key.cmp(tree.key(node).borrow());
        curr = match ordering {
            Ordering::Less => tree.node(tree.left(node)),
            Ordering::Greater => tree.node(tree.right(node)),
            Ordering::Equal => return Descent::Found(node),
        };
        last = Some((node, ordering));
    }
    Descent::Vacant(last)
}

pub fn find<V, S>(tree: &S, key: &V) -> Option<NodeId>
where
    S: Links + ?Sized,
    S::Key: Borrow<V>,
    V: Ord + ?Sized,
{
    match descend(tree, key) {
        Descent::Found(node) => Some(node),
        Descent::Vacant(_) => None,
    }
}

/// Returns the node with the minimum key in the subtree rooted at `node`.
pub fn minimum<S>(tree: &S, mut node: NodeId) -> NodeId
where
    S: Links + ?Sized,
{
    while let Some(left) = tree.node(tree.left(node)) {
        node = left;
    }
    node
}

/// Returns the node with the maximum key in the subtree rooted at `node`.
pub fn maximum<S>(tree: &S, mut node: NodeId) -> NodeId
where
    S: Links + ?Sized,
{
    while let Some(right) = tree.node(tree.right(node)) {
        node = right;
    }
    node
}

/// Replaces the subtree rooted at `u` with the subtree `v` points at. Only the child slot of `u`'s
/// parent and the parent of `v` are rewritten; `u` keeps its own links.
pub fn transplant<S>(tree: &mut S, u: NodeId, v: S::Link)
where
    S: Links + ?Sized,
{
    let parent = tree.parent(u);
    match tree.node(parent) {
        None => tree.set_root_link(v),
        Some(parent_node) => {
            if tree.left(parent_node) == tree.link(u) {
                tree.set_left(parent_node, v);
            } else {
                tree.set_right(parent_node, v);
            }
        },
    }
    tree.set_parent(v, parent);
}
