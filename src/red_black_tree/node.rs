use crate::arena::NodeId;
use crate::red_black_tree::tree::RedBlackTree;
use crate::tree::{Colored, TreeNode};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node an edge occupies. The balancing cases come in mirrored pairs, so
/// they are written once in terms of a side and its opposite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing a node of a red black tree. Missing edges point at the tree's sentinel,
/// which is the only node without a key.
pub struct Node<T> {
    pub key: Option<T>,
    pub color: Color,
    pub parent: NodeId,
    pub left: NodeId,
    pub right: NodeId,
}

impl<T> Node<T> {
    pub fn new(key: T, nil: NodeId) -> Self {
        Node {
            key: Some(key),
            color: Color::Red,
            parent: nil,
            left: nil,
            right: nil,
        }
    }

    /// Creates the black sentinel of a tree, given the id it is stored under. Its links point at
    /// itself until a fixup overwrites its parent.
    pub fn sentinel(id: NodeId) -> Self {
        Node {
            key: None,
            color: Color::Black,
            parent: id,
            left: id,
            right: id,
        }
    }

    pub fn key(&self) -> &T {
        self.key.as_ref().expect("Error: the sentinel does not hold a key.")
    }

    pub fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: NodeId) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// A read-only handle to a node of a `RedBlackTree<T>`.
pub struct RedBlackNode<'a, T> {
    tree: &'a RedBlackTree<T>,
    id: NodeId,
}

impl<'a, T> RedBlackNode<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>, id: NodeId) -> Self {
        debug_assert!(!tree.is_sentinel(id));
        RedBlackNode { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.tree.arena[self.id]
    }

    fn to_handle(&self, link: NodeId) -> Option<Self> {
        if self.tree.is_sentinel(link) {
            None
        } else {
            Some(RedBlackNode::new(self.tree, link))
        }
    }
}

impl<'a, T> Clone for RedBlackNode<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for RedBlackNode<'a, T> {}

impl<'a, T> TreeNode<'a, T> for RedBlackNode<'a, T> {
    fn parent(&self) -> Option<Self> {
        self.to_handle(self.node().parent)
    }

    fn left(&self) -> Option<Self> {
        self.to_handle(self.node().left)
    }

    fn right(&self) -> Option<Self> {
        self.to_handle(self.node().right)
    }

    fn value(&self) -> &'a T {
        self.node().key()
    }

    fn as_colored(&self) -> Option<&dyn Colored> {
        Some(self)
    }
}

impl<'a, T> Colored for RedBlackNode<'a, T> {
    fn color(&self) -> Color {
        self.node().color
    }
}

impl<'a, T> fmt::Debug for RedBlackNode<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("RedBlackNode")
            .field(self.value())
            .field(&self.color())
            .finish()
    }
}
