use crate::arena::NodeId;
use crate::binary_search_tree::tree::BinarySearchTree;
use crate::tree::TreeNode;
use std::fmt;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub key: T,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Option<NodeId>) -> Self {
        Node {
            key,
            parent,
            left: None,
            right: None,
        }
    }
}

/// A read-only handle to a node of a `BinarySearchTree<T>`.
pub struct BinarySearchNode<'a, T> {
    tree: &'a BinarySearchTree<T>,
    id: NodeId,
}

impl<'a, T> BinarySearchNode<'a, T> {
    pub(crate) fn new(tree: &'a BinarySearchTree<T>, id: NodeId) -> Self {
        BinarySearchNode { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.tree.arena[self.id]
    }

    fn to_handle(&self, link: Option<NodeId>) -> Option<Self> {
        link.map(|id| BinarySearchNode::new(self.tree, id))
    }
}

impl<'a, T> Clone for BinarySearchNode<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for BinarySearchNode<'a, T> {}

impl<'a, T> TreeNode<'a, T> for BinarySearchNode<'a, T> {
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
        &self.node().key
    }
}

impl<'a, T> fmt::Debug for BinarySearchNode<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("BinarySearchNode").field(self.value()).finish()
    }
}
