use crate::arena::{Arena, NodeId};
use crate::binary_search_tree::node::{BinarySearchNode, Node};
use crate::error::{Error, Result};
use crate::link::{self, Descent, Links};
use crate::traversal;
use crate::tree::SearchTree;
use crate::DEFAULT_CHUNK_SIZE;
use log::debug;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Keys are kept in search order, but no rebalancing takes place: the shape of the tree depends
/// on the insertion order and degrades into a list when keys arrive sorted.
///
/// # Examples
///
/// ```
/// use search_trees::{BinarySearchTree, Error, SearchTree};
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(5).unwrap();
/// tree.insert(2).unwrap();
///
/// assert_eq!(tree.insert(5), Err(Error::DuplicateKey));
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.count(&2), 1);
///
/// assert_eq!(tree.delete(&5), Ok(5));
/// assert_eq!(tree.delete(&5), Err(Error::NotFound));
/// ```
pub struct BinarySearchTree<T> {
    pub(crate) arena: Arena<Node<T>>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new, empty `BinarySearchTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `BinarySearchTree<T>` whose node storage grows by `chunk_size`
    /// nodes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        BinarySearchTree {
            arena: Arena::with_chunk_size(chunk_size),
            root: None,
            len: 0,
        }
    }

    /// Inserts a key into the tree as a new leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{BinarySearchTree, Error};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateKey));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        let parent = match link::descend(self, &key) {
            Descent::Found(_) => {
                debug!("rejected insert of a duplicate key");
                return Err(Error::DuplicateKey);
            },
            Descent::Vacant(parent) => parent,
        };

        let new_node = self.arena.allocate(Node::new(key, parent.map(|pair| pair.0)));
        match parent {
            None => self.root = Some(new_node),
            Some((node, Ordering::Less)) => self.arena[node].left = Some(new_node),
            Some((node, _)) => self.arena[node].right = Some(new_node),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes a key from the tree and returns it. When the removed node has two children, its
    /// in-order successor is moved into its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{BinarySearchTree, Error};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.delete(&1), Ok(1));
    /// assert_eq!(tree.delete(&1), Err(Error::NotFound));
    /// ```
    pub fn delete<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let node = match link::find(self, key) {
            Some(node) => node,
            None => {
                debug!("rejected delete of an absent key");
                return Err(Error::NotFound);
            },
        };

        match (self.arena[node].left, self.arena[node].right) {
            (None, right) => link::transplant(self, node, right),
            (left, None) => link::transplant(self, node, left),
            (Some(left), Some(right)) => {
                let successor = link::minimum(self, right);
                if self.arena[successor].parent != Some(node) {
                    let successor_right = self.arena[successor].right;
                    link::transplant(self, successor, successor_right);
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }
                link::transplant(self, node, Some(successor));
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
            },
        }

        self.len -= 1;
        Ok(self.arena.free(node).key)
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).unwrap();
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        link::find(self, key).is_some()
    }

    /// Returns the number of keys equal to `key`, which is either `0` or `1`.
    pub fn count<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if self.contains(key) {
            1
        } else {
            0
        }
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the root of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{BinarySearchTree, TreeNode};
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.root().is_none());
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(1));
    /// assert!(root.right().is_none());
    /// ```
    pub fn root(&self) -> Option<BinarySearchNode<'_, T>> {
        self.root.map(|id| BinarySearchNode::new(self, id))
    }

    /// Returns the minimum key of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.min(), None);
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[link::minimum(self, root)].key)
    }

    /// Returns the maximum key of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.max(), None);
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[link::maximum(self, root)].key)
    }

    /// Returns the keys of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// for key in &[5, 2, 10] {
    ///     tree.insert(*key).unwrap();
    /// }
    /// assert_eq!(tree.in_order(), vec![&2, &5, &10]);
    /// assert_eq!(tree.pre_order(), vec![&5, &2, &10]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        traversal::in_order(self.root())
    }

    /// Returns the keys of the tree with every node listed before its children. Inserting them in
    /// this order into an empty tree rebuilds the same shape.
    pub fn pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.root())
    }

    /// Returns the keys of the tree with every node listed after its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// for key in &[5, 2, 10, 8] {
    ///     tree.insert(*key).unwrap();
    /// }
    /// assert_eq!(tree.post_order(), vec![&2, &8, &10, &5]);
    /// assert_eq!(tree.level_order(), vec![&5, &2, &10, &8]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        traversal::post_order(self.root())
    }

    /// Returns the keys of the tree level by level, left to right.
    pub fn level_order(&self) -> Vec<&T> {
        traversal::level_order(self.root())
    }
}

impl<T> Links for BinarySearchTree<T> {
    type Key = T;
    type Link = Option<NodeId>;

    fn node(&self, link: Self::Link) -> Option<NodeId> {
        link
    }

    fn link(&self, node: NodeId) -> Self::Link {
        Some(node)
    }

    fn root_link(&self) -> Self::Link {
        self.root
    }

    fn set_root_link(&mut self, link: Self::Link) {
        self.root = link;
    }

    fn key(&self, node: NodeId) -> &T {
        &self.arena[node].key
    }

    fn parent(&self, node: NodeId) -> Self::Link {
        self.arena[node].parent
    }

    fn left(&self, node: NodeId) -> Self::Link {
        self.arena[node].left
    }

    fn right(&self, node: NodeId) -> Self::Link {
        self.arena[node].right
    }

    fn set_left(&mut self, node: NodeId, child: Self::Link) {
        self.arena[node].left = child;
    }

    fn set_right(&mut self, node: NodeId, child: Self::Link) {
        self.arena[node].right = child;
    }

    fn set_parent(&mut self, link: Self::Link, parent: Self::Link) {
        if let Some(node) = link {
            self.arena[node].parent = parent;
        }
    }
}

impl<T> SearchTree<T> for BinarySearchTree<T> {
    type Node<'a>
    = BinarySearchNode<'a, T>
    where
        Self: 'a;

    fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        BinarySearchTree::insert(self, key)
    }

    fn delete<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        BinarySearchTree::delete(self, key)
    }

    fn count<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        BinarySearchTree::count(self, key)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn root(&self) -> Option<Self::Node<'_>> {
        BinarySearchTree::root(self)
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for BinarySearchTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && traversal::equal(self.root(), other.root())
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}
