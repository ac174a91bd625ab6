use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::link::{self, Descent, Links};
use crate::red_black_tree::node::{Color, Node, RedBlackNode, Side};
use crate::traversal;
use crate::tree::SearchTree;
use crate::DEFAULT_CHUNK_SIZE;
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// and maintains the following invariants after every operation:
///
/// 1. The root is black.
/// 2. A red node has two black children, where missing children count as black.
/// 3. Every path from a node down to a missing child passes through the same number of black
///    nodes.
///
/// Together they bound the height of the tree by `2 * log2(n + 1)`, so insertion, deletion and
/// lookup take logarithmic time in the worst case.
///
/// # Examples
///
/// ```
/// use search_trees::{Color, Colored, Error, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// for key in 0..8 {
///     tree.insert(key).unwrap();
/// }
///
/// assert_eq!(tree.insert(3), Err(Error::DuplicateKey));
/// assert_eq!(tree.len(), 8);
/// assert_eq!(tree.root().map(|node| node.color()), Some(Color::Black));
///
/// assert_eq!(tree.delete(&3), Ok(3));
/// assert_eq!(tree.delete(&3), Err(Error::NotFound));
/// ```
pub struct RedBlackTree<T> {
    pub(crate) arena: Arena<Node<T>>,
    root: NodeId,
    nil: NodeId,
    len: usize,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackTree<T>` whose node storage grows by `chunk_size` nodes
    /// at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        let mut arena = Arena::with_chunk_size(chunk_size);
        let nil = arena.allocate_with(Node::sentinel);
        RedBlackTree {
            arena,
            root: nil,
            nil,
            len: 0,
        }
    }

    pub(crate) fn is_sentinel(&self, id: NodeId) -> bool {
        id == self.nil
    }

    fn color(&self, id: NodeId) -> Color {
        self.arena[id].color
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena[id].color = color;
    }

    fn parent_of(&self, id: NodeId) -> NodeId {
        self.arena[id].parent
    }

    fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.arena[id].child(side)
    }

    /// Returns which child of `parent` the node `id` is. The sentinel is reported as the left
    /// child when both children of `parent` are missing.
    fn side_of(&self, id: NodeId, parent: NodeId) -> Side {
        if self.arena[parent].left == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Rotates the subtree rooted at `id` towards `side`: the child on the opposite side takes the
    /// place of `id`, and `id` becomes its child on `side`. Rotating left at `x` promotes
    /// `x.right`; rotating right is the mirror image.
    fn rotate(&mut self, id: NodeId, side: Side) {
        trace!("rotating {:?} {:?}", id, side);
        let child = self.child(id, side.flip());
        debug_assert!(!self.is_sentinel(child));

        link::transplant(self, id, child);

        let grandchild = self.child(child, side);
        self.arena[id].set_child(side.flip(), grandchild);
        if !self.is_sentinel(grandchild) {
            self.arena[grandchild].parent = id;
        }

        self.arena[child].set_child(side, id);
        self.arena[id].parent = child;
    }

    /// Inserts a key into the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
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

        let new_node = self.arena.allocate(Node::new(key, self.nil));
        match parent {
            None => self.root = new_node,
            Some((node, ordering)) => {
                self.arena[new_node].parent = node;
                if ordering == Ordering::Less {
                    self.arena[node].left = new_node;
                } else {
                    self.arena[node].right = new_node;
                }
            },
        }

        self.insert_fixup(new_node);
        self.len += 1;
        Ok(())
    }

    // Restores the invariants after `node` was attached as a red leaf. The only possible
    // violation is a red node with a red parent, which is pushed towards the root.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.color(self.parent_of(node)) == Color::Red {
            // a red parent is never the root, so the grandparent is a real node
            let parent = self.parent_of(node);
            let grandparent = self.parent_of(parent);
            let side = self.side_of(parent, grandparent);
            let uncle = self.child(grandparent, side.flip());

            if self.color(uncle) == Color::Red {
                trace!("insert fixup: red uncle, recoloring {:?}", grandparent);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if node == self.child(parent, side.flip()) {
                trace!("insert fixup: inner child, rotating {:?}", parent);
                node = parent;
                self.rotate(node, side);
            }

            trace!("insert fixup: outer child, rotating {:?}", grandparent);
            let parent = self.parent_of(node);
            let grandparent = self.parent_of(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.flip());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Removes a key from the tree and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
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

        let Node { left, right, color, .. } = self.arena[node];
        // `removed_color` is the color that disappears from the position the spliced node
        // occupied, and `replacement` is whatever ends up in that position (possibly the
        // sentinel).
        let mut removed_color = color;
        let replacement;

        if self.is_sentinel(left) {
            replacement = right;
            link::transplant(self, node, right);
        } else if self.is_sentinel(right) {
            replacement = left;
            link::transplant(self, node, left);
        } else {
            let successor = link::minimum(self, right);
            removed_color = self.color(successor);
            replacement = self.arena[successor].right;

            if self.parent_of(successor) == node {
                self.arena[replacement].parent = successor;
            } else {
                link::transplant(self, successor, replacement);
                self.arena[successor].right = right;
                self.arena[right].parent = successor;
            }

            link::transplant(self, node, successor);
            self.arena[successor].left = left;
            self.arena[left].parent = successor;
            self.set_color(successor, color);
        }

        if removed_color == Color::Black {
            self.delete_fixup(replacement);
        }

        self.len -= 1;
        let Node { key, .. } = self.arena.free(node);
        Ok(key.expect("Error: the sentinel does not hold a key."))
    }

    // Restores the invariants after a black node was spliced out above `node`. The position of
    // `node` is short one black node on every path through it, which is either absorbed by
    // recoloring a red node black or pushed towards the root.
    fn delete_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.color(node) == Color::Black {
            let parent = self.parent_of(node);
            let side = self.side_of(node, parent);
            let mut sibling = self.child(parent, side.flip());

            if self.color(sibling) == Color::Red {
                trace!("delete fixup: red sibling, rotating {:?}", parent);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, side.flip());
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.flip());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("delete fixup: black nephews, recoloring {:?}", sibling);
                self.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if self.color(far) == Color::Black {
                trace!("delete fixup: red near nephew, rotating {:?}", sibling);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.flip());
                sibling = self.child(parent, side.flip());
            }

            trace!("delete fixup: red far nephew, rotating {:?}", parent);
            let parent_color = self.color(parent);
            let far = self.child(sibling, side.flip());
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            node = self.root;
        }

        self.set_color(node, Color::Black);
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
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
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.nil = self.arena.allocate_with(Node::sentinel);
        self.root = self.nil;
        self.len = 0;
    }

    /// Returns the root of the tree, or `None` if the tree is empty. The sentinel is never
    /// exposed through node handles.
    pub fn root(&self) -> Option<RedBlackNode<'_, T>> {
        if self.is_sentinel(self.root) {
            None
        } else {
            Some(RedBlackNode::new(self, self.root))
        }
    }

    /// Returns the minimum key of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.min(), None);
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.arena[link::minimum(self, self.root)].key())
    }

    /// Returns the maximum key of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.max(), None);
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(self.arena[link::maximum(self, self.root)].key())
    }

    /// Returns the number of black nodes on every path from the root down to a missing child,
    /// not counting the root itself. An empty tree has a black-height of zero.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while !self.is_sentinel(curr) {
            curr = self.arena[curr].left;
            if self.color(curr) == Color::Black {
                height += 1;
            }
        }
        height
    }

    /// Returns the keys of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in 1..=3 {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        traversal::in_order(self.root())
    }

    /// Returns the keys of the tree with every node listed before its children.
    pub fn pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.root())
    }

    /// Returns the keys of the tree with every node listed after its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in 1..=4 {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.post_order(), vec![&1, &4, &3, &2]);
    /// assert_eq!(tree.level_order(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        traversal::post_order(self.root())
    }

    /// Returns the keys of the tree level by level, left to right.
    pub fn level_order(&self) -> Vec<&T> {
        traversal::level_order(self.root())
    }
}

impl<T> Links for RedBlackTree<T> {
    type Key = T;
    type Link = NodeId;

    fn node(&self, link: Self::Link) -> Option<NodeId> {
        if self.is_sentinel(link) {
            None
        } else {
            Some(link)
        }
    }

    fn link(&self, node: NodeId) -> Self::Link {
        node
    }

    fn root_link(&self) -> Self::Link {
        self.root
    }

    fn set_root_link(&mut self, link: Self::Link) {
        self.root = link;
    }

    fn key(&self, node: NodeId) -> &T {
        self.arena[node].key()
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

    // the sentinel's parent is written too: the delete fixup reads it when the spliced position
    // is empty
    fn set_parent(&mut self, link: Self::Link, parent: Self::Link) {
        self.arena[link].parent = parent;
    }
}

impl<T> SearchTree<T> for RedBlackTree<T> {
    type Node<'a>
    = RedBlackNode<'a, T>
    where
        Self: 'a;

    fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        RedBlackTree::insert(self, key)
    }

    fn delete<V>(&mut self, key: &V) -> Result<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackTree::delete(self, key)
    }

    fn count<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackTree::count(self, key)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn root(&self) -> Option<Self::Node<'_>> {
        RedBlackTree::root(self)
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for RedBlackTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && traversal::equal(self.root(), other.root())
    }
}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::error::Error;
    use crate::red_black_tree::node::{Color, Node};
    use crate::tree::{Colored, TreeNode};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn build(keys: &[u32]) -> RedBlackTree<u32> {
        let mut tree = RedBlackTree::new();
        for key in keys {
            tree.insert(*key).unwrap();
        }
        tree
    }

    // Walks the raw node links, including the sentinel, and returns the black-height of the
    // subtree rooted at `id`.
    fn check_subtree(tree: &RedBlackTree<u32>, id: super::NodeId, parent: super::NodeId) -> usize {
        if tree.is_sentinel(id) {
            assert_eq!(tree.arena[id].color, Color::Black);
            return 0;
        }
        let key = *tree.arena[id].key();
        let Node {
            color,
            parent: actual_parent,
            left,
            right,
            ..
        } = tree.arena[id];
        assert_eq!(actual_parent, parent);
        if color == Color::Red {
            assert_eq!(tree.arena[left].color, Color::Black);
            assert_eq!(tree.arena[right].color, Color::Black);
        }
        if !tree.is_sentinel(left) {
            assert!(*tree.arena[left].key() < key);
        }
        if !tree.is_sentinel(right) {
            assert!(*tree.arena[right].key() > key);
        }
        let left_height = check_subtree(tree, left, id);
        let right_height = check_subtree(tree, right, id);
        assert_eq!(left_height, right_height);
        left_height + if color == Color::Black { 1 } else { 0 }
    }

    fn check_invariants(tree: &RedBlackTree<u32>) {
        assert_eq!(tree.color(tree.root), Color::Black);
        assert_eq!(tree.arena.len(), tree.len() + 1);
        assert_eq!(check_subtree(tree, tree.root, tree.nil), tree.black_height());
        let keys = tree.in_order();
        assert_eq!(keys.len(), tree.len());
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_len_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.black_height(), 0);
        check_invariants(&tree);
    }

    #[test]
    fn test_min_max_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut tree = RedBlackTree::new();
        assert_eq!(tree.insert(1), Ok(()));
        assert!(tree.contains(&1));
        assert_eq!(tree.count(&1), 1);
        assert_eq!(tree.count(&0), 0);
        let root = tree.root().unwrap();
        assert_eq!(root.color(), Color::Black);
        assert!(root.left().is_none());
        assert!(root.right().is_none());
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(tree.insert(3), Err(Error::DuplicateKey));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree, build(&[2, 1, 3]));
        check_invariants(&tree);
    }

    #[test]
    fn test_insert_red_uncle() {
        let tree = build(&[2, 1, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(root.value(), &2);
        assert_eq!(root.left().unwrap().color(), Color::Black);
        assert_eq!(root.right().unwrap().color(), Color::Black);
        let four = root.right().and_then(|node| node.right()).unwrap();
        assert_eq!(four.color(), Color::Red);
        check_invariants(&tree);
    }

    #[test]
    fn test_insert_straight_line() {
        let tree = build(&[1, 2, 3]);
        assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
        let root = tree.root().unwrap();
        assert_eq!(root.color(), Color::Black);
        assert_eq!(root.left().unwrap().color(), Color::Red);
        assert_eq!(root.right().unwrap().color(), Color::Red);
        check_invariants(&tree);
    }

    #[test]
    fn test_insert_zig_zag() {
        let tree = build(&[3, 1, 2]);
        assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
        let left = tree.root().and_then(|node| node.left()).unwrap();
        assert_eq!(left.parent().map(|node| *node.value()), Some(2));
        check_invariants(&tree);

        let tree = build(&[1, 3, 2]);
        assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
        check_invariants(&tree);
    }

    #[test]
    fn test_insert_sample() {
        let tree = build(&[5, 2, 10, 8, 12, 6, 9]);
        assert_eq!(tree.in_order(), vec![&2, &5, &6, &8, &9, &10, &12]);
        assert_eq!(tree.root().unwrap().color(), Color::Black);
        check_invariants(&tree);
    }

    #[test]
    fn test_delete_empty() {
        let mut tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.delete(&1), Err(Error::NotFound));
        check_invariants(&tree);
    }

    #[test]
    fn test_delete_absent() {
        let mut tree = build(&[5, 2, 10, 8, 12, 6, 9]);
        assert_eq!(tree.delete(&7), Err(Error::NotFound));
        assert_eq!(tree, build(&[5, 2, 10, 8, 12, 6, 9]));
    }

    #[test]
    fn test_delete_only_key() {
        let mut tree = build(&[1]);
        assert_eq!(tree.delete(&1), Ok(1));
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
        check_invariants(&tree);
    }

    #[test]
    fn test_delete_red_leaf() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(tree.delete(&3), Ok(3));
        assert_eq!(tree.pre_order(), vec![&2, &1]);
        check_invariants(&tree);
    }

    #[test]
    fn test_delete_black_leaf() {
        let mut tree = build(&[2, 1, 3, 4]);
        assert_eq!(tree.delete(&1), Ok(1));
        assert_eq!(tree.pre_order(), vec![&3, &2, &4]);
        check_invariants(&tree);
    }

    #[test]
    fn test_delete_root_with_two_children() {
        let mut tree = build(&[5, 2, 10, 8, 12, 6, 9]);
        let root = *tree.root().unwrap().value();
        assert_eq!(tree.delete(&root), Ok(root));
        check_invariants(&tree);
        assert!(!tree.contains(&root));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_delete_all_sequential() {
        let mut tree = build(&(0..256).collect::<Vec<u32>>());
        check_invariants(&tree);
        for key in 0..256 {
            assert_eq!(tree.delete(&key), Ok(key));
            check_invariants(&tree);
        }
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_delete_all_reversed() {
        let mut tree = build(&(0..256).collect::<Vec<u32>>());
        for key in (0..256).rev() {
            assert_eq!(tree.delete(&key), Ok(key));
            check_invariants(&tree);
        }
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_random_operations() {
        let mut rng = StdRng::seed_from_u64(69);
        let mut tree = RedBlackTree::new();
        let mut keys = Vec::new();
        for _ in 0..2_000 {
            let key = rng.gen_range(0..1_000);
            if rng.gen_bool(0.6) {
                match tree.insert(key) {
                    Ok(()) => keys.push(key),
                    Err(error) => {
                        assert_eq!(error, Error::DuplicateKey);
                        assert!(keys.contains(&key));
                    },
                }
            } else {
                match tree.delete(&key) {
                    Ok(removed) => {
                        assert_eq!(removed, key);
                        keys.retain(|other| *other != key);
                    },
                    Err(error) => {
                        assert_eq!(error, Error::NotFound);
                        assert!(!keys.contains(&key));
                    },
                }
            }
            check_invariants(&tree);
            assert_eq!(tree.len(), keys.len());
        }

        keys.shuffle(&mut rng);
        for key in keys {
            tree.delete(&key).unwrap();
            check_invariants(&tree);
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_height_is_logarithmic() {
        let tree = build(&(0..4_095).collect::<Vec<u32>>());
        let mut max_depth = 0;
        let mut stack = vec![(tree.root().unwrap(), 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        assert!(max_depth <= 24);
    }

    #[test]
    fn test_colored_capability() {
        let tree = build(&[2, 1, 3]);
        let root = tree.root().unwrap();
        assert_eq!(root.as_colored().map(|node| node.color()), Some(Color::Black));
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[3, 1, 5, 4]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut tree = build(&[3, 1, 5]);
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        check_invariants(&tree);
        tree.insert(2).unwrap();
        assert_eq!(tree.in_order(), vec![&2]);
        check_invariants(&tree);
    }

    #[test]
    fn test_debug() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
        assert_eq!(
            format!("{:?}", tree.root().unwrap()),
            "RedBlackNode(2, Black)",
        );
    }
}
