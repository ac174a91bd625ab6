//! Read-only walks over a tree through its node handles.
//!
//! These functions only use the accessors of `TreeNode`, so they work for any tree in this crate
//! and never mutate it. All of them are iterative, which keeps degenerate (list-shaped) binary
//! search trees from overflowing the stack.

use crate::tree::TreeNode;
use std::collections::VecDeque;

/// Returns the keys of the subtree rooted at `root` in ascending order.
pub fn in_order<'a, T, N>(root: Option<N>) -> Vec<&'a T>
where
    N: TreeNode<'a, T>,
{
    let mut ret = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left();
        }
        match stack.pop() {
            Some(node) => {
                ret.push(node.value());
                curr = node.right();
            },
            None => return ret,
        }
    }
}

/// Returns the keys of the subtree rooted at `root`, each node before its children.
pub fn pre_order<'a, T, N>(root: Option<N>) -> Vec<&'a T>
where
    N: TreeNode<'a, T>,
{
    let mut ret = Vec::new();
    let mut stack: Vec<N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(node.value());
        stack.extend(node.right());
        stack.extend(node.left());
    }
    ret
}

/// Returns the keys of the subtree rooted at `root`, each node after its children.
pub fn post_order<'a, T, N>(root: Option<N>) -> Vec<&'a T>
where
    N: TreeNode<'a, T>,
{
    // root-right-left reversed is left-right-root
    let mut ret = Vec::new();
    let mut stack: Vec<N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(node.value());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    ret.reverse();
    ret
}

/// Returns the keys of the subtree rooted at `root` level by level, left to right.
pub fn level_order<'a, T, N>(root: Option<N>) -> Vec<&'a T>
where
    N: TreeNode<'a, T>,
{
    let mut ret = Vec::new();
    let mut queue: VecDeque<N> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        ret.push(node.value());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    ret
}

/// Returns `true` if both subtrees have the same shape and hold equal keys in every position.
/// Node colors are not compared.
pub fn equal<'a, 'b, T, M, N>(lhs: Option<M>, rhs: Option<N>) -> bool
where
    T: PartialEq + 'a + 'b,
    M: TreeNode<'a, T>,
    N: TreeNode<'b, T>,
{
    let mut stack = vec![(lhs, rhs)];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {},
            (Some(l), Some(r)) => {
                if l.value() != r.value() {
                    return false;
                }
                stack.push((l.left(), r.left()));
                stack.push((l.right(), r.right()));
            },
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{equal, in_order, level_order, post_order, pre_order};
    use crate::binary_search_tree::BinarySearchTree;
    use crate::red_black_tree::RedBlackTree;

    fn bst(keys: &[u32]) -> BinarySearchTree<u32> {
        let mut tree = BinarySearchTree::new();
        for key in keys {
            tree.insert(*key).unwrap();
        }
        tree
    }

    fn rbt(keys: &[u32]) -> RedBlackTree<u32> {
        let mut tree = RedBlackTree::new();
        for key in keys {
            tree.insert(*key).unwrap();
        }
        tree
    }

    #[test]
    fn test_empty() {
        let tree = bst(&[]);
        assert!(in_order(tree.root()).is_empty());
        assert!(pre_order(tree.root()).is_empty());
        assert!(post_order(tree.root()).is_empty());
        assert!(level_order(tree.root()).is_empty());
    }

    #[test]
    fn test_orders() {
        let tree = bst(&[4, 2, 12, 1, 8, 13, 6, 9, 5, 11]);
        assert_eq!(
            in_order(tree.root()),
            vec![&1, &2, &4, &5, &6, &8, &9, &11, &12, &13],
        );
        assert_eq!(
            pre_order(tree.root()),
            vec![&4, &2, &1, &12, &8, &6, &5, &9, &11, &13],
        );
        assert_eq!(
            post_order(tree.root()),
            vec![&1, &2, &5, &6, &11, &9, &8, &13, &12, &4],
        );
        assert_eq!(
            level_order(tree.root()),
            vec![&4, &2, &12, &1, &8, &13, &6, &9, &5, &11],
        );
    }

    #[test]
    fn test_equal() {
        assert!(equal(bst(&[]).root(), bst(&[]).root()));
        assert!(equal(bst(&[3, 2]).root(), bst(&[3, 2]).root()));
        assert!(!equal(bst(&[]).root(), bst(&[1]).root()));
        assert!(!equal(bst(&[3]).root(), bst(&[4]).root()));
        // same keys, different shape
        assert!(!equal(bst(&[3, 2]).root(), bst(&[2, 3]).root()));
        // mirror images
        assert!(!equal(bst(&[4, 3, 2]).root(), bst(&[2, 3, 4]).root()));
        assert!(!equal(bst(&[5, 3, 8, 2, 6]).root(), bst(&[5, 3, 8, 2]).root()));
    }

    #[test]
    fn test_equal_borrows_independently() {
        let lhs = rbt(&[1, 2, 3]);
        let lhs_root = lhs.root();
        let rhs_root = {
            let rhs = bst(&[2, 1, 3]);
            let same = equal(lhs_root, rhs.root());
            assert!(same);
            lhs_root
        };
        assert!(equal(lhs_root, rhs_root));
    }

    #[test]
    fn test_equal_across_kinds() {
        assert!(equal(bst(&[2, 1, 3]).root(), rbt(&[1, 2, 3]).root()));
        assert!(!equal(bst(&[1, 2, 3]).root(), rbt(&[1, 2, 3]).root()));
    }
}
