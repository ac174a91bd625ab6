//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Every missing edge of the tree points at a shared black sentinel node, so the balancing code
//! can read the color and parent of a missing child without special-casing it. The sentinel is
//! translated back to `None` before it reaches a `RedBlackNode`.

mod node;
mod tree;

pub use self::node::{Color, RedBlackNode};
pub use self::tree::RedBlackTree;
