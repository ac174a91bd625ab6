//! Binary search tree without any rebalancing.

mod node;
mod tree;

pub use self::node::BinarySearchNode;
pub use self::tree::BinarySearchTree;
