//! Ordered sets backed by comparison-based search trees.
//!
//! Two trees are provided. `BinarySearchTree<T>` keeps keys in search order without rebalancing,
//! and `RedBlackTree<T>` recolors and rotates after every mutation to guarantee logarithmic height.
//! Both implement `SearchTree<T>` and expose their structure through read-only `TreeNode` handles.
//!
//! # Examples
//!
//! ```
//! use search_trees::{RedBlackTree, SearchTree, TreeNode};
//!
//! fn fill<S: SearchTree<u32>>(tree: &mut S) {
//!     for key in &[5, 2, 10, 8, 12, 6, 9] {
//!         tree.insert(*key).unwrap();
//!     }
//! }
//!
//! let mut tree = RedBlackTree::new();
//! fill(&mut tree);
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.in_order(), vec![&2, &5, &6, &8, &9, &10, &12]);
//! assert!(tree.root().unwrap().as_colored().is_some());
//! ```

mod arena;
mod error;
mod link;
mod serialization;

pub mod binary_search_tree;
pub mod red_black_tree;
pub mod traversal;
pub mod tree;

pub use crate::binary_search_tree::{BinarySearchNode, BinarySearchTree};
pub use crate::error::{Error, Result};
pub use crate::red_black_tree::{Color, RedBlackNode, RedBlackTree};
pub use crate::tree::{Colored, SearchTree, TreeNode};

/// The number of nodes a tree allocates at a time unless configured otherwise.
pub const DEFAULT_CHUNK_SIZE: usize = 256;
