//! This crate exposes two Binary Search Trees (BSTs) that share one contract
//! so they can be measured against each other.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores keys in `Node`s. Each `Node` has at most two
//! children and the tree keeps two invariants:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Inserting a key that is already present does nothing and deleting a key
//! that isn't present does nothing, so neither tree has an error type.
//!
//! Every operation costs `O(height)`. The [`unbalanced`] tree never
//! restructures itself, so inserting keys in sorted order turns it into a
//! linked list with `height == len`. The [`balanced`] tree is an AVL tree:
//! after every insert and delete it rotates nodes until the heights of the two
//! subtrees of every `Node` differ by at most one, which bounds the height by
//! roughly `1.44 * lg(N)`.
//!
//! # Examples
//!
//! ```
//! use avl_bst::{BalancedTree, SearchTree, UnbalancedTree};
//!
//! fn fill<T: SearchTree<u32>>(tree: &mut T) {
//!     for key in 1..=7 {
//!         tree.insert(key);
//!     }
//! }
//!
//! let mut unbalanced = UnbalancedTree::new();
//! let mut balanced = BalancedTree::new();
//! fill(&mut unbalanced);
//! fill(&mut balanced);
//!
//! assert_eq!(unbalanced.height(), 7);
//! assert_eq!(balanced.height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod unbalanced;


pub use balanced::Tree as BalancedTree;
pub use unbalanced::Tree as UnbalancedTree;

/// The operations both trees support. Anything measuring the trees (benches,
/// property tests) should go through this trait rather than the concrete
/// types so the trees stay closed boxes.
pub trait SearchTree<K: Ord> {
    /// Adds `key` to the tree. Inserting a key that is already present leaves
    /// the tree unchanged.
    fn insert(&mut self, key: K);

    /// Returns whether `key` is stored in the tree.
    fn search(&self, key: &K) -> bool;

    /// Removes `key` from the tree. Deleting a missing key does nothing.
    fn delete(&mut self, key: &K);

    /// The number of keys in the tree.
    fn len(&self) -> usize;

    /// The number of nodes on the longest path from the root to a leaf. An
    /// empty tree has height 0.
    fn height(&self) -> usize;

    /// Whether the tree holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
