//! A plain BST that never rebalances. Keys go wherever the comparisons lead
//! them, so inserting keys in sorted order builds a chain of `len` nodes.
//! This is the baseline the [`balanced`](crate::balanced) tree is measured
//! against.
//!
//! Every operation walks the tree with a loop instead of recursion because a
//! degenerate tree is as deep as it is long. The walk carries a cursor to
//! the child slot (`&mut Option<Box<Node>>`) it came through, which stands in
//! for a parent pointer.
//!
//! # Examples
//!
//! ```
//! use avl_bst::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! for key in 1..=5 {
//!     tree.insert(key);
//! }
//!
//! // Every node only has a right child.
//! assert_eq!(tree.height(), 5);
//!
//! tree.delete(&1);
//! assert!(!tree.search(&1));
//! assert_eq!(tree.height(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::SearchTree;

type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced BST of keys. See the [module documentation](self) for
/// details.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The default drop recurses once per level, which overflows the stack on
    // long chains.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree. Nodes don't store their heights so
    /// this visits every node, one level at a time.
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<K>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns every key in ascending order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    keys.push(&node.key);
                    current = node.right.as_deref();
                }
                None => return keys,
            }
        }
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `key` into the first empty slot the comparisons lead to.
    /// Inserting a key that is already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) {
        let slot = locate(&mut self.root, &key);
        if slot.is_none() {
            *slot = Some(Node::new_boxed(key));
            self.len += 1;
        }
    }

    /// Returns whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Deletes `key` from the tree. If the tree does not contain `key`,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K) {
        let slot = locate(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            return;
        };
        self.len -= 1;

        *slot = match (node.left.take(), node.right.take()) {
            // Zero or one child: the child (if any) moves up into the slot.
            (None, child) | (child, None) => child,
            // Two children: the in-order successor (the leftmost node on the
            // right) gives up its key and its slot goes to its right child.
            (Some(left), right) => {
                trace!("replacing deleted key with its in-order successor");
                node.left = Some(left);
                node.right = right;
                if let Some(successor) = take_min(&mut node.right) {
                    node.key = successor;
                }
                Some(node)
            }
        };
    }
}

/// Walks down from `slot` and returns the slot that holds `key`, or the
/// empty slot where `key` belongs if it isn't in the tree.
fn locate<'a, K: Ord>(mut slot: &'a mut Link<K>, key: &K) -> &'a mut Link<K> {
    loop {
        let ordering = slot.as_ref().map(|node| key.cmp(&node.key));
        slot = match (ordering, slot) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// Unlinks the leftmost node at or below `slot`, moving its right child into
/// its place, and returns its key.
fn take_min<K>(mut slot: &mut Link<K>) -> Option<K> {
    while slot.as_ref().map_or(false, |node| node.left.is_some()) {
        slot = match slot {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let min = slot.take()?;
    let Node { key, right, .. } = *min;
    *slot = right;
    Some(key)
}

impl<K> SearchTree<K> for Tree<K>
where
    K: Ord,
{
    fn insert(&mut self, key: K) {
        Tree::insert(self, key)
    }

    fn search(&self, key: &K) -> bool {
        Tree::search(self, key)
    }

    fn delete(&mut self, key: &K) {
        Tree::delete(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        Tree::height(self)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
