//! A self-balancing BST (specifically, an AVL tree). Each `Node` remembers the
//! height of the subtree rooted at it, and every insert and delete rebuilds
//! the path it walked on the way back up, rotating wherever the two subtrees
//! of a `Node` differ in height by more than one.
//!
//! Nodes have no parent pointers. Every recursive call takes ownership of a
//! subtree and returns the (possibly new) root of that subtree, which the
//! caller stores back into its child slot.
//!
//! # Examples
//!
//! ```
//! use avl_bst::balanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! // Sorted input would make a plain BST a linked list.
//! for key in 1..=5 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 3);
//!
//! // Inserting an existing key does nothing.
//! tree.insert(3);
//! assert_eq!(tree.len(), 5);
//!
//! tree.delete(&3);
//! assert!(!tree.search(&3));
//! assert_eq!(tree.in_order(), vec![&1, &2, &4, &5]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::SearchTree;

type Link<K> = Option<Box<Node<K>>>;

/// An AVL tree of keys. See the [module documentation](self) for details.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
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

    /// The number of levels in the tree. A tree with a single key has a
    /// height of 1 and an empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::balanced::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &3, &4, &5, &7, &8, &9]);
    /// ```
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
    /// Inserts `key` into the tree, rebalancing on the way back to the root.
    /// Inserting a key that is already present leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::balanced::Tree;
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
        let (root, inserted) = Node::insert(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
    }

    /// Returns whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::balanced::Tree;
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

    /// Deletes `key` from the tree, rebalancing every ancestor of the removed
    /// node. If the tree does not contain `key`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_bst::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    /// tree.delete(&1);
    ///
    /// assert!(!tree.search(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) {
        let (root, deleted) = Node::delete(self.root.take(), key);
        self.root = root;
        if deleted {
            self.len -= 1;
        }
    }
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

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Gets the height of a possibly empty subtree.
fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The height of the left subtree minus the height of the right subtree.
    /// Positive means left-heavy.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Rotate `self` to the left. This moves the right child up and `self`
    /// down to become its left child. Rotating a node with no right child
    /// leaves it as it is.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   z                       y
    ///  / \                     / \
    /// a   y     rotate ->     z   c
    ///    / \                 / \
    ///   b   c               a   b
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };

        self.right = new_root.left.take();
        self.fix_height();

        new_root.left = Some(self);
        new_root.fix_height();
        trace!(direction = "left", height = new_root.height, "rotated");
        new_root
    }

    /// Rotate `self` to the right. The mirror image of [`Node::rotate_left`].
    ///
    /// # Diagram
    ///
    /// ```text
    ///     y                   x
    ///    / \                 / \
    ///   x   c   rotate ->   a   y
    ///  / \                     / \
    /// a   b                   b   c
    /// ```
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };

        self.left = new_root.right.take();
        self.fix_height();

        new_root.right = Some(self);
        new_root.fix_height();
        trace!(direction = "right", height = new_root.height, "rotated");
        new_root
    }

    /// Refreshes the height of `self` and, if its subtrees differ in height by
    /// more than one, rotates to fix it. Returns the new root of this subtree.
    ///
    /// The tie on the taller child (`>= 0` and `<= 0`) picks the single
    /// rotation. That tie only happens after a delete: an insert that
    /// unbalances a node always leaves the taller child leaning one way, so
    /// after an insert this picks the same case as comparing the new key
    /// against the child's key would.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();
        let balance = self.balance_factor();

        let new_root = if balance > 1 {
            let left_factor = self.left.as_ref().map_or(0, |n| n.balance_factor());
            if left_factor >= 0 {
                trace!(case = "left-left", balance, "rebalancing");
                self.rotate_right()
            } else {
                trace!(case = "left-right", balance, "rebalancing");
                self.left = self.left.take().map(Node::rotate_left);
                self.rotate_right()
            }
        } else if balance < -1 {
            let right_factor = self.right.as_ref().map_or(0, |n| n.balance_factor());
            if right_factor <= 0 {
                trace!(case = "right-right", balance, "rebalancing");
                self.rotate_left()
            } else {
                trace!(case = "right-left", balance, "rebalancing");
                self.right = self.right.take().map(Node::rotate_right);
                self.rotate_left()
            }
        } else {
            self
        };

        if cfg!(debug_assertions) {
            let left_height = height(&new_root.left);
            let right_height = height(&new_root.right);
            assert_eq!(new_root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        new_root
    }
}

impl<K> Node<K>
where
    K: Ord,
{
    /// Inserts `key` into the subtree at `link` and returns the new root of
    /// that subtree along with whether a node was added.
    fn insert(link: Link<K>, key: K) -> (Box<Self>, bool) {
        let Some(mut node) = link else {
            return (Self::new_boxed(key), true);
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, inserted) = Self::insert(node.left.take(), key);
                node.left = Some(left);
                inserted
            }
            Ordering::Equal => return (node, false),
            Ordering::Greater => {
                let (right, inserted) = Self::insert(node.right.take(), key);
                node.right = Some(right);
                inserted
            }
        };

        (node.rebalance(), inserted)
    }

    /// Deletes `key` from the subtree at `link` and returns what is left of
    /// that subtree along with whether a node was removed.
    fn delete(link: Link<K>, key: &K) -> (Link<K>, bool) {
        let Some(mut node) = link else {
            return (None, false);
        };

        let deleted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, deleted) = Self::delete(node.left.take(), key);
                node.left = left;
                deleted
            }
            Ordering::Greater => {
                let (right, deleted) = Self::delete(node.right.take(), key);
                node.right = right;
                deleted
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                // Zero or one child: the child (if any) takes this node's place. It is
                // already balanced and its height is already correct.
                (None, child) | (child, None) => return (child, true),
                // Two children: the in-order successor (the smallest key on the right)
                // is removed from the right subtree and its key replaces ours.
                (Some(left), Some(right)) => {
                    trace!("replacing deleted key with its in-order successor");
                    let (right, successor) = Self::delete_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = right;
                    true
                }
            },
        };

        (Some(node.rebalance()), deleted)
    }

    /// Removes the leftmost node of this subtree, rebalancing every node on
    /// the way back up. Returns what is left of the subtree and the removed
    /// key.
    fn delete_min(mut self: Box<Self>) -> (Link<K>, K) {
        match self.left.take() {
            Some(left) => {
                let (left, min) = left.delete_min();
                self.left = left;
                (Some(self.rebalance()), min)
            }
            None => {
                let Node { key, right, .. } = *self;
                (right, key)
            }
        }
    }
}
