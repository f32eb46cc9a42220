//! A self-balancing (AVL) tree of values, ordered by a [`Compare`] chosen at construction and
//! augmented with queries about its own shape.
//!
//! Every `insert` and `remove` restores the AVL invariant on its way back up from the modified
//! leaf, so the height of the tree stays within `1.44 * lg(N + 2)`. Nodes don't know their
//! parents. Each recursive call hands back the (possibly rotated) root of the subtree it was given.
//!
//! # Examples
//!
//! ```
//! use dendrology::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Ascending inserts would make a plain BST into a linked list.
//! for x in 1..=7 {
//!     assert!(tree.insert(x));
//! }
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.full_count(), 3);
//!
//! // Inserting an equal value is a no-op.
//! assert!(!tree.insert(4));
//! assert_eq!(tree.size(), 7);
//!
//! assert!(tree.remove(&4));
//! assert!(!tree.remove(&4));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::order::{Compare, Natural};
use crate::util::fibonacci_tree_size;

type Link<T> = Option<Box<Node<T>>>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of values ordered by `C`.
#[derive(Clone)]
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Which way an insert went from a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Descent {
    /// The value became this node.
    Here,
    Left,
    Right,
}

/// The four ways of restoring balance at a node whose children differ in height by two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    /// Left-left: lift the left child.
    Right,
    /// Right-right: lift the right child.
    Left,
    /// Left-right: lift the left child's right child.
    LeftRight,
    /// Right-left: lift the right child's left child.
    RightLeft,
}

/// Why a tree failed [`Tree::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantViolation {
    /// An in-order walk found two values that aren't strictly ascending.
    #[error("values out of order at in-order position {0}")]
    Unordered(usize),
    /// A node's subtrees differ in height by more than one.
    #[error("node at in-order position {position} has balance factor {balance}")]
    Unbalanced {
        /// In-order position of the offending node.
        position: usize,
        /// `height(left) - height(right)` of that node.
        balance: isize,
    },
    /// A node's stored height doesn't match its children.
    #[error("node at in-order position {position} stores height {stored}, expected {actual}")]
    HeightMismatch {
        /// In-order position of the offending node.
        position: usize,
        /// The height the node records.
        stored: usize,
        /// The height computed from its children.
        actual: usize,
    },
    /// The tracked size doesn't match the number of reachable nodes.
    #[error("tree records {recorded} values but holds {actual}")]
    SizeMismatch {
        /// The size the tree records.
        recorded: usize,
        /// The number of reachable nodes.
        actual: usize,
    },
}

/// Summary of a tree's shape. Its `Display` form is one line, e.g.
/// `size = 4, height = 3, #full-nodes = 1, fibonacci? = true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Number of values in the tree.
    pub size: usize,
    /// Number of levels in the tree.
    pub height: usize,
    /// Number of nodes with two children.
    pub full_count: usize,
    /// Whether the tree is a Fibonacci tree of its height.
    pub is_fibonacci: bool,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size = {}, height = {}, #full-nodes = {}, fibonacci? = {}",
            self.size, self.height, self.full_count, self.is_fibonacci
        )
    }
}

impl<T: Ord> Tree<T> {
    /// Generate a new, empty `Tree` ordered by `T`'s own `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> Tree<T, C> {
    /// Generate a new, empty `Tree` ordered by `cmp`. The order is fixed for the life of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 2, 3]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// The order this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The number of values in the tree.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// The number of levels in the tree. An empty tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The value at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|root| &root.value)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// The number of nodes with exactly two children.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
    ///
    /// // 2 has both children, 3 only has 4.
    /// assert_eq!(tree.full_count(), 1);
    /// ```
    pub fn full_count(&self) -> usize {
        fn count<T>(link: &Link<T>) -> usize {
            match link.as_deref() {
                None => 0,
                Some(node) => {
                    let full = usize::from(node.left.is_some() && node.right.is_some());
                    full + count(&node.left) + count(&node.right)
                }
            }
        }

        count(&self.root)
    }

    /// Whether the tree is a Fibonacci tree: an AVL tree holding the fewest nodes possible for its
    /// height. This is about the shape of the tree, not the values in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend([2, 1, 3]);
    /// // Height 2 needs only two nodes.
    /// assert!(!tree.is_fibonacci());
    ///
    /// tree.insert(4);
    /// // Height 3 needs only four nodes.
    /// assert!(tree.is_fibonacci());
    /// ```
    pub fn is_fibonacci(&self) -> bool {
        self.size() == fibonacci_tree_size(self.height())
    }

    /// Size, height, full node count and Fibonacci-ness in one go.
    pub fn stats(&self) -> Stats {
        Stats {
            size: self.size(),
            height: self.height(),
            full_count: self.full_count(),
            is_fibonacci: self.is_fibonacci(),
        }
    }

    /// Every path from the root down to a leaf, leaves from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.gen_paths(), [vec![&2, &1], vec![&2, &3, &4]]);
    /// ```
    pub fn gen_paths(&self) -> Vec<Vec<&T>> {
        fn walk<'a, T>(node: &'a Node<T>, path: &mut Vec<&'a T>, paths: &mut Vec<Vec<&'a T>>) {
            path.push(&node.value);
            if node.left.is_none() && node.right.is_none() {
                paths.push(path.clone());
            }
            for child in [&node.left, &node.right].into_iter().flatten() {
                walk(child, path, paths);
            }
            path.pop();
        }

        let mut paths = Vec::new();
        if let Some(root) = self.root.as_deref() {
            walk(root, &mut Vec::with_capacity(self.height()), &mut paths);
        }
        paths
    }

    /// Calls `visitor` on every value in ascending order.
    pub fn traverse<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::with_capacity(self.height()),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// The values in pre-order: each node before its left subtree, then its right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                out.push(&node.value);
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// The values in post-order: each node after both of its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, out);
                walk(&node.right, out);
                out.push(&node.value);
            }
        }

        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut out);
        out
    }

    /// The values level by level from the root, left to right within a level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }
}

impl<T, C: Compare<T>> Tree<T, C> {
    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, if the tree
    /// already holds a value that compares equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(20));
    /// assert!(!tree.insert(10));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, descent) = Node::insert(self.root.take(), value, &self.cmp);
        self.root = Some(root);

        let inserted = descent.is_some();
        if inserted {
            self.len += 1;
        }
        debug!(
            "insert: {} (size {}, height {})",
            if inserted { "added" } else { "already present" },
            self.len,
            self.height()
        );
        inserted
    }

    /// Removes the value comparing equal to `value`. Returns `false` if there was none.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = match self.root.take() {
            None => false,
            Some(root) => {
                let (root, removed) = Node::remove(root, value, &self.cmp);
                self.root = root;
                removed
            }
        };

        if removed {
            self.len -= 1;
        }
        debug!(
            "remove: {} (size {}, height {})",
            if removed { "removed" } else { "not found" },
            self.len,
            self.height()
        );
        removed
    }

    /// Whether the tree holds a value comparing equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match self.cmp.compare(value, &node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// The values `v` with `k1 <= v <= k2` under the tree's comparator, in ascending order. A
    /// subtree is only entered when the range can reach into it, so the walk touches the two
    /// boundary paths and the values it reports. Empty when `k1` comes after `k2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dendrology::avl::Tree;
    ///
    /// let tree: Tree<_> = [10, 20, 30, 40, 50].into_iter().collect();
    ///
    /// assert_eq!(tree.range_report(&15, &40), [&20, &30, &40]);
    /// assert!(tree.range_report(&40, &15).is_empty());
    /// ```
    pub fn range_report(&self, k1: &T, k2: &T) -> Vec<&T> {
        fn walk<'a, T, C: Compare<T>>(
            link: &'a Link<T>,
            k1: &T,
            k2: &T,
            cmp: &C,
            out: &mut Vec<&'a T>,
        ) {
            let node = match link {
                Some(node) => node,
                None => return,
            };
            let from_low = cmp.compare(k1, &node.value);
            let to_high = cmp.compare(&node.value, k2);

            if from_low == Ordering::Less {
                walk(&node.left, k1, k2, cmp, out);
            }
            if from_low != Ordering::Greater && to_high != Ordering::Greater {
                out.push(&node.value);
            }
            if to_high == Ordering::Less {
                walk(&node.right, k1, k2, cmp, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.root, k1, k2, &self.cmp, &mut out);
        trace!("range report: {} values", out.len());
        out
    }

    /// Walks the whole tree checking the ordering, the balance of every node, every stored height
    /// and the recorded size. Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut previous: Option<&T> = None;
        let mut position = 0;
        self.check_node(&self.root, &mut previous, &mut position)?;

        if position != self.len {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len,
                actual: position,
            });
        }
        Ok(())
    }

    /// In-order walk for [`Self::check_invariants`]. Returns the recomputed height of `link`.
    fn check_node<'a>(
        &self,
        link: &'a Link<T>,
        previous: &mut Option<&'a T>,
        position: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let node = match link {
            None => return Ok(0),
            Some(node) => node,
        };

        let left_height = self.check_node(&node.left, previous, position)?;

        let here = *position;
        if let Some(previous) = *previous {
            if self.cmp.compare(previous, &node.value) != Ordering::Less {
                return Err(InvariantViolation::Unordered(here));
            }
        }
        *previous = Some(&node.value);
        *position += 1;

        let right_height = self.check_node(&node.right, previous, position)?;

        let actual = left_height.max(right_height) + 1;
        if node.height != actual {
            return Err(InvariantViolation::HeightMismatch {
                position: here,
                stored: node.height,
                actual,
            });
        }
        let balance = left_height as isize - right_height as isize;
        if balance.abs() > 1 {
            return Err(InvariantViolation::Unbalanced {
                position: here,
                balance,
            });
        }
        Ok(actual)
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// `height(left) - height(right)`. Positive means left-heavy.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Inserts `value` below `link`, returning the new root of the subtree and the way the insert
    /// went from that root. The direction is `None` when an equal value was already present, in
    /// which case nothing below `link` changed.
    fn insert<C>(link: Link<T>, value: T, cmp: &C) -> (Box<Self>, Option<Descent>)
    where
        C: Compare<T>,
    {
        let mut node = match link {
            None => return (Self::new_boxed(value), Some(Descent::Here)),
            Some(node) => node,
        };

        let (descent, below) = match cmp.compare(&value, &node.value) {
            Ordering::Less => {
                let (left, below) = Self::insert(node.left.take(), value, cmp);
                node.left = Some(left);
                (Descent::Left, below)
            }
            Ordering::Equal => return (node, None),
            Ordering::Greater => {
                let (right, below) = Self::insert(node.right.take(), value, cmp);
                node.right = Some(right);
                (Descent::Right, below)
            }
        };
        let below = match below {
            None => return (node, None),
            Some(below) => below,
        };

        node.fix_height();
        let node = match node.rotation_after_insert(below) {
            None => node,
            Some(rotation) => node.rotate(rotation),
        };
        (node, Some(descent))
    }

    /// Picks the rebalancing case from the balance factor and the side of the heavy child the new
    /// value went down.
    fn rotation_after_insert(&self, below: Descent) -> Option<Rotation> {
        match (self.balance_factor(), below) {
            (2, Descent::Left) => Some(Rotation::Right),
            (2, _) => Some(Rotation::LeftRight),
            (-2, Descent::Right) => Some(Rotation::Left),
            (-2, _) => Some(Rotation::RightLeft),
            _ => None,
        }
    }

    /// Removes the value equal to `value` from the subtree rooted at `self`. Returns the new root
    /// of the subtree and whether anything was removed.
    fn remove<C>(mut self: Box<Self>, value: &T, cmp: &C) -> (Link<T>, bool)
    where
        C: Compare<T>,
    {
        match cmp.compare(value, &self.value) {
            Ordering::Less => match self.left.take() {
                None => return (Some(self), false),
                Some(left) => {
                    let (left, removed) = left.remove(value, cmp);
                    self.left = left;
                    if !removed {
                        return (Some(self), false);
                    }
                }
            },
            Ordering::Greater => match self.right.take() {
                None => return (Some(self), false),
                Some(right) => {
                    let (right, removed) = right.remove(value, cmp);
                    self.right = right;
                    if !removed {
                        return (Some(self), false);
                    }
                }
            },
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, None) => return (None, true),
                (Some(only), None) | (None, Some(only)) => return (Some(only), true),

                // With two children, this node takes the value of its in-order successor (the
                // smallest value on its right) and that successor is removed instead.
                (Some(left), Some(right)) => {
                    let (successor, right) = right.remove_min();
                    self.value = successor;
                    self.left = Some(left);
                    self.right = right;
                }
            },
        }

        (Some(self.rebalance()), true)
    }

    /// Detaches the smallest value of this subtree, returning it and what's left of the subtree.
    fn remove_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.take() {
            None => {
                let Node { value, right, .. } = *self;
                (value, right)
            }
            Some(left) => {
                let (min, left) = left.remove_min();
                self.left = left;
                (min, Some(self.rebalance()))
            }
        }
    }

    /// Fixes the height of `self` after one of its subtrees shrank and rotates if it's now out of
    /// balance. Unlike insertion, the heavy child may itself be balanced, which a single rotation
    /// handles.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();
        let rotation = match self.balance_factor() {
            2 if self.left.as_ref().map_or(0, |l| l.balance_factor()) >= 0 => Rotation::Right,
            2 => Rotation::LeftRight,
            -2 if self.right.as_ref().map_or(0, |r| r.balance_factor()) <= 0 => Rotation::Left,
            -2 => Rotation::RightLeft,
            _ => return self,
        };
        self.rotate(rotation)
    }

    fn rotate(self: Box<Self>, rotation: Rotation) -> Box<Self> {
        trace!("rotating {:?} at height {}", rotation, self.height);
        let node = match rotation {
            Rotation::Right => self.rotate_right(),
            Rotation::Left => self.rotate_left(),
            Rotation::LeftRight => self.rotate_left_right(),
            Rotation::RightLeft => self.rotate_right_left(),
        };

        // In tests, after balancing, assert that we've restored the AVL invariant.
        if cfg!(test) {
            assert!(node.balance_factor().abs() <= 1);
        }
        #[cfg(test)]
        tests::ROTATIONS.with(|log| log.borrow_mut().push(rotation));
        node
    }

    /// Rotates the left child up to become the root. The left child's right subtree becomes the
    /// old root's left subtree.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.left.take() {
            // Only called when the left subtree is the taller one.
            None => return self,
            Some(left) => left,
        };

        self.left = new_root.right.take();
        self.fix_height();
        new_root.right = Some(self);
        new_root.fix_height();
        new_root
    }

    /// Rotates the right child up to become the root. The right child's left subtree becomes the
    /// old root's right subtree.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.right.take() {
            // Only called when the right subtree is the taller one.
            None => return self,
            Some(right) => right,
        };

        self.right = new_root.left.take();
        self.fix_height();
        new_root.left = Some(self);
        new_root.fix_height();
        new_root
    }

    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.left = self.left.take().map(Self::rotate_left);
        self.rotate_right()
    }

    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.right = self.right.take().map(Self::rotate_right);
        self.rotate_left()
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// An in-order iterator over the values of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value hasn't been yielded yet but whose left subtree is done (or queued above).
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> Extend<T> for Tree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
