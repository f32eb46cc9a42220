//! A plain (unbalanced) BST of `(key, data)` pairs answering range-minimum queries: the smallest
//! data stored under any key in `[k1, k2]`.
//!
//! Every node caches the smallest data in its subtree. A query walks down to the first key inside
//! the range and from there only follows the two boundary paths. Any subtree hanging off a
//! boundary path on the inside lies wholly within the range and answers from its cache.
//!
//! # Examples
//!
//! ```
//! use dendrology::rmq::RangeMinTree;
//!
//! let mut tree = RangeMinTree::new();
//! for (key, data) in [(1, 40), (2, 10), (3, 30), (4, 20)] {
//!     tree.insert(key, data);
//! }
//!
//! assert_eq!(tree.range_minimum(&1, &4), Some(&10));
//! assert_eq!(tree.range_minimum(&3, &4), Some(&20));
//! assert_eq!(tree.range_minimum(&5, &9), None);
//!
//! // Re-inserting a key keeps the smaller data.
//! assert!(!tree.insert(3, 5));
//! assert_eq!(tree.range_minimum(&3, &4), Some(&5));
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::debug;

type Link<K, D> = Option<Box<Node<K, D>>>;

/// A Binary Search Tree over keys `K` carrying data `D`. Nothing rebalances it, so its height
/// depends on the insertion order. Sorted input makes it a list as long as the tree has keys, so
/// every walk over it is a loop rather than a recursion.
pub struct RangeMinTree<K, D> {
    root: Link<K, D>,
    len: usize,
}

struct Node<K, D> {
    key: K,
    data: D,
    left: Link<K, D>,
    right: Link<K, D>,

    /// The smallest `data` in the subtree rooted at this node.
    min: D,
}

impl<K, D> Default for RangeMinTree<K, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, D> Drop for RangeMinTree<K, D> {
    fn drop(&mut self) {
        // Detach children before each node goes so no drop recurses down a long list.
        let mut stack: Vec<Box<Node<K, D>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: fmt::Debug, D: fmt::Debug> fmt::Debug for RangeMinTree<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, D> RangeMinTree<K, D> {
    /// Generate a new, empty `RangeMinTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &D)> + '_ {
        let mut stack = Vec::new();
        let mut next = self.root.as_deref();
        std::iter::from_fn(move || {
            while let Some(node) = next {
                stack.push(node);
                next = node.left.as_deref();
            }
            let node = stack.pop()?;
            next = node.right.as_deref();
            Some((&node.key, &node.data))
        })
    }
}

impl<K: Ord, D: Ord + Clone> RangeMinTree<K, D> {
    /// Stores `data` under `key`. Returns `true` for a new key. For a key that is already present,
    /// the smaller of the old and new data is kept and `false` is returned.
    pub fn insert(&mut self, key: K, data: D) -> bool {
        // Insert never removes data, so every cache on the way down only has to absorb `data`.
        let mut link = &mut self.root;
        while let Some(node) = link {
            if data < node.min {
                node.min = data.clone();
            }
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    if data < node.data {
                        node.data = data;
                    }
                    debug!("rmq insert: existing key (size {})", self.len);
                    return false;
                }
            }
        }

        *link = Some(Node::new_boxed(key, data));
        self.len += 1;
        debug!("rmq insert: new key (size {})", self.len);
        true
    }

    /// The data stored under `key`.
    pub fn get(&self, key: &K) -> Option<&D> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.data),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// The smallest data stored under a key in `[k1, k2]`. `None` when no key falls in the range,
    /// including when `k1 > k2`.
    pub fn range_minimum(&self, k1: &K, k2: &K) -> Option<&D> {
        if k1 > k2 {
            return None;
        }

        // Prune until the highest node whose key is in range. Everything in range is below it.
        let mut link = &self.root;
        while let Some(node) = link {
            if node.key < *k1 {
                link = &node.right;
            } else if node.key > *k2 {
                link = &node.left;
            } else {
                return [
                    Some(&node.data),
                    Node::min_at_least(&node.left, k1),
                    Node::min_at_most(&node.right, k2),
                ]
                .into_iter()
                .flatten()
                .min();
            }
        }
        None
    }
}

impl<K: Ord, D: Ord + Clone> Node<K, D> {
    fn new_boxed(key: K, data: D) -> Box<Self> {
        Box::new(Self {
            key,
            min: data.clone(),
            data,
            left: None,
            right: None,
        })
    }

    /// The smallest data under keys `>= k1` in a subtree whose keys are all `<= k2`.
    fn min_at_least<'a>(mut link: &'a Link<K, D>, k1: &K) -> Option<&'a D> {
        let mut min = None;
        while let Some(node) = link {
            if node.key < *k1 {
                link = &node.right;
                continue;
            }

            // This node and its whole right subtree are in range.
            min = [min, Some(&node.data), node.right.as_ref().map(|right| &right.min)]
                .into_iter()
                .flatten()
                .min();
            link = &node.left;
        }
        min
    }

    /// The smallest data under keys `<= k2` in a subtree whose keys are all `>= k1`.
    fn min_at_most<'a>(mut link: &'a Link<K, D>, k2: &K) -> Option<&'a D> {
        let mut min = None;
        while let Some(node) = link {
            if node.key > *k2 {
                link = &node.left;
                continue;
            }

            // This node and its whole left subtree are in range.
            min = [min, Some(&node.data), node.left.as_ref().map(|left| &left.min)]
                .into_iter()
                .flatten()
                .min();
            link = &node.right;
        }
        min
    }
}
