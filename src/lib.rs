//! This crate exposes a self-balancing Binary Search Tree that can describe its own shape, plus a
//! simpler companion tree for range-minimum queries.
//!
//! ## AVL trees
//!
//! A Binary Search Tree keeps, for every node, smaller values in its left subtree and larger
//! values in its right subtree. Searching takes `O(height)`, so the interesting part is keeping
//! the height down. An AVL tree does so by insisting that the two subtrees of every node differ in
//! height by at most one. Whenever an insert or delete breaks that rule, one or two _rotations_
//! near the offending node restore it. The result is a height of at most `1.44 * lg(N + 2)`.
//!
//! The trees with the fewest nodes for a given height are _Fibonacci trees_: a Fibonacci tree of
//! height `h` is a root over Fibonacci trees of heights `h - 1` and `h - 2`.
//! [`avl::Tree::is_fibonacci`] reports whether a tree is as sparse as an AVL tree can be.
//!
//! ## Ordering
//!
//! Trees are ordered by a [`order::Compare`] chosen when the tree is built rather than by the
//! values themselves, so the same `String`s can be kept by length in one tree and alphabetically
//! in another.
//!
//! ## Scripts
//!
//! [`script`] replays `stats`/`traverse`/`paths`/`insert`/`delete` command scripts against a tree
//! of words. The `dendrologist` binary wraps it.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod order;
pub mod rmq;
pub mod script;
mod util;


pub use avl::Tree as AugmentedAvlTree;
