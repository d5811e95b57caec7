//! This crate exposes a handful of classical algorithms and data structures
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! The centrepiece is [`search_tree::SearchTree`], a Binary Search Tree whose
//! nodes keep a link to their parent. A BST stores its values in `Node`s and
//! maintains these invariants:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! Searching for values takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). This tree makes no
//! attempt to keep its height down, so inserting values in sorted order
//! produces a tree that is really a linked list.
//!
//! Thanks to the parent links, the next or previous value in order can be found
//! from any `Node` without going back to the root, and a `Node` can be deleted
//! given only a handle to it.
//!
//! ## The rest
//!
//! - [`heap`]: a binary heap with in-place key changes.
//! - [`sort`]: merge, quick, heap and counting sort.
//! - [`max_subarray`]: the maximum sum contiguous subarray.
//!
//! Everything that orders values takes a comparator from [`compare`] so the
//! same ordering can be reused across all of them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod heap;
pub mod max_subarray;
pub mod search_tree;
pub mod sort;

pub use error::{HeapError, TreeError};
