//! Errors signaled by the fallible operations of this crate.

use thiserror::Error;

use crate::search_tree::NodeId;

/// Failures of [`SearchTree`][crate::search_tree::SearchTree] operations that take a handle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The handle doesn't refer to a node of this tree. Either the node was already deleted or
    /// the handle came from somewhere else.
    #[error("node {0:?} is not part of this tree")]
    NodeNotFound(NodeId),
}

/// Failures of [`Heap`][crate::heap::Heap] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An index outside of `[0, len)` was used.
    #[error("The index is out of range of the heap! (index {index}, len {len})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The heap's length at the time.
        len: usize,
    },
    /// The root of an empty heap was requested.
    #[error("Heap is empty!")]
    Empty,
}
