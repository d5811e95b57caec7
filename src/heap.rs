//! An array backed binary heap whose elements can be changed in place.
//!
//! The element at index `i` has its children at `2i + 1` and `2i + 2`. Every element compares
//! greater than or equal to its children under the heap's comparator, so the root is the largest
//! element. Wrapping the comparator in [`Rev`] flips that around, which is all a [`MinHeap`] is.
//!
//! # Examples
//!
//! ```
//! use algos::heap::{Heap, MinHeap};
//!
//! let mut heap = Heap::new(vec![5, 3, 8, 1, 2]);
//! assert_eq!(heap.values(), [8, 3, 5, 1, 2]);
//!
//! heap.push(10);
//! assert_eq!(heap.extract_root(), Ok(10));
//!
//! // Bump the element at index 3 up past everything else.
//! heap.change_value(3, 42).unwrap();
//! assert_eq!(heap.at(0), Ok(&42));
//!
//! let min_heap = MinHeap::new_min(vec![5, 3, 8, 1, 2]);
//! assert_eq!(min_heap.at(0), Ok(&1));
//! assert_eq!(min_heap.into_sorted_vec(), [8, 5, 3, 2, 1]);
//! ```

use std::cmp::Ordering;

use crate::compare::{Compare, Natural, Rev};
use crate::error::HeapError;

/// A binary max-heap under the comparator `C`.
#[derive(Clone, Debug)]
pub struct Heap<T, C = Natural> {
    heap: Vec<T>,
    comparator: C,
}

/// A binary heap whose root is its smallest element.
pub type MinHeap<T> = Heap<T, Rev<Natural>>;

impl<T: Ord> Heap<T> {
    /// Rearranges `values` into a max-heap.
    pub fn new(values: Vec<T>) -> Self {
        Self::with_comparator(values, Natural)
    }
}

impl<T: Ord> MinHeap<T> {
    /// Rearranges `values` into a min-heap.
    pub fn new_min(values: Vec<T>) -> Self {
        Self::with_comparator(values, Rev(Natural))
    }
}

impl<T, C> Heap<T, C>
where
    C: Compare<T>,
{
    /// Rearranges `values` into a heap ordered by `comparator`.
    pub fn with_comparator(values: Vec<T>, comparator: C) -> Self {
        let mut heap = Self {
            heap: values,
            comparator,
        };
        build(&mut heap.heap, &heap.comparator);
        heap
    }

    /// The backing array in heap order.
    pub fn values(&self) -> &[T] {
        &self.heap
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The element at `index` of the backing array.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, HeapError> {
        self.heap.get(index).ok_or(self.out_of_range(index))
    }

    /// The root, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Restores the heap order below `index`, assuming both subtrees of `index` are already heaps.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len`.
    pub fn heapify(&mut self, index: usize) -> Result<(), HeapError> {
        self.check(index)?;
        sift_down(&mut self.heap, index, &self.comparator);
        Ok(())
    }

    /// Moves the element at `index` towards the root until its parent is no smaller.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len`.
    pub fn heapify_up(&mut self, index: usize) -> Result<(), HeapError> {
        self.check(index)?;
        sift_up(&mut self.heap, index, &self.comparator);
        Ok(())
    }

    /// Adds `value` to the heap.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        let last = self.heap.len() - 1;
        sift_up(&mut self.heap, last, &self.comparator);
    }

    /// Removes and returns the root.
    ///
    /// # Errors
    ///
    /// [`HeapError::Empty`] if there is nothing to remove.
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        if self.heap.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let root = self.heap.pop().ok_or(HeapError::Empty)?;
        sift_down(&mut self.heap, 0, &self.comparator);

        tracing::trace!(len = self.heap.len(), "extracted heap root");
        Ok(root)
    }

    /// Replaces the element at `index` with `value` and moves it up or down to where it belongs.
    /// Nothing happens if `value` compares equal to the current element.
    ///
    /// # Errors
    ///
    /// [`HeapError::IndexOutOfRange`] if `index >= len`.
    pub fn change_value(&mut self, index: usize, value: T) -> Result<(), HeapError> {
        let current = self.at(index)?;

        match self.comparator.compare(&value, current) {
            Ordering::Equal => {}
            Ordering::Greater => {
                self.heap[index] = value;
                sift_up(&mut self.heap, index, &self.comparator);
            }
            Ordering::Less => {
                self.heap[index] = value;
                sift_down(&mut self.heap, index, &self.comparator);
            }
        }

        tracing::trace!(index, "changed heap value");
        Ok(())
    }

    /// Consumes the heap returning its elements sorted from smallest to largest under the heap's
    /// comparator. For a [`MinHeap`] that means largest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        sort_built(&mut self.heap, &self.comparator);
        self.heap
    }

    /// Consumes the heap returning the backing array as is.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }

    fn check(&self, index: usize) -> Result<(), HeapError> {
        if index < self.heap.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> HeapError {
        HeapError::IndexOutOfRange {
            index,
            len: self.heap.len(),
        }
    }
}

/// Turns `heap` into a heap from the bottom up. Everything past the middle is a leaf and so
/// already a heap.
pub(crate) fn build<T, C: Compare<T>>(heap: &mut [T], comparator: &C) {
    for index in (0..heap.len() / 2).rev() {
        sift_down(heap, index, comparator);
    }
}

/// Sorts a slice that is already a heap by repeatedly moving the root behind the shrinking heap.
pub(crate) fn sort_built<T, C: Compare<T>>(heap: &mut [T], comparator: &C) {
    for end in (1..heap.len()).rev() {
        heap.swap(0, end);
        sift_down(&mut heap[..end], 0, comparator);
    }
}

/// Sinks the element at `index` until neither child is greater. Only `heap[..]` is considered, so
/// callers shrink the heap by passing a shorter slice.
pub(crate) fn sift_down<T, C: Compare<T>>(heap: &mut [T], mut index: usize, comparator: &C) {
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut largest = index;

        if left < heap.len() && comparator.gt(&heap[left], &heap[largest]) {
            largest = left;
        }
        if right < heap.len() && comparator.gt(&heap[right], &heap[largest]) {
            largest = right;
        }
        if largest == index {
            return;
        }

        heap.swap(index, largest);
        index = largest;
    }
}

fn sift_up<T, C: Compare<T>>(heap: &mut [T], mut index: usize, comparator: &C) {
    while index > 0 {
        let parent = (index - 1) / 2;
        if !comparator.lt(&heap[parent], &heap[index]) {
            return;
        }

        heap.swap(parent, index);
        index = parent;
    }
}
