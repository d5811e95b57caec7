//! Classic sorting algorithms.
//!
//! The comparison sorts come in two flavours: a plain one ordering by [`Ord`] and a `_by` one that
//! takes any [`Compare`] implementation, the same comparators the search tree and the heap use.
//!
//! # Examples
//!
//! ```
//! use algos::sort::{counting_sort, merge_sort_by, quick_sort};
//!
//! let mut xs = [12, 3, 7, 9, 14, 6, 11];
//! quick_sort(&mut xs);
//! assert_eq!(xs, [3, 6, 7, 9, 11, 12, 14]);
//!
//! let mut words = vec!["gamma", "alpha", "beta", "omega"];
//! merge_sort_by(&mut words, &|a: &&str, b: &&str| a.cmp(b));
//! assert_eq!(words, ["alpha", "beta", "gamma", "omega"]);
//!
//! assert_eq!(counting_sort(&[3, 1, 2, 1]), [1, 1, 2, 3]);
//! ```

use std::cmp::Ordering;

use crate::compare::{Compare, Natural};
use crate::heap;

/// Sorts `values` with a top-down merge sort. Stable.
pub fn merge_sort<T: Ord>(values: &mut Vec<T>) {
    merge_sort_by(values, &Natural)
}

/// Sorts `values` under `comparator` with a top-down merge sort. Stable: of two elements that
/// compare equal, the one that came first stays first.
pub fn merge_sort_by<T, C: Compare<T>>(values: &mut Vec<T>, comparator: &C) {
    if values.len() < 2 {
        return;
    }

    let mut right = values.split_off(values.len() / 2);
    merge_sort_by(values, comparator);
    merge_sort_by(&mut right, comparator);

    let left = std::mem::take(values);
    *values = merge(left, right, comparator);
}

fn merge<T, C: Compare<T>>(left: Vec<T>, right: Vec<T>, comparator: &C) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => !comparator.gt(l, r),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}

/// Sorts `values` in place with quick sort. Not stable.
pub fn quick_sort<T: Ord>(values: &mut [T]) {
    quick_sort_by(values, &Natural)
}

/// Sorts `values` in place under `comparator` with quick sort. Not stable.
///
/// The pivot is the median of the first, middle and last elements, and each pass splits the slice
/// three ways (smaller, equal, greater), so sorted input and runs of equal elements stay
/// `O(n log n)`. Only the smaller side of each partition is sorted recursively, so the stack stays
/// logarithmic even when the partitions come out lopsided.
pub fn quick_sort_by<T, C: Compare<T>>(mut values: &mut [T], comparator: &C) {
    while values.len() > 1 {
        let (less, greater) = partition(values, comparator);
        let (left, rest) = std::mem::take(&mut values).split_at_mut(less);
        let right = &mut rest[greater - less..];

        if left.len() < right.len() {
            quick_sort_by(left, comparator);
            values = right;
        } else {
            quick_sort_by(right, comparator);
            values = left;
        }
    }
}

/// Rearranges `values` into elements smaller than the pivot, then equal, then greater. Returns
/// where the equal run starts and ends.
fn partition<T, C: Compare<T>>(values: &mut [T], comparator: &C) -> (usize, usize) {
    let pivot = median_of_three(values, comparator);
    values.swap(0, pivot);

    // values[..less] < pivot, values[less..i] == pivot, values[greater..] > pivot
    let mut less = 0;
    let mut i = 1;
    let mut greater = values.len();

    while i < greater {
        match comparator.compare(&values[i], &values[less]) {
            Ordering::Less => {
                values.swap(i, less);
                less += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                greater -= 1;
                values.swap(i, greater);
            }
        }
    }

    (less, greater)
}

/// Index of the median of the first, middle and last elements.
fn median_of_three<T, C: Compare<T>>(values: &[T], comparator: &C) -> usize {
    let (a, b, c) = (0, values.len() / 2, values.len() - 1);
    let lt = |x: usize, y: usize| comparator.lt(&values[x], &values[y]);

    if lt(a, b) {
        if lt(b, c) {
            b
        } else if lt(a, c) {
            c
        } else {
            a
        }
    } else if lt(a, c) {
        a
    } else if lt(b, c) {
        c
    } else {
        b
    }
}

/// Sorts `values` in place with heap sort. Not stable.
pub fn heap_sort<T: Ord>(values: &mut [T]) {
    heap_sort_by(values, &Natural)
}

/// Sorts `values` in place under `comparator` by turning it into a max-heap and repeatedly
/// swapping the root behind the heap. Not stable.
pub fn heap_sort_by<T, C: Compare<T>>(values: &mut [T], comparator: &C) {
    heap::build(values, comparator);
    heap::sort_built(values, comparator);
}

/// Sorts small non-negative integers by counting them. Runs in `O(n + max)` time and memory.
pub fn counting_sort(values: &[usize]) -> Vec<usize> {
    counting_sort_by_key(values, |x| *x)
}

/// Sorts `values` by a small non-negative integer `key`, counting how often each key occurs.
/// Stable. Runs in `O(n + max key)` time and memory.
///
/// # Panics
///
/// If the largest key is too big for a table of `max key + 1` counts to be allocated, which
/// includes a key of `usize::MAX`.
///
/// # Examples
///
/// ```
/// use algos::sort::counting_sort_by_key;
///
/// let people = [("Bob", 30), ("Alice", 25), ("Carol", 30), ("Dan", 20)];
/// let by_age = counting_sort_by_key(&people, |(_, age)| *age);
///
/// assert_eq!(by_age, [("Dan", 20), ("Alice", 25), ("Bob", 30), ("Carol", 30)]);
/// ```
pub fn counting_sort_by_key<T, F>(values: &[T], key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> usize,
{
    let Some(max) = values.iter().map(&key).max() else {
        return Vec::new();
    };

    let Some(slots) = max.checked_add(1) else {
        panic!("counting sort can't count key {max}");
    };
    let mut counts = vec![0usize; slots];
    for value in values {
        counts[key(value)] += 1;
    }
    // Turn the counts into the index one past the last slot of each key.
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut sorted = vec![None; values.len()];
    for value in values.iter().rev() {
        let k = key(value);
        counts[k] -= 1;
        sorted[counts[k]] = Some(value.clone());
    }

    sorted.into_iter().flatten().collect()
}
