//! Maximum sum contiguous subarray, found in a single pass (Kadane's algorithm).

/// The window found by [`max_sum_subarray`]. `start` and `end` are both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxSubarray {
    /// Index of the first element of the window.
    pub start: usize,
    /// Index of the last element of the window.
    pub end: usize,
    /// Sum of the elements in the window. Wide enough that adding up `i64`s never overflows.
    pub sum: i128,
}

/// Finds the contiguous, non-empty window of `values` with the largest sum. When several windows
/// share that sum, the one ending first wins. `None` for empty input.
///
/// # Examples
///
/// ```
/// use algos::max_subarray::{max_sum_subarray, MaxSubarray};
///
/// assert_eq!(
///     max_sum_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]),
///     Some(MaxSubarray { start: 3, end: 6, sum: 6 })
/// );
/// assert_eq!(max_sum_subarray(&[]), None);
/// ```
pub fn max_sum_subarray(values: &[i64]) -> Option<MaxSubarray> {
    max_sum_subarray_by(values, |x| *x)
}

/// Like [`max_sum_subarray`] for elements that aren't numbers themselves. `value_of` picks the
/// number to add up out of each element.
pub fn max_sum_subarray_by<T, F>(values: &[T], value_of: F) -> Option<MaxSubarray>
where
    F: Fn(&T) -> i64,
{
    let mut best: Option<MaxSubarray> = None;
    let mut sum: i128 = 0;
    let mut start = 0;

    for (i, value) in values.iter().enumerate() {
        sum += i128::from(value_of(value));

        if best.map_or(true, |best| sum > best.sum) {
            best = Some(MaxSubarray { start, end: i, sum });
        }

        // A negative prefix can only drag down whatever follows it.
        if sum < 0 {
            sum = 0;
            start = i + 1;
        }
    }

    best
}
