//! The ordering abstraction shared by every structure and algorithm in this crate.
//!
//! Nothing here relies on a value's intrinsic ordering directly. Instead each tree, heap and sort
//! is handed a [`Compare`] implementation up front and uses it for every relational decision. By
//! default that is [`Natural`], which defers to [`Ord`], but any closure of the shape
//! `Fn(&T, &T) -> Ordering` works too.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use algos::compare::{Compare, Natural, Rev};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Rev(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"pear", &"fig"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
pub trait Compare<T: ?Sized> {
    /// Compares two values, returning how `a` relates to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Shorthand for `self.compare(a, b) == Ordering::Less`.
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Shorthand for `self.compare(a, b) == Ordering::Greater`.
    fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the wrapped comparator. A max-heap under `Rev(c)` is a min-heap under `c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rev<C>(pub C);

impl<T, C> Compare<T> for Rev<C>
where
    T: ?Sized,
    C: Compare<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
