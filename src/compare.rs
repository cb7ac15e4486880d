//! Orderings that drive a [`BinaryHeap`](crate::binary::BinaryHeap)
//!
//! A heap never looks at its elements directly: every decision goes through a
//! [`Compare`] implementation. The element that compares [`Ordering::Less`]
//! than everything else sits at the root.
//!
//! | Ordering | Root holds | Requires |
//! |----------|------------|----------|
//! | [`MinOrder`] | smallest element | `T: Ord` |
//! | [`MaxOrder`] | largest element | `T: Ord` |
//! | [`Direction`] | chosen at runtime | `T: Ord` |
//! | [`FnOrder`] | whatever the closure ranks first | `Fn(&T, &T) -> Ordering` |
//! | [`KeyOrder`] | smallest derived key | `Fn(&T) -> K`, `K: Ord` |

use std::cmp::Ordering;

/// A total order over `T`.
///
/// `compare(a, b)` returns `Less` when `a` belongs closer to the root than `b`.
/// Implementations must be consistent (a total order); the heap makes no
/// attempt to detect an inconsistent comparator.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Natural ascending order: a min-heap.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed natural order: a max-heap.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Natural or reversed order, picked when the heap is built.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Min-heap.
    #[default]
    Ascending,
    /// Max-heap.
    Descending,
}

impl Direction {
    /// `true` selects a min-heap, `false` a max-heap.
    pub fn from_min_flag(is_min_heap: bool) -> Self {
        if is_min_heap {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    pub fn is_min_heap(self) -> bool {
        self == Direction::Ascending
    }
}

impl<T: Ord + ?Sized> Compare<T> for Direction {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            Direction::Ascending => a.cmp(b),
            Direction::Descending => b.cmp(a),
        }
    }
}

/// Orders with a caller-supplied comparison closure.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FnOrder<F>(pub F);

impl<T, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Orders by a key extracted from each element, smallest key first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct KeyOrder<F>(pub F);

impl<T, K, F> Compare<T> for KeyOrder<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
