//! Order statistics built on [`BinaryHeap`]
//!
//! - [`kth_largest`] / [`kth_smallest`] keep a heap of at most `k` elements,
//!   evicting the root whenever it grows past `k`. O(n log k).
//! - [`MedianFinder`] maintains a running median with two heaps: a max-heap
//!   over the lower half and a min-heap over the upper half.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::selection::{kth_largest, MedianFinder};
//!
//! assert_eq!(kth_largest(&[3, 2, 1, 5, 6, 4], 2), Ok(5));
//!
//! let mut finder = MedianFinder::new();
//! finder.add_num(1);
//! finder.add_num(2);
//! assert_eq!(finder.find_median(), Ok(1.5));
//! finder.add_num(3);
//! assert_eq!(finder.find_median(), Ok(2.0));
//! ```

use crate::binary::BinaryHeap;
use crate::compare::{Compare, MaxOrder, MinOrder};
use crate::traits::HeapError;

/// Returns the `k`-th largest element (1-based) of `items`
///
/// Duplicates count separately: the 2nd largest of `[5, 5, 1]` is `5`.
///
/// # Errors
/// [`HeapError::InvalidArgument`] if `k` is zero or larger than `items.len()`.
pub fn kth_largest<T: Ord + Clone>(items: &[T], k: usize) -> Result<T, HeapError> {
    kth_by(items, k, MinOrder)
}

/// Returns the `k`-th smallest element (1-based) of `items`
///
/// # Errors
/// [`HeapError::InvalidArgument`] if `k` is zero or larger than `items.len()`.
pub fn kth_smallest<T: Ord + Clone>(items: &[T], k: usize) -> Result<T, HeapError> {
    kth_by(items, k, MaxOrder)
}

/// Keeps the `k` elements ranked last by `order`; the root of that heap is the answer
fn kth_by<T: Clone, C: Compare<T>>(items: &[T], k: usize, order: C) -> Result<T, HeapError> {
    if k == 0 {
        return Err(HeapError::InvalidArgument("k must be at least 1"));
    }
    if k > items.len() {
        return Err(HeapError::InvalidArgument("k exceeds the number of items"));
    }
    log::debug!("selecting rank {} of {} items", k, items.len());

    let mut heap = BinaryHeap::with_capacity_and_comparator(k + 1, order);
    for item in items {
        heap.offer(item.clone());
        if heap.len() > k {
            heap.poll()?;
        }
    }
    heap.poll()
}

/// Running median over a stream of integers
///
/// The lower half lives in a max-heap and the upper half in a min-heap. After
/// every insertion the lower half holds as many values as the upper half, or
/// exactly one more.
#[derive(Debug, Clone, Default)]
pub struct MedianFinder {
    lower: BinaryHeap<i64, MaxOrder>,
    upper: BinaryHeap<i64, MinOrder>,
}

impl MedianFinder {
    pub fn new() -> Self {
        MedianFinder {
            lower: BinaryHeap::new_max(),
            upper: BinaryHeap::new(),
        }
    }

    /// Adds a value to the stream
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn add_num(&mut self, num: i64) {
        // Route through the lower half so the upper half only ever receives
        // the largest of the lower values
        self.lower.push(num);
        if let Ok(top) = self.lower.poll() {
            self.upper.push(top);
        }

        if self.lower.len() < self.upper.len() {
            if let Ok(bottom) = self.upper.poll() {
                self.lower.push(bottom);
            }
        }
        debug_assert!(self.lower.len() - self.upper.len() <= 1);
    }

    /// Returns the median of all values added so far
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if no value has been added.
    pub fn find_median(&self) -> Result<f64, HeapError> {
        let low = *self.lower.peek()?;
        if self.lower.len() > self.upper.len() {
            return Ok(low as f64);
        }
        let high = *self.upper.peek()?;
        Ok((low as f64 + high as f64) / 2.0)
    }

    /// Number of values added so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kth_largest() {
        let nums = [3, 2, 1, 5, 6, 4];
        assert_eq!(kth_largest(&nums, 1), Ok(6));
        assert_eq!(kth_largest(&nums, 2), Ok(5));
        assert_eq!(kth_largest(&nums, 6), Ok(1));
    }

    #[test]
    fn test_kth_largest_with_duplicates() {
        let nums = [3, 2, 3, 1, 2, 4, 5, 5, 6];
        assert_eq!(kth_largest(&nums, 4), Ok(4));
        assert_eq!(kth_largest(&[5, 5, 1], 2), Ok(5));
    }

    #[test]
    fn test_kth_smallest() {
        let nums = [7, 10, 4, 3, 20, 15];
        assert_eq!(kth_smallest(&nums, 1), Ok(3));
        assert_eq!(kth_smallest(&nums, 3), Ok(7));
        assert_eq!(kth_smallest(&nums, 6), Ok(20));
    }

    #[test]
    fn test_kth_invalid_k() {
        assert!(matches!(
            kth_largest(&[1, 2, 3], 0),
            Err(HeapError::InvalidArgument(_))
        ));
        assert!(matches!(
            kth_smallest(&[1, 2, 3], 4),
            Err(HeapError::InvalidArgument(_))
        ));
        assert!(kth_largest::<i32>(&[], 1).is_err());
    }

    #[test]
    fn test_kth_strings() {
        let words = ["pear", "apple", "fig", "banana"];
        assert_eq!(kth_smallest(&words, 2), Ok("banana"));
        assert_eq!(kth_largest(&words, 1), Ok("pear"));
    }

    #[test]
    fn test_median_empty() {
        let finder = MedianFinder::new();
        assert!(finder.is_empty());
        assert_eq!(finder.find_median(), Err(HeapError::EmptyStructure));
    }

    #[test]
    fn test_median_stream() {
        let mut finder = MedianFinder::new();
        finder.add_num(5);
        assert_eq!(finder.find_median(), Ok(5.0));
        finder.add_num(15);
        assert_eq!(finder.find_median(), Ok(10.0));
        finder.add_num(1);
        assert_eq!(finder.find_median(), Ok(5.0));
        finder.add_num(3);
        assert_eq!(finder.find_median(), Ok(4.0));
        assert_eq!(finder.len(), 4);
    }

    #[test]
    fn test_median_negative_and_extreme() {
        let mut finder = MedianFinder::new();
        finder.add_num(i64::MAX);
        finder.add_num(i64::MAX);
        assert_eq!(finder.find_median(), Ok(i64::MAX as f64));
        finder.add_num(-4);
        finder.add_num(-4);
        finder.add_num(-4);
        assert_eq!(finder.find_median(), Ok(-4.0));
    }
}
