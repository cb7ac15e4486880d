//! Common traits for heap data structures
//!
//! [`Heap`] is the surface the consumers in this crate ([`selection`](crate::selection),
//! [`pathfinding`](crate::pathfinding)) program against. Unlike
//! `std::collections::BinaryHeap`, whose `peek`/`pop` return `Option`, the
//! primary accessors here report an empty heap as [`HeapError::EmptyStructure`];
//! [`Heap::pop`] is provided for callers that prefer `Option`.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `peek` or `poll` was called on a heap with no elements
    #[error("heap is empty")]
    EmptyStructure,
    /// A required argument was missing or out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Base trait for heap/priority queue data structures
///
/// The root is the element ranked first by the heap's ordering; for a
/// min-heap that is the smallest element.
///
/// # Example
///
/// ```rust
/// use rust_comparator_heap::{BinaryHeap, Heap, HeapError};
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.poll(), Ok(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.poll(), Err(HeapError::EmptyStructure));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap has no elements.
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the root element
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn poll(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the root element, or `None` when empty
    fn pop(&mut self) -> Option<T> {
        self.poll().ok()
    }

    /// Removes every element
    fn clear(&mut self);
}
