//! Comparator-driven binary heap for Rust
//!
//! This crate provides an array-backed binary heap whose ordering is a
//! pluggable [`Compare`](compare::Compare) implementation, together with the
//! classic algorithms that use a heap as a black box.
//!
//! # Features
//!
//! - **[`BinaryHeap`]**: O(log n) insert and extract-root, O(1) peek, O(n)
//!   removal of an arbitrary element; min-heap, max-heap, runtime-selected
//!   direction, or any closure/key ordering
//! - **[`selection`]**: Kth-largest / Kth-smallest and a running median
//! - **[`pathfinding`]**: Dijkstra, A*, budgeted reachability and an
//!   adjacency-list distance table
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::with_min_flag(false); // max-heap
//! for x in [5, 2, 8, 1, 10] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.peek(), Ok(&10));
//! assert_eq!(heap.into_sorted_vec(), vec![10, 8, 5, 2, 1]);
//!
//! let mut empty: BinaryHeap<i32> = BinaryHeap::new();
//! assert_eq!(empty.poll(), Err(HeapError::EmptyStructure));
//! ```
//!
//! # Concurrency
//!
//! A heap has no internal locking. It is `Send`/`Sync` whenever its elements
//! and ordering are; share one across threads behind a lock.

pub mod binary;
pub mod compare;
pub mod pathfinding;
pub mod selection;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, HeapBuilder};
pub use compare::Compare;
pub use traits::{Heap, HeapError};
