//! Priority queue walkthrough
//!
//! Shows a min-heap, a max-heap, and a heap ordered by string length.
//!
//! ## Running
//!
//! ```bash
//! cargo run --example priority_queue_demo
//! ```

use rust_comparator_heap::selection::{kth_largest, MedianFinder};
use rust_comparator_heap::{BinaryHeap, HeapError};

fn main() -> Result<(), HeapError> {
    let mut min_heap = BinaryHeap::new();
    for v in [5, 2, 8, 1, 10] {
        min_heap.offer(v);
    }
    println!("Min-heap: {}", min_heap);
    println!("Peek: {}", min_heap.peek()?);
    println!("Poll: {}", min_heap.poll()?);
    println!("After poll: {}", min_heap);

    let mut max_heap = BinaryHeap::new_max();
    for v in [5, 2, 8, 1, 10] {
        max_heap.offer(v);
    }
    println!("\nMax-heap: {}", max_heap);
    println!("Peek: {}", max_heap.peek()?);
    println!("Poll: {}", max_heap.poll()?);
    println!("Contains 8: {}", max_heap.contains(&8));
    println!("Remove 8: {}", max_heap.remove(&8));
    println!("After remove: {}", max_heap);

    let mut by_length = BinaryHeap::new_by_key(|s: &&str| s.len());
    for word in ["apple", "banana", "kiwi", "strawberry"] {
        by_length.offer(word);
    }
    println!("\nBy length: {}", by_length);
    let mut order = Vec::new();
    while let Ok(word) = by_length.poll() {
        order.push(word);
    }
    println!("Shortest first: {:?}", order);

    let samples = [3, 2, 1, 5, 6, 4];
    println!("\n2nd largest of {:?}: {}", samples, kth_largest(&samples, 2)?);

    let mut median = MedianFinder::new();
    for v in [1, 2, 3] {
        median.add_num(v);
        println!("Median after {}: {}", v, median.find_median()?);
    }

    match BinaryHeap::<i32>::new().poll() {
        Err(err) => println!("\nPolling an empty heap: {}", err),
        Ok(v) => println!("\nUnexpected value {}", v),
    }

    Ok(())
}
