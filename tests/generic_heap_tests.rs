//! Generic tests over every construction mode of `BinaryHeap`
//!
//! The helpers only use the `Heap` trait and take a constructor, so the same
//! scenario runs against natural order, the runtime flag, closures and keys.

use rust_comparator_heap::compare::{Compare, Direction, FnOrder, KeyOrder, MaxOrder, MinOrder};
use rust_comparator_heap::{BinaryHeap, Heap, HeapError};
use std::cmp::Ordering;

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>(make: impl Fn() -> H) {
    let mut heap = make();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), Err(HeapError::EmptyStructure));
    assert_eq!(heap.poll(), Err(HeapError::EmptyStructure));
    assert_eq!(heap.pop(), None);
}

/// Insert the reference sequence and drain it, checking sizes along the way
fn test_drain_sequence<H: Heap<i32>>(make: impl Fn() -> H, expected: [i32; 5]) {
    let mut heap = make();
    for x in [5, 2, 8, 1, 10] {
        heap.push(x);
    }
    assert_eq!(heap.peek(), Ok(&expected[0]));

    for (i, want) in expected.iter().enumerate() {
        assert_eq!(heap.poll(), Ok(*want));
        assert_eq!(heap.len(), 4 - i);
    }
    assert_eq!(heap.poll(), Err(HeapError::EmptyStructure));
}

/// A drained heap behaves like a fresh one
fn test_refill_after_drain<H: Heap<i32>>(make: impl Fn() -> H) {
    let mut heap = make();
    heap.push(3);
    heap.push(4);
    while heap.pop().is_some() {}
    assert_eq!(heap.peek(), Err(HeapError::EmptyStructure));

    heap.push(9);
    assert_eq!(heap.peek(), Ok(&9));
    assert_eq!(heap.len(), 1);
}

/// Peek is repeatable and never changes the size
fn test_peek_idempotent<H: Heap<i32>>(make: impl Fn() -> H) {
    let mut heap = make();
    for x in [4, 7, 1, 9, 1] {
        heap.push(x);
    }
    let first = *heap.peek().unwrap();
    for _ in 0..10 {
        assert_eq!(heap.peek(), Ok(&first));
        assert_eq!(heap.len(), 5);
    }
}

/// Clear empties the heap and leaves it usable
fn test_clear<H: Heap<i32>>(make: impl Fn() -> H) {
    let mut heap = make();
    for x in 0..50 {
        heap.push(x);
    }
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), None);
    heap.push(1);
    assert_eq!(heap.len(), 1);
}

/// Every element is returned exactly once, ranked by the comparator
fn test_drain_is_sorted<C: Compare<i32>>(mut heap: BinaryHeap<i32, C>) {
    let values = [13, -4, 0, 99, 7, 7, 7, -4, 42, 1, 1000, -1000, 5];
    for v in values {
        heap.insert(v);
    }

    let mut drained = Vec::new();
    while let Ok(v) = heap.poll() {
        drained.push(v);
    }

    // Ties may come out in any order, so check rank order and the multiset separately
    let order = heap.comparator();
    assert!(drained
        .windows(2)
        .all(|w| order.compare(&w[0], &w[1]) != Ordering::Greater));

    let mut sorted_drained = drained.clone();
    sorted_drained.sort_unstable();
    let mut sorted_values = values.to_vec();
    sorted_values.sort_unstable();
    assert_eq!(sorted_drained, sorted_values);
}

#[test]
fn test_empty_all_modes() {
    test_empty_heap(BinaryHeap::<i32>::new);
    test_empty_heap(BinaryHeap::<i32, MaxOrder>::new_max);
    test_empty_heap(|| BinaryHeap::<i32, Direction>::with_min_flag(false));
    test_empty_heap(|| BinaryHeap::new_by(|a: &i32, b: &i32| a.cmp(b)));
}

#[test]
fn test_min_heap_scenario() {
    test_drain_sequence(BinaryHeap::<i32>::new, [1, 2, 5, 8, 10]);
    test_drain_sequence(|| BinaryHeap::with_min_flag(true), [1, 2, 5, 8, 10]);
    test_drain_sequence(|| BinaryHeap::with_comparator(MinOrder), [1, 2, 5, 8, 10]);
}

#[test]
fn test_max_heap_scenario() {
    test_drain_sequence(BinaryHeap::<i32, MaxOrder>::new_max, [10, 8, 5, 2, 1]);
    test_drain_sequence(|| BinaryHeap::with_min_flag(false), [10, 8, 5, 2, 1]);
    test_drain_sequence(
        || BinaryHeap::new_by(|a: &i32, b: &i32| b.cmp(a)),
        [10, 8, 5, 2, 1],
    );
}

#[test]
fn test_refill_all_modes() {
    test_refill_after_drain(BinaryHeap::<i32>::new);
    test_refill_after_drain(BinaryHeap::<i32, MaxOrder>::new_max);
    test_refill_after_drain(|| BinaryHeap::new_by_key(|x: &i32| x.abs()));
}

#[test]
fn test_peek_all_modes() {
    test_peek_idempotent(BinaryHeap::<i32>::new);
    test_peek_idempotent(|| BinaryHeap::with_min_flag(false));
}

#[test]
fn test_clear_all_modes() {
    test_clear(BinaryHeap::<i32>::new);
    test_clear(|| BinaryHeap::with_comparator(FnOrder(|a: &i32, b: &i32| b.cmp(a))));
}

#[test]
fn test_drain_sorted_all_modes() {
    test_drain_is_sorted(BinaryHeap::new());
    test_drain_is_sorted(BinaryHeap::new_max());
    test_drain_is_sorted(BinaryHeap::with_min_flag(false));
    test_drain_is_sorted(BinaryHeap::with_comparator(KeyOrder(|x: &i32| x.rem_euclid(10))));
}

#[test]
fn test_string_length_comparator() {
    let mut heap = BinaryHeap::new_by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    for fruit in ["apple", "banana", "kiwi", "strawberry"] {
        heap.insert(fruit);
    }

    let mut polled = Vec::new();
    while !heap.is_empty() {
        polled.push(heap.poll().unwrap());
    }

    // Only the length order is guaranteed
    let lengths: Vec<usize> = polled.iter().map(|s| s.len()).collect();
    assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(polled[0], "kiwi");
    assert_eq!(polled[3], "strawberry");
    assert_eq!(polled.len(), 4);
}

#[test]
fn test_ties_do_not_crash() {
    // Every element ties under this ordering; which one comes out is unspecified
    let mut heap = BinaryHeap::new_by(|_: &i32, _: &i32| Ordering::Equal);
    heap.extend(0..64);
    let mut drained: Vec<i32> = std::iter::from_fn(|| heap.pop()).collect();
    drained.sort_unstable();
    assert_eq!(drained, (0..64).collect::<Vec<_>>());
}

#[test]
fn test_remove_and_contains() {
    let mut heap = BinaryHeap::new_max();
    heap.extend([5, 2, 8, 1, 10]);

    assert!(heap.contains(&8));
    assert!(heap.remove(&8));
    assert!(!heap.contains(&8));
    assert_eq!(heap.len(), 4);

    assert!(!heap.remove(&8));
    assert_eq!(heap.len(), 4);

    assert_eq!(heap.into_sorted_vec(), vec![10, 5, 2, 1]);
}

#[test]
fn test_remove_root_and_duplicates() {
    let mut heap = BinaryHeap::new();
    heap.extend([3, 3, 3, 1, 1]);
    assert!(heap.remove(&1));
    assert_eq!(heap.peek(), Ok(&1));
    assert!(heap.remove(&1));
    assert_eq!(heap.peek(), Ok(&3));
    assert!(heap.remove(&3));
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_remove_only_element() {
    let mut heap = BinaryHeap::new();
    heap.insert("solo");
    assert!(heap.remove(&"solo"));
    assert!(heap.is_empty());
    assert_eq!(heap.peek(), Err(HeapError::EmptyStructure));
}

#[test]
fn test_snapshot_does_not_mutate() {
    let mut heap = BinaryHeap::new();
    heap.extend([9, 4, 6]);
    let before = heap.snapshot();
    let again = heap.snapshot();
    assert_eq!(before, again);
    assert_eq!(before[0], 4);

    let mut sorted = before.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![4, 6, 9]);
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_owned_non_copy_elements() {
    let mut heap = BinaryHeap::new_by_key(|job: &(u8, String)| job.0);
    heap.insert((3, "low".to_string()));
    heap.insert((1, "urgent".to_string()));
    heap.insert((2, "normal".to_string()));

    assert_eq!(heap.poll().map(|(_, name)| name), Ok("urgent".to_string()));
    assert!(heap.remove(&(3, "low".to_string())));
    assert_eq!(heap.poll().map(|(_, name)| name), Ok("normal".to_string()));
    assert!(heap.is_empty());
}
