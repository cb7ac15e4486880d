//! Comparator-driven binary heap
//!
//! An array-backed priority queue whose ordering is a type parameter
//! implementing [`Compare`]. The same structure serves as a min-heap, a
//! max-heap, or a heap over any caller-defined total order.
//!
//! The backing `Vec` is read as a complete binary tree: the element at `i` has
//! its parent at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`.
//! Every mutating operation leaves the parent of each element ranked no later
//! than the element itself.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `poll`     | O(log n)   |
//! | `peek`     | O(1)       |
//! | `remove`   | O(n)       |
//! | `contains` | O(n)       |
//! | `from_vec_with` | O(n)  |
//!
//! Equal elements come out in no particular order; the heap is not stable.
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new_by_key(|s: &&str| s.len());
//! heap.insert("banana");
//! heap.insert("kiwi");
//! heap.insert("apple");
//!
//! assert_eq!(heap.poll(), Ok("kiwi"));
//! assert_eq!(heap.poll(), Ok("apple"));
//! assert_eq!(heap.poll(), Ok("banana"));
//! assert!(heap.poll().is_err());
//! ```

use crate::compare::{Compare, Direction, FnOrder, KeyOrder, MaxOrder, MinOrder};
use crate::traits::{Heap, HeapError};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// An array-backed binary heap ordered by `C`
///
/// The root is the element that `C` ranks first. With the default
/// [`MinOrder`] that is the smallest element.
#[derive(Clone)]
pub struct BinaryHeap<T, C = MinOrder> {
    /// The heap data, in tree order
    data: Vec<T>,
    order: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_comparator(MinOrder)
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MinOrder)
    }
}

impl<T: Ord> BinaryHeap<T, MaxOrder> {
    /// Creates an empty max-heap
    pub fn new_max() -> Self {
        Self::with_comparator(MaxOrder)
    }

    pub fn with_capacity_max(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MaxOrder)
    }
}

impl<T: Ord> BinaryHeap<T, Direction> {
    /// Creates an empty heap that is a min-heap when `is_min_heap` is true and
    /// a max-heap otherwise
    pub fn with_min_flag(is_min_heap: bool) -> Self {
        Self::with_comparator(Direction::from_min_flag(is_min_heap))
    }
}

impl<T, F> BinaryHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap ordered by a comparison closure
    pub fn new_by(f: F) -> Self {
        Self::with_comparator(FnOrder(f))
    }

    pub fn with_capacity_by(capacity: usize, f: F) -> Self {
        Self::with_capacity_and_comparator(capacity, FnOrder(f))
    }
}

impl<T, K, F> BinaryHeap<T, KeyOrder<F>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Creates an empty heap ordered by a key extracted from each element
    pub fn new_by_key(f: F) -> Self {
        Self::with_comparator(KeyOrder(f))
    }

    pub fn with_capacity_by_key(capacity: usize, f: F) -> Self {
        Self::with_capacity_and_comparator(capacity, KeyOrder(f))
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap with an explicit ordering
    pub fn with_comparator(order: C) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, order: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Builds a heap from an arbitrary vector in O(n)
    pub fn from_vec_with(data: Vec<T>, order: C) -> Self {
        let mut heap = Self { data, order };
        heap.rebuild();
        heap
    }

    /// Starts a [`HeapBuilder`]
    pub fn builder() -> HeapBuilder<T, C> {
        HeapBuilder::new()
    }

    /// Returns the ordering this heap was built with
    pub fn comparator(&self) -> &C {
        &self.order
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts an element, sifting it up toward the root
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Alias for [`insert`](Self::insert)
    pub fn push(&mut self, item: T) {
        self.insert(item);
    }

    /// Alias for [`insert`](Self::insert)
    pub fn offer(&mut self, item: T) {
        self.insert(item);
    }

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyStructure)
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    /// [`HeapError::EmptyStructure`] if the heap is empty.
    pub fn poll(&mut self) -> Result<T, HeapError> {
        self.extract_root()
    }

    /// Removes and returns the root element, or `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.extract_root().ok()
    }

    /// Removes the first element equal to `item`
    ///
    /// Equality is `T`'s `PartialEq`, not the heap ordering, so two elements
    /// the ordering ties are still told apart. Returns `false` if no element
    /// matched.
    ///
    /// # Time Complexity
    /// O(n) to find the element, O(log n) to repair the heap.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.data.iter().position(|x| x == item) else {
            return false;
        };

        if index == self.data.len() - 1 {
            self.data.pop();
            return true;
        }

        // The last element takes the vacated slot; only one direction can be out of order
        self.data.swap_remove(index);
        if index > 0 && self.less(index, parent(index)) {
            log::trace!("remove: sift up from index {}", index);
            self.sift_up(index);
        } else {
            log::trace!("remove: sift down from index {}", index);
            self.sift_down(index);
        }

        true
    }

    /// Returns true if some element equals `item`
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(item)
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        log::trace!("clear: dropping {} elements", self.data.len());
        self.data.clear();
    }

    /// Copies the elements out in backing (heap) order, not sorted order
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// The elements in backing (heap) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in backing (heap) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements ranked first to last
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.extract_root() {
            sorted.push(item);
        }
        sorted
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        match self.data.len() {
            0 => Err(HeapError::EmptyStructure),
            1 => self.data.pop().ok_or(HeapError::EmptyStructure),
            _ => {
                // swap_remove moves the last element into the root slot
                let root = self.data.swap_remove(0);
                self.sift_down(0);
                Ok(root)
            }
        }
    }

    /// True if the element at `a` ranks strictly before the element at `b`
    fn less(&self, a: usize, b: usize) -> bool {
        self.order.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.less(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::insert(self, item);
    }

    fn peek(&self) -> Result<&T, HeapError> {
        BinaryHeap::peek(self)
    }

    fn poll(&mut self) -> Result<T, HeapError> {
        BinaryHeap::poll(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self);
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Formats the elements in backing order, e.g. `[1, 2, 8, 5, 10]`
impl<T: fmt::Display, C> fmt::Display for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), MinOrder)
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with(data, MinOrder)
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Yields the elements in backing order; use
/// [`into_sorted_vec`](BinaryHeap::into_sorted_vec) for ranked order
impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Builder for heaps whose ordering has no natural default
///
/// ```rust
/// use rust_comparator_heap::binary::{BinaryHeap, HeapBuilder};
/// use rust_comparator_heap::compare::MaxOrder;
/// use rust_comparator_heap::HeapError;
///
/// let mut heap = BinaryHeap::builder().capacity(8).comparator(MaxOrder).build().unwrap();
/// heap.insert(1);
/// heap.insert(9);
/// assert_eq!(heap.peek(), Ok(&9));
///
/// let missing = HeapBuilder::<i32, MaxOrder>::new().build();
/// assert!(matches!(missing, Err(HeapError::InvalidArgument(_))));
/// ```
pub struct HeapBuilder<T, C> {
    capacity: usize,
    comparator: Option<C>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C: Compare<T>> HeapBuilder<T, C> {
    pub fn new() -> Self {
        HeapBuilder {
            capacity: 0,
            comparator: None,
            _marker: PhantomData,
        }
    }

    /// Pre-reserves storage for `capacity` elements
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the ordering
    pub fn comparator(mut self, comparator: C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Builds the heap
    ///
    /// # Errors
    /// [`HeapError::InvalidArgument`] if no comparator was supplied.
    pub fn build(self) -> Result<BinaryHeap<T, C>, HeapError> {
        let order = self
            .comparator
            .ok_or(HeapError::InvalidArgument("a comparator is required"))?;
        Ok(BinaryHeap::with_capacity_and_comparator(self.capacity, order))
    }
}

impl<T, C: Compare<T>> Default for HeapBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
