//! Array-backed binary min-heap.
//!
//! Storage is 0-indexed: the parent of `i` is `(i - 1) / 2` and its children
//! are `2i + 1` and `2i + 2`. Partial trees keep their frontier arcs here.

use crate::error::MstError;

/// A binary min-heap over `T: Ord`.
///
/// # Examples
/// ```
/// use partree_core::MinHeap;
///
/// let mut heap = MinHeap::from_vec(vec![5, 1, 4]);
/// heap.insert(2);
/// assert_eq!(heap.delete_min()?, 1);
/// assert_eq!(heap.delete_min()?, 2);
/// assert_eq!(heap.len(), 2);
/// # Ok::<(), partree_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from unordered items in linear time.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        heap.heapify();
        heap
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the heap holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum item without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterates over the items in storage order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the heap, returning its storage in heap order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Adds an item.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum item.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyHeap`] when the heap is empty.
    pub fn delete_min(&mut self) -> Result<T, MstError> {
        self.pop().ok_or(MstError::EmptyHeap)
    }

    /// Removes and returns the minimum item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Moves every item of `other` into this heap.
    ///
    /// The storage is concatenated and rebuilt bottom-up, which is linear in
    /// the combined size.
    pub fn append(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.items = other.items;
            return;
        }
        self.items.extend(other.items);
        self.heapify();
    }

    /// Restores the heap property below `index`, assuming both child
    /// subtrees already satisfy it.
    ///
    /// Out-of-range indices are ignored.
    pub fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == index {
                return;
            }

            self.items.swap(index, smallest);
            index = smallest;
        }
    }

    /// Returns `true` if every parent is no greater than its children.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|index| self.items[(index - 1) / 2] <= self.items[index])
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[parent] <= self.items[index] {
                return;
            }
            self.items.swap(parent, index);
            index = parent;
        }
    }

    fn heapify(&mut self) {
        for index in (0..self.items.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
