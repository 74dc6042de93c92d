//! Indexed binary min-heap
//!
//! A binary min-heap that also maintains a map from each value to its current
//! position in the heap array. The map makes membership tests O(1) and —
//! more importantly — lets [`IndexedMinHeap::remove`] delete an *arbitrary*
//! value in O(log n) instead of scanning the array for it.
//!
//! Values double as their own keys, so each value may be present at most
//! once; the heap behaves as a heap-ordered set. [`IndexedMinHeap::insert`]
//! rejects duplicates rather than corrupting the position map.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `peek_min` | O(1)       |
//! | `pop_min`  | O(log n)   |
//! | `remove`   | O(log n)   |
//! | `contains` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//!
//! assert_eq!(heap.peek_min(), Some(&3));
//! assert!(heap.remove(&3));
//! assert_eq!(heap.peek_min(), Some(&5));
//! assert!(!heap.remove(&3));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A binary min-heap with O(log n) removal of arbitrary values
///
/// The heap stores each value once and keeps an auxiliary value→position map
/// in sync with the backing array across every structural mutation. The map
/// invariant — `data[index[v]] == v` for every present value `v` — is what
/// makes arbitrary removal cheap, and every swap, push, and pop maintains it
/// as a side effect.
///
/// Values must be `Ord` (for heap ordering), `Hash + Eq` (for the position
/// map), and `Clone` (map keys are copies of the stored values).
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T: Ord + Hash + Clone> {
    /// The heap data, satisfying `data[parent] <= data[child]`
    data: Vec<T>,
    /// Value → current position in `data`
    index: FxHashMap<T, usize>,
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates a new empty heap with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if `value` is currently in the heap
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Inserts a value, returning `true` if it was not already present
    ///
    /// A duplicate insert is rejected and leaves the heap unchanged, since
    /// the position map can only track one slot per value.
    pub fn insert(&mut self, value: T) -> bool {
        if self.index.contains_key(&value) {
            return false;
        }
        let slot = self.data.len();
        self.index.insert(value.clone(), slot);
        self.data.push(value);
        self.sift_up(slot);
        true
    }

    /// Returns the minimum value without removing it
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the minimum value
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap_slots(0, last);
        let min = self.data.pop();
        if let Some(min) = &min {
            self.index.remove(min);
        }
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Removes an arbitrary value, returning `true` if it was present
    ///
    /// The value's slot is looked up in the position map, swapped with the
    /// last element, and truncated away; if the vacated slot still holds an
    /// element, the heap property is restored there with a combined
    /// sift-up/sift-down fix.
    pub fn remove(&mut self, value: &T) -> bool {
        let slot = match self.index.get(value) {
            Some(&slot) => slot,
            None => return false,
        };
        let last = self.data.len() - 1;
        self.swap_slots(slot, last);
        if let Some(removed) = self.data.pop() {
            self.index.remove(&removed);
        }
        if slot < self.data.len() {
            self.fix(slot);
        }
        true
    }

    /// Returns an iterator over the values in arbitrary (heap-array) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Swap two slots, rewriting both position-map entries
    ///
    /// All positional changes must go through here so the map never points
    /// at a stale slot.
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.index.insert(self.data[i].clone(), i);
        self.index.insert(self.data[j].clone(), j);
    }

    /// Move the element at `slot` up until the heap property holds,
    /// returning its final position
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.data[slot] < self.data[parent] {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    /// Move the element at `slot` down until the heap property holds
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != slot {
                self.swap_slots(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }

    /// Restore the heap property at `slot` after its element was replaced
    ///
    /// The replacement may be smaller than the parent or larger than a
    /// child, so try sifting up first and sift down only if nothing moved.
    fn fix(&mut self, slot: usize) {
        if self.sift_up(slot) == slot {
            self.sift_down(slot);
        }
    }
}

impl<T: Ord + Hash + Clone> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    /// Builds a heap from an iterator using bottom-up heapify
    ///
    /// Duplicate values in the input are dropped, matching `insert`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut index = FxHashMap::default();
        for value in iter {
            if index.contains_key(&value) {
                continue;
            }
            index.insert(value.clone(), data.len());
            data.push(value);
        }
        let mut heap = Self { data, index };
        for slot in (0..heap.data.len() / 2).rev() {
            heap.sift_down(slot);
        }
        heap
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
