/*
 * Copyright (c) 2023-2025 The mincostflow developers
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A slotted arena with stable indices.
//!
//! `Arena<T>` stores its elements in a vector of slots. A new element
//! goes into the smallest free slot, and the slot index is returned as
//! its handle. The handle stays valid until the element is removed;
//! afterwards the slot may be reused for another element. Trailing
//! free slots are trimmed, so `capacity()`, the length of the slot
//! vector, may shrink on removal.
//!
//! The slot index doubles as the offset into any parallel vector of
//! per-element properties of length `capacity()`.
//!
//! # Example
//!
//! ```
//! use mincostflow::arena::Arena;
//!
//! let mut arena = Arena::new();
//! assert_eq!(arena.insert('a'), 0);
//! assert_eq!(arena.insert('b'), 1);
//! arena.remove(0);
//! // the smallest free slot is reused
//! assert_eq!(arena.insert('c'), 0);
//! assert_eq!(arena.len(), 2);
//! ```

use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A vector backed map from slot indices to elements.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Arena<T> {
    /// The slot vector. `None` marks a free slot.
    slots: Vec<Option<T>>,
    /// The free slots, ordered so the smallest is found in O(log n).
    free: BTreeSet<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena {
            slots: vec![],
            free: BTreeSet::new(),
        }
    }
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Default::default()
    }

    /// Return `true` if `idx` refers to a live element.
    pub fn contains(&self, idx: usize) -> bool {
        idx < self.slots.len() && self.slots[idx].is_some()
    }

    /// Insert an element into the smallest free slot and return its
    /// index.
    pub fn insert(&mut self, value: T) -> usize {
        if let Some(&idx) = self.free.iter().next() {
            self.free.remove(&idx);
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        }
    }

    /// Remove the element in slot `idx`.
    ///
    /// Removing a free or out-of-range slot is a no-op. Afterwards
    /// trailing free slots are popped, so the last slot is always live
    /// and `capacity()` may have shrunk.
    pub fn remove(&mut self, idx: usize) {
        if !self.contains(idx) {
            return;
        }
        self.slots[idx] = None;
        self.free.insert(idx);

        while let Some(None) = self.slots.last() {
            let last = self.slots.len() - 1;
            debug_assert!(self.free.contains(&last));
            self.free.remove(&last);
            self.slots.pop();
        }
    }

    /// Return a reference to the element in slot `idx`.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(|slot| slot.as_ref())
    }

    /// Return a mutable reference to the element in slot `idx`.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.slots.get_mut(idx).and_then(|slot| slot.as_mut())
    }

    /// The number of live elements.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Return `true` if the arena contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The length of the slot vector.
    ///
    /// All slot indices are smaller than this value. Parallel property
    /// vectors must be at least this long.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate over the indices of all live slots in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(idx, _)| idx)
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    /// Unchecked access. Panics on a free slot.
    fn index(&self, idx: usize) -> &T {
        self.slots[idx].as_ref().expect("free arena slot")
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        self.slots[idx].as_mut().expect("free arena slot")
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;

    #[test]
    fn insert_reuses_smallest_slot() {
        let mut arena = Arena::new();
        assert_eq!(arena.insert(1), 0);
        assert_eq!(arena.insert(2), 1);
        assert_eq!(arena.insert(3), 2);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.capacity(), 3);

        arena.remove(0);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.capacity(), 3);
        assert!(!arena.contains(0));

        assert_eq!(arena.insert(11), 0);
        assert_eq!(arena[0], 11);

        arena.remove(1);
        arena.remove(2);
        // trailing free slots are trimmed away
        assert_eq!(arena.capacity(), 1);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut arena = Arena::new();
        arena.insert("x");
        arena.insert("y");
        arena.remove(0);
        arena.remove(0);
        arena.remove(17);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(0), None);
        assert_eq!(arena.get(1), Some(&"y"));
    }

    #[test]
    fn last_slot_is_always_live() {
        let mut arena = Arena::new();
        for i in 0..5 {
            arena.insert(i);
        }
        arena.remove(4);
        assert_eq!(arena.capacity(), 4);
        arena.remove(2);
        assert_eq!(arena.capacity(), 4);
        arena.remove(3);
        // slots 2 and 3 are free, both trimmed
        assert_eq!(arena.capacity(), 2);
        assert_eq!(arena.indices().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn iteration_is_ascending() {
        let mut arena = Arena::new();
        for i in 0..6 {
            arena.insert(i * 10);
        }
        arena.remove(1);
        arena.remove(3);
        let values: Vec<_> = arena.indices().map(|idx| arena[idx]).collect();
        assert_eq!(values, vec![0, 20, 40, 50]);
    }
}
