//! Generational slot allocator.
//!
//! A [`SlotMap`] stores values in a growable sequence of slots. Every slot is
//! either occupied by a value or free, in which case it links to the next
//! free slot. Freed slots are reused most-recently-freed first.
//!
//! Each slot carries a generation that advances on every transition between
//! occupied and free. New slots start at generation 0, so occupied slots
//! always hold an even generation and free slots an odd one. A [`Key`] is
//! valid only while its generation matches the slot's.

// Slot indices are u32 by construction; insert refuses to grow past u32::MAX
#![allow(clippy::cast_possible_truncation)]

use tracing::trace;

use crate::error::{Error, Result};
use crate::key::Key;

/// Contents of a slot.
#[derive(Debug, Clone)]
enum Entry<T> {
    /// Holds a live value.
    Occupied(T),
    /// Free; links to the next free slot, `None` terminates the list.
    Free { next: Option<u32> },
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Generational arena with O(1) insert, lookup and erase.
///
/// Values are addressed by [`Key`]. Erasing a value advances its slot's
/// generation, which permanently invalidates every key issued for it.
#[derive(Debug, Clone)]
pub struct SlotMap<T> {
    /// Most recently freed slot.
    head: Option<u32>,
    slots: Vec<Slot<T>>,
    /// Count of occupied slots.
    len: usize,
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotMap<T> {
    /// Creates an empty slot map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: None,
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty slot map with room for `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Inserts a value and returns its key.
    ///
    /// # Panics
    /// Panics if the map already holds `u32::MAX` slots.
    pub fn insert(&mut self, value: T) -> Key {
        self.insert_with_key(|_| value)
    }

    /// Inserts a value built from the key it will be stored under.
    ///
    /// The key is valid by the time `f` returns, which lets records store
    /// their own key.
    ///
    /// # Panics
    /// Panics if the map already holds `u32::MAX` slots.
    pub fn insert_with_key<F>(&mut self, f: F) -> Key
    where
        F: FnOnce(Key) -> T,
    {
        // `f` runs before any bookkeeping so a panic in it leaves the map intact
        if let Some(index) = self.head {
            let slot = &self.slots[index as usize];
            let next = match slot.entry {
                Entry::Free { next } => next,
                Entry::Occupied(_) => unreachable!("free list head {index} is occupied"),
            };
            // Was odd/free, now even/occupied
            let key = Key::new(index, slot.generation.wrapping_add(1));
            let value = f(key);

            let slot = &mut self.slots[index as usize];
            slot.generation = key.generation;
            slot.entry = Entry::Occupied(value);
            self.head = next;
            self.len += 1;
            trace!(index, generation = key.generation, reused = true, "slot inserted");
            key
        } else {
            assert!(
                self.slots.len() < u32::MAX as usize,
                "slot map capacity exceeded"
            );
            let key = Key::new(self.slots.len() as u32, 0);
            let value = f(key);
            self.slots.push(Slot {
                generation: 0,
                entry: Entry::Occupied(value),
            });
            self.len += 1;
            trace!(index = key.index, generation = 0, reused = false, "slot inserted");
            key
        }
    }

    /// Returns a reference to the value behind `key`.
    ///
    /// Fails with `StaleHandle` when the index is out of range, and with
    /// `GenerationMismatch` when the slot is free or holds a later generation.
    pub fn get(&self, key: Key) -> Result<&T> {
        let slot = self
            .slots
            .get(key.index as usize)
            .ok_or_else(|| Error::stale_handle(key))?;
        match &slot.entry {
            Entry::Occupied(value) if slot.generation == key.generation => Ok(value),
            _ => Err(Error::generation_mismatch(key, slot.generation)),
        }
    }

    /// Returns a mutable reference to the value behind `key`.
    ///
    /// Fails under the same conditions as [`SlotMap::get`].
    pub fn get_mut(&mut self, key: Key) -> Result<&mut T> {
        let slot = self
            .slots
            .get_mut(key.index as usize)
            .ok_or_else(|| Error::stale_handle(key))?;
        let generation = slot.generation;
        match &mut slot.entry {
            Entry::Occupied(value) if generation == key.generation => Ok(value),
            _ => Err(Error::generation_mismatch(key, generation)),
        }
    }

    /// Returns true if `key` addresses a live value.
    #[must_use]
    pub fn contains(&self, key: Key) -> bool {
        self.get(key).is_ok()
    }

    /// Removes the value behind `key` and returns it.
    ///
    /// Returns `None` and leaves the map untouched if the key is not valid.
    /// Otherwise the slot's generation advances and the slot becomes the
    /// head of the free list.
    pub fn remove(&mut self, key: Key) -> Option<T> {
        if !self.contains(key) {
            return None;
        }

        let slot = &mut self.slots[key.index as usize];
        // Was even/occupied, now odd/free
        slot.generation = slot.generation.wrapping_add(1);
        let entry = std::mem::replace(&mut slot.entry, Entry::Free { next: self.head });
        self.head = Some(key.index);
        self.len -= 1;
        trace!(index = key.index, generation = slot.generation, "slot erased");

        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Free { .. } => None,
        }
    }

    /// Erases the value behind `key`.
    ///
    /// Returns false if the key was already invalid.
    pub fn erase(&mut self, key: Key) -> bool {
        self.remove(key).is_some()
    }

    /// Returns the number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no live values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots, occupied or free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current generation of the slot at `index`, if it exists.
    ///
    /// This is useful for debugging and testing.
    #[must_use]
    pub fn generation(&self, index: u32) -> Option<u32> {
        self.slots.get(index as usize).map(|slot| slot.generation)
    }

    /// Iterates over live values in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match &slot.entry {
                Entry::Occupied(value) => Some((Key::new(index as u32, slot.generation), value)),
                Entry::Free { .. } => None,
            })
    }

    /// Iterates over the keys of live values in index order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.iter().map(|(key, _)| key)
    }
}
