//! Generational slot keys.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key identifying one slot of a [`SlotMap`](crate::SlotMap) at one generation.
///
/// The generation changes every time the slot is emptied or refilled, so a key
/// issued before an erase can never address the value inserted afterwards.
///
/// # Layout
/// - `index`: 32-bit position in the slot sequence
/// - `generation`: 32-bit counter of the slot's occupied/free transitions
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Key {
    /// Position of the slot.
    pub index: u32,
    /// Generation the slot had when this key was issued.
    pub generation: u32,
}

impl Key {
    /// Creates a key from its parts.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Packs the key into one value, generation in the high half.
    ///
    /// The packed value defines the total order of keys.
    #[must_use]
    pub const fn id(self) -> u64 {
        ((self.generation as u64) << 32) | self.index as u64
    }

    /// Inverse of [`Key::id`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_id(id: u64) -> Self {
        Self {
            index: (id & 0xFFFF_FFFF) as u32,
            generation: (id >> 32) as u32,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id().cmp(&other.id())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({}v{})", self.index, self.generation)
    }
}
