//! Integration tests for the slot allocator
//!
//! Tests validity after insert, generation monotonicity, and LIFO reuse.

use autoplan_foundation::{ErrorKind, Key, SlotMap};
use proptest::prelude::*;

// =============================================================================
// Insertion
// =============================================================================

#[test]
fn inserted_key_is_immediately_valid() {
    let mut map = SlotMap::new();
    let k = map.insert("block");

    assert!(map.contains(k));
    assert_eq!(map.get(k).unwrap(), &"block");
}

#[test]
fn self_referential_records() {
    struct Record {
        me: Key,
        name: &'static str,
    }

    let mut map = SlotMap::new();
    let a = map.insert_with_key(|me| Record { me, name: "a" });
    let b = map.insert_with_key(|me| Record { me, name: "b" });

    assert_eq!(map.get(a).unwrap().me, a);
    assert_eq!(map.get(b).unwrap().me, b);
    assert_eq!(map.get(b).unwrap().name, "b");
}

// =============================================================================
// Stale keys
// =============================================================================

#[test]
fn out_of_range_key_is_stale_handle() {
    let mut map = SlotMap::new();
    map.insert(1);

    let err = map.get(Key::new(1, 0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StaleHandle(_)));
}

#[test]
fn erased_key_is_generation_mismatch() {
    let mut map = SlotMap::new();
    let k = map.insert(1);
    map.erase(k);

    let err = map.get(k).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::GenerationMismatch { .. }));
}

#[test]
fn old_key_stays_invalid_after_reuse() {
    let mut map = SlotMap::new();
    let old = map.insert("old");
    map.erase(old);
    let new = map.insert("new");

    assert_eq!(new.index, old.index);
    assert!(new.generation > old.generation);
    assert!(matches!(
        map.get(old).unwrap_err().kind,
        ErrorKind::GenerationMismatch { current: 2, .. }
    ));
    assert!(!map.erase(old));
    assert_eq!(map.get(new).unwrap(), &"new");
}

// =============================================================================
// Free-list discipline
// =============================================================================

#[test]
fn most_recently_freed_slot_is_reused_first() {
    let mut map = SlotMap::new();
    let a = map.insert('a');
    let b = map.insert('b');

    map.erase(a);
    map.erase(b);

    assert_eq!(map.insert('x').index, b.index);
    assert_eq!(map.insert('y').index, a.index);
}

#[test]
fn churn_does_not_grow_slots() {
    let mut map = SlotMap::new();
    let mut keys: Vec<_> = (0..10).map(|i| map.insert(i)).collect();

    for round in 0..100 {
        for k in &mut keys {
            assert!(map.erase(*k));
            *k = map.insert(round);
        }
    }

    assert_eq!(map.capacity(), 10);
    assert_eq!(map.len(), 10);
}

proptest! {
    #[test]
    fn no_reissued_key_equals_an_erased_one(
        ops in prop::collection::vec(any::<bool>(), 1..300)
    ) {
        let mut map = SlotMap::new();
        let mut live = Vec::new();
        let mut erased = Vec::new();

        for insert in ops {
            if insert || live.is_empty() {
                let k = map.insert(());
                prop_assert!(!erased.contains(&k));
                live.push(k);
            } else {
                let k = live.pop().unwrap();
                prop_assert!(map.erase(k));
                erased.push(k);
            }
        }
    }
}
