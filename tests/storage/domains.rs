//! Integration tests for domain and entity handles

use autoplan_storage::{Domain, EntityStore, StoreConfig};
use proptest::prelude::*;

// =============================================================================
// Domain identity
// =============================================================================

#[test]
fn domain_equality_is_store_identity() {
    let d1 = Domain::new();
    let d2 = Domain::new();
    let s = d1.new_symbol("a");

    assert_ne!(d1, d2);
    assert_eq!(s.get_domain(), d1);
    assert_ne!(s.get_domain(), d2);
}

#[test]
fn identical_contents_are_not_equal() {
    let d1 = Domain::new();
    let d2 = Domain::new();
    d1.new_symbol("a");
    d2.new_symbol("a");

    assert_ne!(d1, d2);
}

#[test]
fn from_store_wraps_prebuilt_store() {
    let mut store = EntityStore::with_config(StoreConfig::new().with_capacity(4));
    let key = store.create_symbol("a", None);

    let d = Domain::from_store(store);
    let symbols = d.symbols();
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].key(), key);
    assert_eq!(symbols[0].name().unwrap(), "a");
}

// =============================================================================
// Symbol types
// =============================================================================

#[test]
fn symbol_type_goes_absent_when_type_removed() {
    let d = Domain::new();
    let block = d.new_type("block");
    let a = d.new_typed_symbol("a", &block).unwrap();

    assert_eq!(a.get_type().unwrap().unwrap().name().unwrap(), "block");

    assert!(d.remove_type(&block));
    let table = d.new_type("table");
    assert_eq!(table.key().index, block.key().index);

    // The recycled slot must not be reported as a's type
    assert_eq!(a.get_type().unwrap(), None);
}

#[test]
fn get_type_on_removed_symbol_fails() {
    let d = Domain::new();
    let block = d.new_type("block");
    let a = d.new_typed_symbol("a", &block).unwrap();
    d.remove_symbol(&a);

    assert!(a.get_type().unwrap_err().is_stale());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn handles_sort_by_creation_within_generation() {
    let d = Domain::new();
    let mut symbols: Vec<_> = ["c", "a", "b"].iter().map(|n| d.new_symbol(*n)).collect();
    let created = symbols.clone();
    symbols.reverse();
    symbols.sort();

    assert_eq!(symbols, created);
}

proptest! {
    #[test]
    fn every_listed_symbol_is_valid(removals in prop::collection::vec(any::<bool>(), 1..50)) {
        let d = Domain::new();
        let symbols: Vec<_> = (0..removals.len()).map(|i| d.new_symbol(format!("s{i}"))).collect();

        for (symbol, remove) in symbols.iter().zip(&removals) {
            if *remove {
                prop_assert!(d.remove_symbol(symbol));
            }
        }

        let live = d.symbols();
        prop_assert_eq!(live.len(), removals.iter().filter(|r| !**r).count());
        for s in &live {
            prop_assert!(s.is_valid());
        }
    }
}
