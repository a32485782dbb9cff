//! End-to-end scenarios over a blocks-world domain

use autoplan_foundation::ErrorKind;
use autoplan_storage::{Domain, GroundPredicate};

#[test]
fn distinct_symbols() {
    let d = Domain::new();
    let s1 = d.new_symbol("block1");
    let s2 = d.new_symbol("block2");

    assert_ne!(s1, s2);
    assert_eq!(s1.name().unwrap(), "block1");
    assert_eq!(s2.name().unwrap(), "block2");
}

#[test]
fn ground_predicate_arity() {
    let d = Domain::new();
    let s1 = d.new_symbol("block1");
    let s2 = d.new_symbol("block2");
    let p = d.new_predicate("on", 2);

    assert_eq!(p.arity().unwrap(), 2);

    let err = GroundPredicate::new(&p, &[s1.clone()]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { .. }));

    assert!(GroundPredicate::new(&p, &[s1, s2]).is_ok());
}

#[test]
fn removed_symbol_name_fails() {
    let d = Domain::new();
    let s1 = d.new_symbol("block1");

    assert!(d.remove_symbol(&s1));

    let err = s1.name().unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::StaleHandle(_) | ErrorKind::GenerationMismatch { .. }
    ));
}

#[test]
fn removed_slot_is_reused_with_higher_generation() {
    let d = Domain::new();
    let _first = d.new_symbol("a");
    let second = d.new_symbol("b");
    let _third = d.new_symbol("c");

    assert!(d.remove_symbol(&second));
    let fourth = d.new_symbol("d");

    assert_eq!(fourth.key().index, second.key().index);
    assert!(fourth.key().generation > second.key().generation);
    assert!(!second.is_valid());
    assert!(second.name().is_err());
    assert_ne!(fourth, second);
    assert_eq!(fourth.name().unwrap(), "d");
}
