//! Integration tests for ground predicates and states

use autoplan_foundation::ErrorKind;
use autoplan_storage::{Domain, GroundPredicate, State};
use proptest::prelude::*;

#[test]
fn state_over_blocks_world() {
    let d = Domain::new();
    let on = d.new_predicate("on", 2);
    let clear = d.new_predicate("clear", 1);
    let a = d.new_symbol("a");
    let b = d.new_symbol("b");

    let mut state = State::new(&d);
    state.add_predicate(&on, &[a.clone(), b.clone()]).unwrap();
    state.add_predicate(&clear, &[a.clone()]).unwrap();

    let rendered: Vec<_> = state.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["(on a b)", "(clear a)"]);
}

#[test]
fn fact_arguments_revalidate() {
    let d = Domain::new();
    let clear = d.new_predicate("clear", 1);
    let a = d.new_symbol("a");
    let fact = GroundPredicate::new(&clear, &[a.clone()]).unwrap();

    d.remove_symbol(&a);
    assert!(fact.arguments()[0].name().unwrap_err().is_stale());
}

#[test]
fn state_rejects_facts_from_other_domain() {
    let d1 = Domain::new();
    let d2 = Domain::new();
    let p = d2.new_predicate("clear", 1);
    let x = d2.new_symbol("x");

    let mut state = State::new(&d1);
    let err = state.add_predicate(&p, &[x]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ForeignHandle { .. }));
}

proptest! {
    #[test]
    fn construction_succeeds_iff_arity_matches(arity in 0usize..6, given in 0usize..6) {
        let d = Domain::new();
        let p = d.new_predicate("p", arity);
        let args: Vec<_> = (0..given).map(|i| d.new_symbol(format!("s{i}"))).collect();

        match GroundPredicate::new(&p, &args) {
            Ok(fact) => {
                prop_assert_eq!(given, arity);
                prop_assert_eq!(fact.arity(), arity);
            }
            Err(err) => {
                prop_assert_ne!(given, arity);
                let is_arity_mismatch = matches!(err.kind, ErrorKind::ArityMismatch { .. });
                prop_assert!(is_arity_mismatch);
            }
        }
    }
}
