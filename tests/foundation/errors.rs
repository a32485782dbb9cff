//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use autoplan_foundation::{Error, ErrorKind, Key};

#[test]
fn stale_handle_display() {
    let err = Error::stale_handle(Key::new(42, 0));
    assert!(matches!(err.kind, ErrorKind::StaleHandle(_)));
    assert!(format!("{err}").contains("42v0"));
}

#[test]
fn generation_mismatch_display() {
    let err = Error::generation_mismatch(Key::new(3, 2), 3);
    let msg = format!("{err}");
    assert!(msg.contains("3v2"));
    assert!(msg.contains("generation 3"));
}

#[test]
fn foreign_handle_display() {
    let err = Error::foreign_handle("symbol Symbol(0v0)");
    assert!(format!("{err}").contains("different domain"));
}

#[test]
fn lex_error_display() {
    let err = Error::lex("unexpected character: ?", 4, 2);
    assert_eq!(format!("{err}"), "lex error at 4:2: unexpected character: ?");
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::arity_mismatch("on", 2, 0));
}
