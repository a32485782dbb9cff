//! Integration tests for Layer 1: Storage
//!
//! Tests for domains, entity handles, ground predicates, and states.

mod domains;
mod facts;
mod scenarios;
