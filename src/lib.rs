//! Autoplan - data representation for automated planning
//!
//! This crate re-exports all layers of the Autoplan system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: autoplan_language   — Domain-description tokenizer
//! Layer 1: autoplan_storage    — Entity store, domain and entity handles, states
//! Layer 0: autoplan_foundation — Core types (Key, SlotMap, Error)
//! ```

pub use autoplan_foundation as foundation;
pub use autoplan_language as language;
pub use autoplan_storage as storage;
