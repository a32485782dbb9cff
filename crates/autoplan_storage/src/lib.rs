//! Entity storage and typed handles for Autoplan planning domains.
//!
//! This crate provides:
//! - [`EntityStore`] - Per-kind generational allocators for types, symbols, and predicates
//! - [`Domain`] - Shared handle to one store, the entry point for creating entities
//! - [`Type`], [`Symbol`], [`Predicate`] - Revalidating entity handles
//! - [`GroundPredicate`], [`State`] - Ground facts and conjunctive states
//!
//! Everything here is single-threaded; see [`Domain`] for the threading boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod domain;
pub mod fact;
pub mod handle;
pub mod store;

pub use config::StoreConfig;
pub use domain::Domain;
pub use fact::{GroundPredicate, State};
pub use handle::{Predicate, Symbol, Type};
pub use store::{EntityStore, PredicateRecord, SymbolRecord, TypeRecord};
