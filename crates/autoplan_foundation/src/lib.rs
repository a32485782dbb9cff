//! Generational keys, slot allocation, and errors for Autoplan.
//!
//! This crate provides:
//! - [`Key`] - Generational slot identifiers
//! - [`SlotMap`] - Arena with O(1) insert, lookup, and erase
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod key;
pub mod slotmap;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use key::Key;
pub use slotmap::SlotMap;
