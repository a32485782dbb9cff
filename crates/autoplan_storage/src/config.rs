//! Configuration for entity stores.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for an [`EntityStore`](crate::EntityStore).
///
/// Controls initial allocator capacity and the names given to entities
/// created without one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoreConfig {
    /// Slots reserved up front for types.
    pub type_capacity: usize,

    /// Slots reserved up front for symbols.
    pub symbol_capacity: usize,

    /// Slots reserved up front for predicates.
    pub predicate_capacity: usize,

    /// Name given to types created without one.
    pub unnamed_type: String,

    /// Name given to symbols created without one.
    pub unnamed_symbol: String,

    /// Name given to predicates created without one.
    pub unnamed_predicate: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            type_capacity: 0,
            symbol_capacity: 0,
            predicate_capacity: 0,
            unnamed_type: "unnamed_type".to_string(),
            unnamed_symbol: "unnamed_symbol".to_string(),
            unnamed_predicate: "unnamed_predicate".to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to reserve the same capacity for every entity kind.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.type_capacity = capacity;
        self.symbol_capacity = capacity;
        self.predicate_capacity = capacity;
        self
    }

    /// Builder method to set type capacity.
    #[must_use]
    pub fn with_type_capacity(mut self, capacity: usize) -> Self {
        self.type_capacity = capacity;
        self
    }

    /// Builder method to set symbol capacity.
    #[must_use]
    pub fn with_symbol_capacity(mut self, capacity: usize) -> Self {
        self.symbol_capacity = capacity;
        self
    }

    /// Builder method to set predicate capacity.
    #[must_use]
    pub fn with_predicate_capacity(mut self, capacity: usize) -> Self {
        self.predicate_capacity = capacity;
        self
    }

    /// Builder method to set the default type name.
    #[must_use]
    pub fn with_unnamed_type(mut self, name: impl Into<String>) -> Self {
        self.unnamed_type = name.into();
        self
    }

    /// Builder method to set the default symbol name.
    #[must_use]
    pub fn with_unnamed_symbol(mut self, name: impl Into<String>) -> Self {
        self.unnamed_symbol = name.into();
        self
    }

    /// Builder method to set the default predicate name.
    #[must_use]
    pub fn with_unnamed_predicate(mut self, name: impl Into<String>) -> Self {
        self.unnamed_predicate = name.into();
        self
    }
}
