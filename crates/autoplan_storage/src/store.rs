//! Backing storage for one planning domain.
//!
//! The `EntityStore` owns one [`SlotMap`] per entity kind. Records store
//! their own key, written at insertion through [`SlotMap::insert_with_key`].

use autoplan_foundation::{Key, Result, SlotMap};
use tracing::{debug, warn};

use crate::config::StoreConfig;

/// Stored data for a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRecord {
    /// Key this record is stored under.
    pub key: Key,
    /// Type name.
    pub name: String,
}

/// Stored data for a symbol (object).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Key this record is stored under.
    pub key: Key,
    /// Symbol name.
    pub name: String,
    /// Type of the symbol, if declared.
    ///
    /// Non-owning: the type may have been removed since, so this key must be
    /// checked against the type allocator before use.
    pub type_key: Option<Key>,
}

/// Stored data for a predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredicateRecord {
    /// Key this record is stored under.
    pub key: Key,
    /// Predicate name.
    pub name: String,
    /// Number of arguments.
    pub arity: usize,
}

/// Owns the types, symbols and predicates of one domain.
///
/// The three allocators are independent; the only cross-kind reference is
/// [`SymbolRecord::type_key`], which is allowed to go stale.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    types: SlotMap<TypeRecord>,
    symbols: SlotMap<SymbolRecord>,
    predicates: SlotMap<PredicateRecord>,
    config: StoreConfig,
}

impl EntityStore {
    /// Creates an empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store, reserving capacity per `config`.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            types: SlotMap::with_capacity(config.type_capacity),
            symbols: SlotMap::with_capacity(config.symbol_capacity),
            predicates: SlotMap::with_capacity(config.predicate_capacity),
            config,
        }
    }

    /// Returns the configuration this store was built with.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Creates a type and returns its key.
    pub fn create_type(&mut self, name: impl Into<String>) -> Key {
        let name = name.into();
        self.types.insert_with_key(|key| {
            debug!(
                kind = "type",
                %name,
                index = key.index,
                generation = key.generation,
                "entity created"
            );
            TypeRecord { key, name }
        })
    }

    /// Creates a symbol, optionally typed, and returns its key.
    pub fn create_symbol(&mut self, name: impl Into<String>, type_key: Option<Key>) -> Key {
        let name = name.into();
        self.symbols.insert_with_key(|key| {
            debug!(
                kind = "symbol",
                %name,
                index = key.index,
                generation = key.generation,
                typed = type_key.is_some(),
                "entity created"
            );
            SymbolRecord {
                key,
                name,
                type_key,
            }
        })
    }

    /// Creates a predicate and returns its key.
    pub fn create_predicate(&mut self, name: impl Into<String>, arity: usize) -> Key {
        let name = name.into();
        self.predicates.insert_with_key(|key| {
            debug!(
                kind = "predicate",
                %name,
                index = key.index,
                generation = key.generation,
                arity,
                "entity created"
            );
            PredicateRecord { key, name, arity }
        })
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Looks up a type record.
    pub fn type_record(&self, key: Key) -> Result<&TypeRecord> {
        self.types.get(key)
    }

    /// Looks up a symbol record.
    pub fn symbol_record(&self, key: Key) -> Result<&SymbolRecord> {
        self.symbols.get(key)
    }

    /// Looks up a predicate record.
    pub fn predicate_record(&self, key: Key) -> Result<&PredicateRecord> {
        self.predicates.get(key)
    }

    /// Returns the type of a symbol if it has one and that type is still live.
    ///
    /// Fails only if the symbol itself is stale.
    pub fn symbol_type(&self, key: Key) -> Result<Option<Key>> {
        let Some(type_key) = self.symbols.get(key)?.type_key else {
            return Ok(None);
        };
        if self.types.contains(type_key) {
            Ok(Some(type_key))
        } else {
            warn!(symbol = %key, %type_key, "symbol references a removed type");
            Ok(None)
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes a type. Returns false if the key was not live.
    ///
    /// Symbols referencing the type keep their key, which from now on
    /// resolves to no type.
    pub fn remove_type(&mut self, key: Key) -> bool {
        let removed = self.types.erase(key);
        if removed {
            debug!(kind = "type", %key, "entity removed");
        }
        removed
    }

    /// Removes a symbol. Returns false if the key was not live.
    pub fn remove_symbol(&mut self, key: Key) -> bool {
        let removed = self.symbols.erase(key);
        if removed {
            debug!(kind = "symbol", %key, "entity removed");
        }
        removed
    }

    /// Removes a predicate. Returns false if the key was not live.
    pub fn remove_predicate(&mut self, key: Key) -> bool {
        let removed = self.predicates.erase(key);
        if removed {
            debug!(kind = "predicate", %key, "entity removed");
        }
        removed
    }

    // =========================================================================
    // Allocators
    // =========================================================================

    /// Returns the type allocator.
    #[must_use]
    pub fn types(&self) -> &SlotMap<TypeRecord> {
        &self.types
    }

    /// Returns the symbol allocator.
    #[must_use]
    pub fn symbols(&self) -> &SlotMap<SymbolRecord> {
        &self.symbols
    }

    /// Returns the predicate allocator.
    #[must_use]
    pub fn predicates(&self) -> &SlotMap<PredicateRecord> {
        &self.predicates
    }
}
