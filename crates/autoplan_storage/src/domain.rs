//! The planning domain handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use autoplan_foundation::{Error, Result};

use crate::config::StoreConfig;
use crate::handle::{Predicate, SharedStore, Symbol, Type};
use crate::store::EntityStore;

/// Handle to a planning domain.
///
/// A domain owns one [`EntityStore`] through a shared reference; every
/// entity handle created from it holds the same reference, so the store
/// lives as long as its longest-lived handle. Cloning a domain yields
/// another handle to the same store.
///
/// Two domains are equal only if they share a store.
///
/// # Threading
/// The store is shared through `Rc<RefCell<_>>`, so domains and handles
/// are neither `Send` nor `Sync`. Callers sharing a domain across threads
/// must confine it to one thread or provide their own synchronized owner.
#[derive(Clone)]
pub struct Domain {
    store: SharedStore,
}

impl Default for Domain {
    fn default() -> Self {
        Self::new()
    }
}

impl Domain {
    /// Creates a domain with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(EntityStore::new())
    }

    /// Creates a domain with an empty store built from `config`.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self::from_store(EntityStore::with_config(config))
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: EntityStore) -> Self {
        Self::from_shared(Rc::new(RefCell::new(store)))
    }

    pub(crate) fn from_shared(store: SharedStore) -> Self {
        Self { store }
    }

    pub(crate) fn shared(&self) -> &SharedStore {
        &self.store
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Creates a type.
    pub fn new_type(&self, name: impl Into<String>) -> Type {
        let key = self.store.borrow_mut().create_type(name);
        Type::new(key, Rc::clone(&self.store))
    }

    /// Creates a type with the configured default name.
    pub fn new_type_unnamed(&self) -> Type {
        let name = self.store.borrow().config().unnamed_type.clone();
        self.new_type(name)
    }

    /// Returns every live type in slot order.
    #[must_use]
    pub fn types(&self) -> Vec<Type> {
        self.store
            .borrow()
            .types()
            .keys()
            .map(|key| Type::new(key, Rc::clone(&self.store)))
            .collect()
    }

    /// Removes a type. Returns false if it was already removed or belongs
    /// to another domain.
    pub fn remove_type(&self, ty: &Type) -> bool {
        ty.shares_store(&self.store) && self.store.borrow_mut().remove_type(ty.key())
    }

    /// Returns the number of live types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.store.borrow().types().len()
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// Creates an untyped symbol.
    pub fn new_symbol(&self, name: impl Into<String>) -> Symbol {
        let key = self.store.borrow_mut().create_symbol(name, None);
        Symbol::new(key, Rc::clone(&self.store))
    }

    /// Creates an untyped symbol with the configured default name.
    pub fn new_symbol_unnamed(&self) -> Symbol {
        let name = self.store.borrow().config().unnamed_symbol.clone();
        self.new_symbol(name)
    }

    /// Creates a symbol of type `ty`.
    ///
    /// Fails if `ty` belongs to another domain or has been removed.
    pub fn new_typed_symbol(&self, name: impl Into<String>, ty: &Type) -> Result<Symbol> {
        if !ty.shares_store(&self.store) {
            return Err(Error::foreign_handle(format!("type {ty:?}")));
        }
        let mut store = self.store.borrow_mut();
        store.type_record(ty.key())?;
        let key = store.create_symbol(name, Some(ty.key()));
        Ok(Symbol::new(key, Rc::clone(&self.store)))
    }

    /// Returns every live symbol in slot order.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.store
            .borrow()
            .symbols()
            .keys()
            .map(|key| Symbol::new(key, Rc::clone(&self.store)))
            .collect()
    }

    /// Removes a symbol. Returns false if it was already removed or belongs
    /// to another domain.
    pub fn remove_symbol(&self, symbol: &Symbol) -> bool {
        symbol.shares_store(&self.store) && self.store.borrow_mut().remove_symbol(symbol.key())
    }

    /// Returns the number of live symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.store.borrow().symbols().len()
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Creates a predicate taking `arity` arguments.
    pub fn new_predicate(&self, name: impl Into<String>, arity: usize) -> Predicate {
        let key = self.store.borrow_mut().create_predicate(name, arity);
        Predicate::new(key, Rc::clone(&self.store))
    }

    /// Creates a predicate with the configured default name.
    pub fn new_predicate_unnamed(&self, arity: usize) -> Predicate {
        let name = self.store.borrow().config().unnamed_predicate.clone();
        self.new_predicate(name, arity)
    }

    /// Returns every live predicate in slot order.
    #[must_use]
    pub fn predicates(&self) -> Vec<Predicate> {
        self.store
            .borrow()
            .predicates()
            .keys()
            .map(|key| Predicate::new(key, Rc::clone(&self.store)))
            .collect()
    }

    /// Removes a predicate. Returns false if it was already removed or
    /// belongs to another domain.
    pub fn remove_predicate(&self, predicate: &Predicate) -> bool {
        predicate.shares_store(&self.store)
            && self
                .store
                .borrow_mut()
                .remove_predicate(predicate.key())
    }

    /// Returns the number of live predicates.
    #[must_use]
    pub fn predicate_count(&self) -> usize {
        self.store.borrow().predicates().len()
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Eq for Domain {}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        f.debug_struct("Domain")
            .field("types", &store.types().len())
            .field("symbols", &store.symbols().len())
            .field("predicates", &store.predicates().len())
            .finish()
    }
}
