//! Handles to entities in a domain's store.
//!
//! A handle pairs a [`Key`] with a shared reference to the backing
//! [`EntityStore`]. Every accessor goes back through the store, which
//! revalidates the key, so a handle to a removed entity fails instead of
//! reading stale data.
//!
//! Handles compare by identity: same key in the same store. Ordering follows
//! the key's packed id, with the store address as tie-breaker so handles
//! from different stores never compare equal.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use autoplan_foundation::{Key, Result};

use crate::domain::Domain;
use crate::store::EntityStore;

/// Store reference shared by a domain and every handle derived from it.
pub(crate) type SharedStore = Rc<RefCell<EntityStore>>;

macro_rules! handle_identity {
    ($handle:ident) => {
        impl $handle {
            /// Returns the key of this entity.
            #[must_use]
            pub fn key(&self) -> Key {
                self.key
            }

            /// Returns a handle to the owning domain.
            #[must_use]
            pub fn get_domain(&self) -> Domain {
                Domain::from_shared(Rc::clone(&self.store))
            }

            /// Returns true if `domain` owns this entity's store.
            #[must_use]
            pub fn belongs_to(&self, domain: &Domain) -> bool {
                Rc::ptr_eq(&self.store, domain.shared())
            }

            pub(crate) fn shares_store(&self, store: &SharedStore) -> bool {
                Rc::ptr_eq(&self.store, store)
            }
        }

        impl PartialEq for $handle {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key && Rc::ptr_eq(&self.store, &other.store)
            }
        }

        impl Eq for $handle {}

        impl Hash for $handle {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.key.id().hash(state);
            }
        }

        impl PartialOrd for $handle {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $handle {
            fn cmp(&self, other: &Self) -> Ordering {
                self.key
                    .cmp(&other.key)
                    .then_with(|| Rc::as_ptr(&self.store).cmp(&Rc::as_ptr(&other.store)))
            }
        }

        impl fmt::Debug for $handle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}v{})", stringify!($handle), self.key.index, self.key.generation)
            }
        }

        impl fmt::Display for $handle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Ok(name) => f.write_str(&name),
                    Err(_) => write!(f, "<stale {}>", self.key),
                }
            }
        }
    };
}

/// Handle to a type.
#[derive(Clone)]
pub struct Type {
    key: Key,
    store: SharedStore,
}

impl Type {
    pub(crate) fn new(key: Key, store: SharedStore) -> Self {
        Self { key, store }
    }

    /// Returns the type's name.
    pub fn name(&self) -> Result<String> {
        Ok(self.store.borrow().type_record(self.key)?.name.clone())
    }

    /// Returns true if the type has not been removed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.store.borrow().types().contains(self.key)
    }
}

handle_identity!(Type);

/// Handle to a symbol (an object of the domain).
#[derive(Clone)]
pub struct Symbol {
    key: Key,
    store: SharedStore,
}

impl Symbol {
    pub(crate) fn new(key: Key, store: SharedStore) -> Self {
        Self { key, store }
    }

    /// Returns the symbol's name.
    pub fn name(&self) -> Result<String> {
        Ok(self.store.borrow().symbol_record(self.key)?.name.clone())
    }

    /// Returns true if the symbol has not been removed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.store.borrow().symbols().contains(self.key)
    }

    /// Returns the symbol's type.
    ///
    /// `Ok(None)` if the symbol is untyped or its type has since been
    /// removed. Fails if the symbol itself is stale.
    pub fn get_type(&self) -> Result<Option<Type>> {
        let type_key = self.store.borrow().symbol_type(self.key)?;
        Ok(type_key.map(|key| Type::new(key, Rc::clone(&self.store))))
    }
}

handle_identity!(Symbol);

/// Handle to a predicate.
#[derive(Clone)]
pub struct Predicate {
    key: Key,
    store: SharedStore,
}

impl Predicate {
    pub(crate) fn new(key: Key, store: SharedStore) -> Self {
        Self { key, store }
    }

    /// Returns the predicate's name.
    pub fn name(&self) -> Result<String> {
        Ok(self.store.borrow().predicate_record(self.key)?.name.clone())
    }

    /// Returns the number of arguments the predicate takes.
    pub fn arity(&self) -> Result<usize> {
        Ok(self.store.borrow().predicate_record(self.key)?.arity)
    }

    /// Returns true if the predicate has not been removed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.store.borrow().predicates().contains(self.key)
    }

    pub(crate) fn store(&self) -> &SharedStore {
        &self.store
    }
}

handle_identity!(Predicate);
