//! Ground facts and states.
//!
//! A [`GroundPredicate`] applies a predicate to concrete symbols; a
//! [`State`] is a conjunction of ground predicates over one domain.

use std::fmt;
use std::rc::Rc;

use autoplan_foundation::{Error, Result};

use crate::domain::Domain;
use crate::handle::{Predicate, SharedStore, Symbol};

/// A predicate applied to concrete arguments.
///
/// Construction checks the argument count against the predicate's arity, so
/// an ill-formed ground predicate cannot exist. The stored handles are
/// revalidated independently whenever they are dereferenced.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroundPredicate {
    predicate: Predicate,
    arguments: Vec<Symbol>,
}

impl GroundPredicate {
    /// Creates a ground predicate.
    ///
    /// # Errors
    /// - `ArityMismatch` if `arguments.len()` differs from the predicate's arity
    /// - `ForeignHandle` if an argument belongs to another domain
    /// - `StaleHandle`/`GenerationMismatch` if the predicate was removed
    pub fn new(predicate: &Predicate, arguments: &[Symbol]) -> Result<Self> {
        let arity = predicate.arity()?;
        if arguments.len() != arity {
            return Err(Error::arity_mismatch(
                predicate.name()?,
                arity,
                arguments.len(),
            ));
        }
        if let Some(foreign) = arguments
            .iter()
            .find(|symbol| !symbol.shares_store(predicate.store()))
        {
            return Err(Error::foreign_handle(format!("symbol {foreign:?}")));
        }

        Ok(Self {
            predicate: predicate.clone(),
            arguments: arguments.to_vec(),
        })
    }

    /// Returns the predicate.
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns the arguments in order.
    #[must_use]
    pub fn arguments(&self) -> &[Symbol] {
        &self.arguments
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl fmt::Debug for GroundPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.predicate, self.arguments)
    }
}

impl fmt::Display for GroundPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.predicate)?;
        for arg in &self.arguments {
            write!(f, " {arg}")?;
        }
        write!(f, ")")
    }
}

/// A conjunctive set of ground facts over one domain.
///
/// Facts are kept in insertion order. Facts from another domain are rejected.
#[derive(Clone)]
pub struct State {
    store: SharedStore,
    facts: Vec<GroundPredicate>,
}

impl State {
    /// Creates an empty state over `domain`.
    #[must_use]
    pub fn new(domain: &Domain) -> Self {
        Self {
            store: Rc::clone(domain.shared()),
            facts: Vec::new(),
        }
    }

    /// Returns the domain this state belongs to.
    #[must_use]
    pub fn domain(&self) -> Domain {
        Domain::from_shared(Rc::clone(&self.store))
    }

    /// Appends a fact.
    ///
    /// # Errors
    /// `ForeignHandle` if the fact's predicate belongs to another domain.
    pub fn add(&mut self, fact: GroundPredicate) -> Result<()> {
        if !fact.predicate.shares_store(&self.store) {
            return Err(Error::foreign_handle(format!("predicate {:?}", fact.predicate)));
        }
        self.facts.push(fact);
        Ok(())
    }

    /// Builds a ground predicate and appends it.
    ///
    /// # Errors
    /// Any error from [`GroundPredicate::new`] or [`State::add`].
    pub fn add_predicate(&mut self, predicate: &Predicate, arguments: &[Symbol]) -> Result<()> {
        let fact = GroundPredicate::new(predicate, arguments)?;
        self.add(fact)
    }

    /// Returns true if `fact` has been added.
    #[must_use]
    pub fn contains(&self, fact: &GroundPredicate) -> bool {
        self.facts.contains(fact)
    }

    /// Returns the facts in insertion order.
    #[must_use]
    pub fn facts(&self) -> &[GroundPredicate] {
        &self.facts
    }

    /// Iterates over the facts.
    pub fn iter(&self) -> impl Iterator<Item = &GroundPredicate> {
        self.facts.iter()
    }

    /// Returns the number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if the state holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").field("facts", &self.facts).finish()
    }
}
