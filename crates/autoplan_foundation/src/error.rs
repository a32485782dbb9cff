//! Error types for the Autoplan system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::key::Key;

/// The main error type for Autoplan operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a key whose index is beyond the allocator.
    #[must_use]
    pub fn stale_handle(key: Key) -> Self {
        Self::new(ErrorKind::StaleHandle(key))
    }

    /// Creates an error for a key whose slot was erased or reused.
    #[must_use]
    pub fn generation_mismatch(key: Key, current: u32) -> Self {
        Self::new(ErrorKind::GenerationMismatch { key, current })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(predicate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            predicate: predicate.into(),
            expected,
            actual,
        })
    }

    /// Creates an error for a handle that belongs to a different store.
    #[must_use]
    pub fn foreign_handle(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::ForeignHandle { what: what.into() })
    }

    /// Creates a tokenizer error at the given position.
    #[must_use]
    pub fn lex(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::LexError {
            message: message.into(),
            line,
            column,
        })
    }

    /// Returns true if this error reports a key that no longer addresses a live entity.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::StaleHandle(_) | ErrorKind::GenerationMismatch { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Key index is outside the allocator.
    #[error("stale handle: {0:?} is out of range")]
    StaleHandle(Key),

    /// Slot exists but is free or holds a different generation.
    #[error("generation mismatch: {key:?}, slot is at generation {current}")]
    GenerationMismatch {
        /// The key that was presented.
        key: Key,
        /// The slot's present generation.
        current: u32,
    },

    /// Ground predicate argument count differs from the predicate's arity.
    #[error("arity mismatch for {predicate}: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Name of the predicate.
        predicate: String,
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// A handle from another store was combined with this one.
    #[error("foreign handle: {what} belongs to a different domain")]
    ForeignHandle {
        /// Description of the offending handle.
        what: String,
    },

    /// Tokenizer rejected the input.
    #[error("lex error at {line}:{column}: {message}")]
    LexError {
        /// Description of the problem.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or description name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the Autoplan error.
pub type Result<T> = std::result::Result<T, Error>;
