//! Tokenizer for Autoplan domain descriptions.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of domain-description source
//! - [`Token`], [`TokenKind`], [`Keyword`] - Token types
//! - [`Span`] - Source positions
//! - [`parse`] - Source-to-[`Domain`](autoplan_storage::Domain) entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use lexer::Lexer;
pub use parser::{parse, parse_with_config};
pub use span::Span;
pub use token::{KEYWORDS, Keyword, Token, TokenKind};
