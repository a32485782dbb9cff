//! Entry point from domain-description source to a [`Domain`].
//!
//! Only tokenization is defined so far: `parse` validates that the source
//! lexes cleanly and returns an empty domain. Turning sections into
//! `new_type`/`new_symbol`/`new_predicate` calls is left to a grammar layer.

use autoplan_foundation::{Error, ErrorContext, Result};
use autoplan_storage::{Domain, StoreConfig};
use tracing::trace;

use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Parses a domain description with the default store configuration.
///
/// # Errors
/// `LexError` at the first character the lexer rejects.
pub fn parse(source: &str) -> Result<Domain> {
    parse_with_config(source, StoreConfig::default())
}

/// Parses a domain description into a domain built from `config`.
///
/// # Errors
/// `LexError` at the first character the lexer rejects.
pub fn parse_with_config(source: &str, config: StoreConfig) -> Result<Domain> {
    let domain = Domain::with_config(config);
    let mut lexer = Lexer::new(source);

    loop {
        let token = lexer.next_token();
        trace!(
            kind = token.kind.name(),
            text = token.text(source),
            line = token.span.line,
            column = token.span.column,
            "token"
        );
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Error(message) => {
                let (line, column) = (token.span.line, token.span.column);
                return Err(Error::lex(message, line, column).with_context(
                    ErrorContext::new()
                        .with_position(line as usize, column as usize)
                        .with_frame("tokenize"),
                ));
            }
            _ => {}
        }
    }

    Ok(domain)
}
