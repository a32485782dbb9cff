//! Token types for domain descriptions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Reserved words that open a section of a domain description.
pub const KEYWORDS: [&str; 4] = ["types", "symbols", "predicates", "actions"];

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Section keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    /// `types`
    Types,
    /// `symbols`
    Symbols,
    /// `predicates`
    Predicates,
    /// `actions`
    Actions,
}

impl Keyword {
    /// Looks up the keyword spelled `word`.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "types" => Some(Self::Types),
            "symbols" => Some(Self::Symbols),
            "predicates" => Some(Self::Predicates),
            "actions" => Some(Self::Actions),
            _ => None,
        }
    }

    /// Returns the keyword's spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Symbols => "symbols",
            Self::Predicates => "predicates",
            Self::Actions => "actions",
        }
    }
}

/// Token types for domain descriptions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// One of [`KEYWORDS`]
    Keyword(Keyword),
    /// Run of ASCII letters that is not a keyword
    Identifier(String),

    // Punctuation
    /// `:`
    Colon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`
    Bang,

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns the punctuation token for `c`, if it is one.
    #[must_use]
    pub const fn punctuation(c: char) -> Option<Self> {
        match c {
            ':' => Some(Self::Colon),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '!' => Some(Self::Bang),
            _ => None,
        }
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "keyword",
            Self::Identifier(_) => "identifier",
            Self::Colon => "':'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Bang => "'!'",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
