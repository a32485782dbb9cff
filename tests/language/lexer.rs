//! Integration tests for the domain-description lexer

use autoplan_foundation::ErrorKind;
use autoplan_language::{KEYWORDS, Keyword, Lexer, TokenKind, parse};

const BLOCKS: &str = r"
types { block }
symbols {
    a : block
    b : block
}
predicates {
    on(a b)
    !clear(a)
}
";

#[test]
fn tokenizes_blocks_world() {
    let kinds: Vec<_> = Lexer::tokenize_all(BLOCKS)
        .into_iter()
        .map(|t| t.kind)
        .collect();

    assert_eq!(kinds[0], TokenKind::Keyword(Keyword::Types));
    assert_eq!(kinds[1], TokenKind::LBrace);
    assert_eq!(kinds[2], TokenKind::Identifier("block".into()));
    assert_eq!(kinds[3], TokenKind::RBrace);
    assert!(kinds.contains(&TokenKind::Bang));
    assert!(kinds.contains(&TokenKind::Colon));
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    assert!(!kinds.iter().any(|k| matches!(k, TokenKind::Error(_))));
}

#[test]
fn every_keyword_is_recognized() {
    for word in KEYWORDS {
        let tokens = Lexer::tokenize_all(word);
        assert!(matches!(tokens[0].kind, TokenKind::Keyword(_)), "{word}");
    }
}

#[test]
fn parse_returns_empty_domain() {
    let d = parse(BLOCKS).unwrap();
    assert_eq!(d.type_count(), 0);
    assert_eq!(d.symbol_count(), 0);
    assert_eq!(d.predicate_count(), 0);
}

#[test]
fn parse_rejects_digits() {
    let err = parse("symbols { block1 }").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::LexError {
            line: 1,
            column: 16,
            ..
        }
    ));
}
