use super::*;

// === Discriminants ===

#[test]
fn codes_are_stable() {
    assert_eq!(TokenKind::EndOfInput.code(), 0);
    assert_eq!(TokenKind::Def.code(), 1);
    assert_eq!(TokenKind::CDef.code(), 2);
    assert_eq!(TokenKind::Identifier.code(), 3);
    assert_eq!(TokenKind::Number.code(), 4);
    assert_eq!(TokenKind::Plus.code(), 5);
    assert_eq!(TokenKind::Semicolon.code(), 11);
    assert_eq!(TokenKind::RBrace.code(), 13);
    assert_eq!(TokenKind::IndentMarker.code(), 14);
    assert_eq!(TokenKind::Unknown.code(), 15);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn all_is_indexed_by_code() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(usize::try_from(kind.code()).ok(), Some(index), "{kind:?}");
    }
}

#[test]
fn from_code_inverts_code() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_code(kind.code()), Some(kind));
    }
}

#[test]
fn from_code_rejects_out_of_range() {
    assert_eq!(TokenKind::from_code(-1), None);
    assert_eq!(TokenKind::from_code(16), None);
    assert_eq!(TokenKind::from_code(i32::MAX), None);
}

// === Lexeme ===

#[test]
fn fixed_lexeme_single_char_operators() {
    assert_eq!(TokenKind::Plus.fixed_lexeme(), Some("+"));
    assert_eq!(TokenKind::Minus.fixed_lexeme(), Some("-"));
    assert_eq!(TokenKind::Star.fixed_lexeme(), Some("*"));
    assert_eq!(TokenKind::Slash.fixed_lexeme(), Some("/"));
    assert_eq!(TokenKind::LParen.fixed_lexeme(), Some("("));
    assert_eq!(TokenKind::RParen.fixed_lexeme(), Some(")"));
    assert_eq!(TokenKind::Semicolon.fixed_lexeme(), Some(";"));
}

#[test]
fn fixed_lexeme_none_for_variable_kinds() {
    assert_eq!(TokenKind::Identifier.fixed_lexeme(), None);
    assert_eq!(TokenKind::Number.fixed_lexeme(), None);
    assert_eq!(TokenKind::Unknown.fixed_lexeme(), None);
    assert_eq!(TokenKind::Def.fixed_lexeme(), None);
    assert_eq!(TokenKind::IndentMarker.fixed_lexeme(), None);
    assert_eq!(TokenKind::EndOfInput.fixed_lexeme(), None);
}

#[test]
fn synthetic_kinds() {
    let synthetic: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_synthetic())
        .collect();
    assert_eq!(
        synthetic,
        vec![TokenKind::EndOfInput, TokenKind::IndentMarker]
    );
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::Semicolon.to_string(), ";");
    assert_eq!(TokenKind::IndentMarker.to_string(), "indent");
}

// === Token ===

#[test]
fn synthetic_token_has_empty_lexeme() {
    let tok = Token::synthetic(TokenKind::IndentMarker, SourceLocation::new(2, 3));
    assert!(tok.is_empty());
    assert_eq!(tok.len(), 0);
    assert_eq!(tok.location, SourceLocation::new(2, 3));
}

#[test]
fn len_counts_characters() {
    let tok = Token::new(TokenKind::Unknown, "\u{e9}", SourceLocation::START);
    assert_eq!(tok.len(), 1);
    assert_eq!(tok.lexeme.len(), 2);
}

#[test]
fn debug_format() {
    let tok = Token::new(TokenKind::Number, "123", SourceLocation::new(1, 7));
    assert_eq!(format!("{tok:?}"), "Number \"123\" @ 1:7");
}

#[test]
fn is_end() {
    assert!(Token::synthetic(TokenKind::EndOfInput, SourceLocation::START).is_end());
    assert!(!Token::new(TokenKind::Plus, "+", SourceLocation::START).is_end());
}
