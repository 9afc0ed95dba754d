//! Callback-style entry point for parser generators.
//!
//! Bison-style parsers pull tokens through `yylex(lvalp, llocp)`: the
//! return value is the integer token code, and the semantic value and
//! location are written through out-parameters, either of which may be
//! absent. [`Scanner::lex`] and [`yylex`] mirror that shape on top of
//! [`Scanner::next_token`].

use crate::{Scanner, Token};

/// Semantic value slot (`YYSTYPE`). Holds the last token delivered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenValue {
    token: Option<Token>,
}

impl TokenValue {
    /// The token written by the last `lex` call, if any.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Take the token out, leaving the slot empty.
    pub fn take(&mut self) -> Option<Token> {
        self.token.take()
    }
}

/// Location slot (`YYLTYPE`): first and last character of a token.
///
/// Tokens never span lines, so `first_line == last_line` for every span
/// the adapter produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocationSpan {
    pub first_line: u32,
    pub first_column: u32,
    pub last_line: u32,
    pub last_column: u32,
}

impl Default for LocationSpan {
    fn default() -> Self {
        LocationSpan {
            first_line: 1,
            first_column: 1,
            last_line: 1,
            last_column: 1,
        }
    }
}

impl LocationSpan {
    /// Span covering `token`: `[location, location + max(len - 1, 0)]`.
    ///
    /// Zero-width tokens get a span whose first and last column coincide.
    pub fn of(token: &Token) -> Self {
        let width = u32::try_from(token.len()).unwrap_or(u32::MAX);
        let start = token.location;
        LocationSpan {
            first_line: start.line,
            first_column: start.column,
            last_line: start.line,
            last_column: start.column.saturating_add(width.saturating_sub(1)),
        }
    }
}

impl Scanner {
    /// Scan one token, fill whichever slots are present, and return the
    /// token's integer code.
    pub fn lex(&mut self, value: Option<&mut TokenValue>, span: Option<&mut LocationSpan>) -> i32 {
        let token = self.next_token();
        let code = token.kind.code();
        if let Some(span) = span {
            *span = LocationSpan::of(&token);
        }
        if let Some(value) = value {
            value.token = Some(token);
        }
        code
    }
}

/// Parser-generator hook. Equivalent to [`Scanner::lex`].
pub fn yylex(
    value: Option<&mut TokenValue>,
    span: Option<&mut LocationSpan>,
    scanner: &mut Scanner,
) -> i32 {
    scanner.lex(value, span)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use crate::{SourceLocation, TokenKind};

    fn span(first_line: u32, first_column: u32, last_line: u32, last_column: u32) -> LocationSpan {
        LocationSpan {
            first_line,
            first_column,
            last_line,
            last_column,
        }
    }

    // === Span computation ===

    #[test]
    fn span_covers_lexeme() {
        let tok = Token::new(TokenKind::Number, "123", SourceLocation::new(1, 7));
        assert_eq!(LocationSpan::of(&tok), span(1, 7, 1, 9));
    }

    #[test]
    fn span_of_single_char() {
        let tok = Token::new(TokenKind::Plus, "+", SourceLocation::new(4, 2));
        assert_eq!(LocationSpan::of(&tok), span(4, 2, 4, 2));
    }

    #[test]
    fn span_of_zero_width_token() {
        let tok = Token::synthetic(TokenKind::IndentMarker, SourceLocation::new(2, 3));
        assert_eq!(LocationSpan::of(&tok), span(2, 3, 2, 3));
    }

    #[test]
    fn span_counts_characters_not_bytes() {
        let tok = Token::new(TokenKind::Unknown, "\u{1F600}", SourceLocation::new(1, 5));
        assert_eq!(LocationSpan::of(&tok), span(1, 5, 1, 5));
    }

    #[test]
    fn default_span_is_origin() {
        assert_eq!(LocationSpan::default(), span(1, 1, 1, 1));
    }

    // === lex ===

    #[test]
    fn lex_fills_both_slots() {
        let mut scanner = Scanner::new("foo + 123;");
        let mut value = TokenValue::default();
        let mut loc = LocationSpan::default();

        let code = scanner.lex(Some(&mut value), Some(&mut loc));
        assert_eq!(code, TokenKind::Identifier.code());
        assert_eq!(value.token().unwrap().lexeme, "foo");
        assert_eq!(loc, span(1, 1, 1, 3));

        let code = scanner.lex(Some(&mut value), Some(&mut loc));
        assert_eq!(code, TokenKind::Plus.code());
        assert_eq!(loc, span(1, 5, 1, 5));

        let code = scanner.lex(Some(&mut value), Some(&mut loc));
        assert_eq!(code, TokenKind::Number.code());
        assert_eq!(value.take().unwrap().lexeme, "123");
        assert_eq!(value.token(), None);
        assert_eq!(loc, span(1, 7, 1, 9));
    }

    #[test]
    fn lex_without_slots_still_advances() {
        let mut scanner = Scanner::new("a;");
        assert_eq!(scanner.lex(None, None), TokenKind::Identifier.code());
        assert_eq!(scanner.lex(None, None), TokenKind::Semicolon.code());
        assert_eq!(scanner.lex(None, None), TokenKind::EndOfInput.code());
        assert_eq!(scanner.lex(None, None), 0);
    }

    #[test]
    fn lex_value_only() {
        let mut scanner = Scanner::new("$");
        let mut value = TokenValue::default();
        assert_eq!(scanner.lex(Some(&mut value), None), TokenKind::Unknown.code());
        assert_eq!(value.token().map(|t| t.lexeme.as_str()), Some("$"));
    }

    #[test]
    fn lex_end_of_input_span() {
        let mut scanner = Scanner::new("ab");
        let mut loc = LocationSpan::default();
        scanner.lex(None, Some(&mut loc));
        assert_eq!(scanner.lex(None, Some(&mut loc)), 0);
        assert_eq!(loc, span(1, 3, 1, 3));
    }

    #[test]
    fn yylex_delegates_to_lex() {
        let mut scanner = Scanner::new("x\n\ty");
        let mut value = TokenValue::default();
        let mut loc = LocationSpan::default();
        let codes: Vec<i32> = std::iter::from_fn(|| {
            let code = yylex(Some(&mut value), Some(&mut loc), &mut scanner);
            (code != 0).then_some(code)
        })
        .collect();
        assert_eq!(
            codes,
            vec![
                TokenKind::Identifier.code(),
                TokenKind::IndentMarker.code(),
                TokenKind::Identifier.code(),
            ]
        );
        assert_eq!(value.token().map(|t| t.kind), Some(TokenKind::EndOfInput));
        assert_eq!(loc, span(2, 3, 2, 3));
    }
}
