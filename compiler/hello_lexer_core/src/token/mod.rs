//! Token kinds and tokens.

use crate::SourceLocation;
use std::fmt;

/// Token kind, with stable `u8` discriminants.
///
/// Discriminants are part of the parser-generator contract: the adapter
/// returns them as `i32` token codes, so variants must never be reordered.
///
/// `Def` and `CDef` are reserved vocabulary slots. No scan rule produces
/// them; identifiers are never looked up in a keyword table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    EndOfInput = 0,
    Def = 1,
    CDef = 2,
    Identifier = 3,
    Number = 4,
    Plus = 5,
    Minus = 6,
    Star = 7,
    Slash = 8,
    LParen = 9,
    RParen = 10,
    Semicolon = 11,
    LBrace = 12,
    RBrace = 13,
    /// Zero-width marker: one per indentation level entered.
    IndentMarker = 14,
    /// A character outside the vocabulary.
    Unknown = 15,
}

impl TokenKind {
    /// Every kind, indexed by discriminant.
    pub const ALL: [TokenKind; 16] = [
        Self::EndOfInput,
        Self::Def,
        Self::CDef,
        Self::Identifier,
        Self::Number,
        Self::Plus,
        Self::Minus,
        Self::Star,
        Self::Slash,
        Self::LParen,
        Self::RParen,
        Self::Semicolon,
        Self::LBrace,
        Self::RBrace,
        Self::IndentMarker,
        Self::Unknown,
    ];

    /// Integer token code handed to parser generators.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Inverse of [`code()`](Self::code).
    pub fn from_code(code: i32) -> Option<TokenKind> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Human-readable name, used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EndOfInput => "end of input",
            Self::Def => "def",
            Self::CDef => "cdef",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::IndentMarker => "indent",
            Self::Unknown => "unknown character",
        }
    }

    /// The fixed spelling of punctuation kinds.
    ///
    /// Returns `None` for kinds whose lexeme depends on the input
    /// (identifiers, numbers, unknown characters), for the reserved keyword
    /// slots, and for the zero-width kinds.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::Semicolon => Some(";"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::EndOfInput
            | Self::Def
            | Self::CDef
            | Self::Identifier
            | Self::Number
            | Self::IndentMarker
            | Self::Unknown => None,
        }
    }

    /// `true` for kinds the scanner makes up rather than reads: they are
    /// always zero-width.
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Self::EndOfInput | Self::IndentMarker)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, located piece of source text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// The text the token was scanned from. Empty for synthetic kinds.
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// A zero-width token with an empty lexeme.
    pub fn synthetic(kind: TokenKind, location: SourceLocation) -> Self {
        Token {
            kind,
            lexeme: String::new(),
            location,
        }
    }

    /// Lexeme length in characters.
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.lexeme, self.location)
    }
}

#[cfg(test)]
mod tests;
