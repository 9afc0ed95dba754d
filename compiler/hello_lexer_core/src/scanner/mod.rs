//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Each call to [`Scanner::next_token`] runs the same four steps:
//!
//! 1. **Indentation pass.** Blanks are skipped. For every newline found,
//!    the tabs directly after it are counted; each level beyond the current
//!    indentation queues one zero-width [`TokenKind::IndentMarker`].
//! 2. **Drain.** A queued marker is returned before any further input is
//!    looked at.
//! 3. **End check.** An exhausted input yields [`TokenKind::EndOfInput`],
//!    on this call and every later one.
//! 4. **Classify.** A `match` on the current byte picks a maximal-munch
//!    sub-scanner (numbers, identifiers) or a single-character token.
//!
//! The indentation level only grows. A line with fewer leading tabs than
//! the current level produces no token and leaves the level unchanged;
//! closing blocks is left to the grammar layer.
//!
//! Errors are encoded in-band as [`TokenKind::Unknown`], never as `Err`.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{Cursor, SourceBuffer, SourceLocation, Token, TokenKind};

/// Stateful tokenizer over an owned input.
///
/// Not reentrant: one caller drives it at a time, which `&mut self` on
/// every scanning method already enforces.
#[derive(Clone, Debug)]
pub struct Scanner {
    cursor: Cursor,
    /// Number of indentation levels currently open.
    indent_level: u32,
    /// Synthetic tokens awaiting emission, oldest first.
    pending: VecDeque<Token>,
    /// Whether `EndOfInput` has been returned at least once.
    reached_end: bool,
}

impl Scanner {
    /// Create a scanner over `input`. The scanner owns the text for its
    /// whole lifetime.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            cursor: Cursor::new(SourceBuffer::new(input)),
            indent_level: 0,
            pending: VecDeque::new(),
            reached_end: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::EndOfInput`] with an empty lexeme when the
    /// source is exhausted. Subsequent calls continue to return it.
    pub fn next_token(&mut self) -> Token {
        self.scan_indentation();

        // Queued markers always go out before the input is inspected again.
        if let Some(marker) = self.pending.pop_front() {
            return marker;
        }

        let location = self.cursor.location();
        if self.cursor.is_eof() {
            return self.end_of_input(location);
        }

        let start = self.cursor.pos();
        match self.cursor.current() {
            b'0'..=b'9' => self.number(start, location),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, location),
            b'+' => self.single(start, location, TokenKind::Plus),
            b'-' => self.single(start, location, TokenKind::Minus),
            b'*' => self.single(start, location, TokenKind::Star),
            b'/' => self.single(start, location, TokenKind::Slash),
            b'(' => self.single(start, location, TokenKind::LParen),
            b')' => self.single(start, location, TokenKind::RParen),
            b';' => self.single(start, location, TokenKind::Semicolon),
            // `{` and `}` have kinds but no scan rule yet.
            _ => self.unknown(start, location),
        }
    }

    /// Dequeue a pending synthetic token without scanning.
    pub fn pop_pending(&mut self) -> Option<Token> {
        self.pending.pop_front()
    }

    /// Number of synthetic tokens waiting to be returned.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of indentation levels opened so far.
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    /// Location of the next unread character.
    pub fn location(&self) -> SourceLocation {
        self.cursor.location()
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// `true` once the input is consumed and no synthetic token is pending.
    pub fn is_at_end(&self) -> bool {
        self.pending.is_empty() && self.cursor.is_eof()
    }

    // ─── Indentation ─────────────────────────────────────────────────

    fn scan_indentation(&mut self) {
        loop {
            self.cursor.eat_blanks();
            if !self.cursor.eat(b'\n') {
                break;
            }
            let new_level = self.cursor.eat_tabs();
            if new_level <= self.indent_level {
                continue;
            }
            // Markers sit right after the tab run, where the line's first
            // token will start.
            let location = self.cursor.location();
            trace!(
                from = self.indent_level,
                to = new_level,
                %location,
                "queueing indent markers"
            );
            while self.indent_level < new_level {
                self.pending
                    .push_back(Token::synthetic(TokenKind::IndentMarker, location));
                self.indent_level += 1;
            }
        }
    }

    // ─── End of input ────────────────────────────────────────────────

    fn end_of_input(&mut self, location: SourceLocation) -> Token {
        if !self.reached_end {
            self.reached_end = true;
            debug!(%location, indent_level = self.indent_level, "end of input");
        }
        Token::synthetic(TokenKind::EndOfInput, location)
    }

    // ─── Literals & identifiers ──────────────────────────────────────

    fn number(&mut self, start: usize, location: SourceLocation) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.finish(TokenKind::Number, start, location)
    }

    fn identifier(&mut self, start: usize, location: SourceLocation) -> Token {
        self.cursor.eat_while(is_ident_continue);
        self.finish(TokenKind::Identifier, start, location)
    }

    // ─── Single characters ───────────────────────────────────────────

    /// Single-character token: consume one character and emit `kind`.
    fn single(&mut self, start: usize, location: SourceLocation, kind: TokenKind) -> Token {
        self.cursor.bump();
        self.finish(kind, start, location)
    }

    fn unknown(&mut self, start: usize, location: SourceLocation) -> Token {
        self.cursor.bump();
        let token = self.finish(TokenKind::Unknown, start, location);
        trace!(lexeme = ?token.lexeme, %location, "unknown character");
        token
    }

    fn finish(&self, kind: TokenKind, start: usize, location: SourceLocation) -> Token {
        Token::new(kind, self.cursor.slice_from(start), location)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_end() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Returns `true` if `b` may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Convenience function: tokenize a source string and collect every token.
///
/// The final `EndOfInput` is not included. For streaming access, construct
/// a [`Scanner`] directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
