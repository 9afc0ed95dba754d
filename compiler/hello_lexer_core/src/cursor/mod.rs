//! Line-tracking cursor over a sentinel-terminated buffer.
//!
//! The cursor owns its [`SourceBuffer`] and advances through it one
//! character at a time. EOF is detected when the current byte equals the
//! sentinel (`0x00`) and the position has reached the source length; a null
//! byte before that point is ordinary (if unexpected) content.
//!
//! # Position tracking
//!
//! `line` and `column` change in exactly two places: [`Cursor::bump`] and
//! [`Cursor::eat_while`]. Consuming `\n` increments the line and resets the
//! column to 1; consuming any other character increments the column by one,
//! regardless of how many UTF-8 bytes the character occupies.

use std::borrow::Cow;

use crate::{SourceBuffer, SourceLocation};

/// Read position plus derived line/column counters.
#[derive(Clone, Debug)]
pub struct Cursor {
    buf: SourceBuffer,
    /// Current read position (byte index into the buffer).
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    /// Create a cursor at line 1, column 1.
    pub fn new(buf: SourceBuffer) -> Self {
        Self {
            buf,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF (the sentinel). Interior null bytes also return
    /// `0x00`; use [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.byte_at(self.pos)
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.buf.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Location of the character under the cursor.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Consume one full character, updating line and column.
    ///
    /// Does nothing at EOF.
    pub fn bump(&mut self) {
        if self.is_eof() {
            return;
        }
        let lead = self.current();
        if lead == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos = (self.pos + utf8_char_width(lead)).min(self.buf.len());
    }

    /// Consume `byte` if it is the current byte.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.current() == byte && !self.is_eof() {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred` may only accept ASCII bytes other than `\n` and `0x00`. Each
    /// accepted byte is then exactly one character on the current line,
    /// and the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        loop {
            let b = self.current();
            if !pred(b) {
                break;
            }
            debug_assert!(
                b.is_ascii() && b != b'\n' && b != 0,
                "eat_while predicate accepted {b:#04x}"
            );
            self.pos += 1;
            self.column += 1;
        }
    }

    /// Skip inter-token blanks: spaces, tabs, and carriage returns.
    #[inline]
    pub fn eat_blanks(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t' || b == b'\r');
    }

    /// Consume a run of tabs and return its length.
    pub fn eat_tabs(&mut self) -> u32 {
        let start = self.column;
        self.eat_while(|b| b == b'\t');
        self.column - start
    }

    /// Extract the source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Offsets taken from [`pos()`](Self::pos) between calls to `bump` and
    /// `eat_while` always are, so the result is borrowed in practice.
    pub fn slice(&self, start: usize, end: usize) -> Cow<'_, str> {
        debug_assert!(
            end <= self.buf.len(),
            "slice end {end} exceeds source length {}",
            self.buf.len()
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        String::from_utf8_lossy(&self.buf.as_bytes()[start..end])
    }

    /// Extract the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> Cow<'_, str> {
        self.slice(start, self.pos)
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
