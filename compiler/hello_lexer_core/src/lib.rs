//! Indentation-aware tokenizer.
//!
//! Converts source text into [`Token`]s one at a time. The scanner
//! recognizes identifiers, integer literals, a fixed set of single-character
//! operators, and an indentation signal: every tab that deepens the leading
//! tab run of a line queues one zero-width [`TokenKind::IndentMarker`].
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the input.
//! - [`Cursor`]: byte position plus line/column tracking over the buffer.
//! - [`Scanner`]: the token state machine, including the pending queue of
//!   synthetic tokens.
//! - [`adapter`]: the callback-style entry point expected by parser
//!   generators (`yylex`).
//!
//! Scanning never fails. Characters outside the vocabulary come back as
//! [`TokenKind::Unknown`] tokens, and the caller decides what they mean.

pub mod adapter;
mod cursor;
mod location;
mod scanner;
mod source_buffer;
mod token;

pub use adapter::{yylex, LocationSpan, TokenValue};
pub use cursor::Cursor;
pub use location::SourceLocation;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
