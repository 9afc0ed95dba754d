//! Line/column source positions.

use std::fmt;

/// Position of the first character of a token.
///
/// Both fields are 1-indexed. Columns count characters, not bytes.
/// Ordering is lexicographic by `(line, column)`, which is the order in
/// which the scanner produces tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Line 1, column 1.
    pub const START: SourceLocation = SourceLocation { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        SourceLocation { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
