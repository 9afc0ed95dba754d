//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can read the "current" byte at any position up to and
//! including the end without an explicit bounds check. The total buffer size
//! is rounded up to the next 64-byte boundary.
//!
//! Interior null bytes are legal input: they scan as `Unknown` tokens. The
//! cursor tells them apart from the sentinel by comparing against
//! [`SourceBuffer::len`].

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated copy of the text being scanned.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: usize,
}

impl SourceBuffer {
    /// Take ownership of `source` and append the sentinel and padding.
    ///
    /// A `String` argument is moved, reusing its allocation when it has
    /// enough spare capacity.
    pub fn new(source: impl Into<String>) -> Self {
        let mut buf = source.into().into_bytes();
        let source_len = buf.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        buf.resize(padded_len, 0);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Byte at `pos`. Any position up to [`len()`](Self::len) is valid and
    /// reading exactly at `len()` yields the sentinel.
    #[inline]
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.buf[pos]
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> usize {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
