//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! detected when the position has reached the source length, at which point
//! the current byte is the sentinel (`0x00`). No explicit bounds checking is
//! performed in the common case: the sentinel guarantees safe termination.
//!
//! # Interior Null Bytes
//!
//! A `0x00` at `pos < source_len` is an interior null (the scanner reports it
//! as an invalid byte); a `0x00` at `pos >= source_len` is the sentinel.

/// Outcome of skipping a `/* ... */` comment body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockComment {
    /// A closing `*/` was found.
    pub terminated: bool,
    /// Newlines consumed inside the comment.
    pub newlines: u32,
}

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after `source_len` are `0x00`.
/// This is guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Move to an absolute position at or before the sentinel.
    pub(crate) fn reset_to(&mut self, pos: u32) {
        debug_assert!(pos <= self.source_len, "cannot move past the sentinel");
        self.pos = pos;
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call at any position up to the sentinel: padding guarantees a
    /// valid read beyond the source content.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor has reached the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or end of input using `memchr`.
    ///
    /// The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Skip a block comment body. The opening `/*` must already be consumed.
    ///
    /// Comments do not nest: the first `*/` closes the comment. A `/`
    /// directly after the opener is skipped so that `/*/` stays open.
    /// On success the cursor sits just past the closing `/`; otherwise it is
    /// at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_block_comment(&mut self) -> BlockComment {
        let mut newlines = 0;
        if self.current() == b'/' && !self.is_eof() {
            self.pos += 1;
        }
        loop {
            let remaining = &self.buf[self.pos as usize..self.source_len as usize];
            let Some(offset) = memchr::memchr2(b'\n', b'/', remaining) else {
                self.pos = self.source_len;
                return BlockComment {
                    terminated: false,
                    newlines,
                };
            };
            self.pos += offset as u32;
            let byte = self.current();
            let prev = self.buf[self.pos as usize - 1];
            self.pos += 1;
            if byte == b'\n' {
                newlines += 1;
            } else if prev == b'*' {
                return BlockComment {
                    terminated: true,
                    newlines,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests;
