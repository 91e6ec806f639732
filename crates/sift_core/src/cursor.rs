//! Bounded two-pointer cursor over the input buffer.
//!
//! The cursor tracks the span of the token being built: `start` marks its
//! first byte, `end` the next unread byte. Scanners grow the span by moving
//! `end` forward, then [`bump`](ScanCursor::bump) it off, which returns the
//! span and collapses `start` onto `end` for the next token.
//!
//! # Invariant
//!
//! `0 <= start <= end <= buf.len()` holds after every operation. All reads go
//! through bounds-checked accessors, so truncated or malformed input can end
//! a scan early but never read past the buffer.

use crate::token::Span;

/// Cursor over a byte buffer for one segmentation pass.
///
/// [`Copy`], so scanners can snapshot it freely; nothing here allocates.
#[derive(Clone, Copy, Debug)]
pub struct ScanCursor<'a> {
    buf: &'a [u8],
    /// First byte of the span under construction.
    start: usize,
    /// Next unread byte.
    end: usize,
}

impl<'a> ScanCursor<'a> {
    /// Create a cursor with an empty span at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        ScanCursor {
            buf,
            start: 0,
            end: 0,
        }
    }

    /// The byte the current span starts with, or `None` once the whole
    /// buffer has been consumed.
    #[inline]
    pub fn lead_byte(&self) -> Option<u8> {
        self.buf.get(self.start).copied()
    }

    /// The next unread byte, or `None` at the end of the buffer.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.end).copied()
    }

    /// Returns `true` once every byte has been read.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.end >= self.buf.len()
    }

    /// Offset of the first byte of the current span.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset of the next unread byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.end
    }

    /// Advance `end` by `n` bytes, stopping at the end of the buffer.
    ///
    /// Returns the number of bytes actually consumed, which is less than `n`
    /// only when the buffer ran out.
    #[inline]
    pub fn advance_n(&mut self, n: usize) -> usize {
        let step = n.min(self.remaining());
        self.end += step;
        step
    }

    /// Advance `end` while `pred` holds for the next unread byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.end += 1;
        }
    }

    /// Close the current span and start a new one where it ended.
    #[inline]
    pub fn bump(&mut self) -> Span {
        let span = Span::new(self.start, self.end);
        self.start = self.end;
        span
    }

    /// Bytes covered by `span`, or `None` if it lies outside the buffer.
    #[inline]
    pub fn slice(&self, span: Span) -> Option<&'a [u8]> {
        self.buf.get(span.range())
    }

    /// Bytes of the span under construction.
    #[inline]
    pub fn pending(&self) -> &'a [u8] {
        &self.buf[self.start..self.end]
    }
}

#[cfg(test)]
mod tests;
