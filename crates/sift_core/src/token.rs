//! Tokens, spans, and the sink that receives them.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` into the segmented buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. `start` must not exceed `end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Span { start, end }
    }

    /// Number of bytes covered.
    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span as a slice index.
    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token handed to a [`TokenSink`].
///
/// `content` borrows either the input buffer (digits, symbols, codepoints) or
/// the segmenter's case-fold scratch buffer (letter runs). In both cases the
/// borrow ends when the sink returns; use [`Token::into_owned`] to keep it.
///
/// `content.len()` always equals `span.len()`: case folding is ASCII-only and
/// never changes byte length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    content: &'a [u8],
    span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn new(content: &'a [u8], span: Span) -> Self {
        debug_assert_eq!(content.len(), span.len(), "content must match span");
        Token { content, span }
    }

    /// Token bytes, possibly case-folded.
    #[inline]
    pub fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte offset of the first byte in the original buffer.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last byte in the original buffer.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Copy the token out of the borrowed buffer.
    pub fn into_owned(self) -> OwnedToken {
        OwnedToken {
            content: self.content.to_vec(),
            span: self.span,
        }
    }
}

/// A token detached from the scan that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedToken {
    pub content: Vec<u8>,
    pub span: Span,
}

impl OwnedToken {
    /// Convenience constructor, mostly for building expected values in tests.
    pub fn new(content: impl Into<Vec<u8>>, start: usize, end: usize) -> Self {
        OwnedToken {
            content: content.into(),
            span: Span::new(start, end),
        }
    }
}

/// Result code returned by a [`TokenSink`].
///
/// Mirrors the integer status codes of the hosting search engine: zero means
/// "continue", anything else aborts the scan and is handed back to the
/// caller of `tokenize` unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Status(i32);

impl Status {
    /// Success; keep scanning.
    pub const OK: Self = Status(0);
    /// Generic failure.
    pub const ERROR: Self = Status(1);
    /// Memory could not be allocated.
    pub const NOMEM: Self = Status(7);
    /// Input exceeds what the host can address.
    pub const TOOBIG: Self = Status(18);

    /// Wrap a raw host status code.
    #[inline]
    pub const fn from_code(code: i32) -> Self {
        Status(code)
    }

    /// The raw host status code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Status::OK => f.write_str("ok"),
            Status::ERROR => f.write_str("error"),
            Status::NOMEM => f.write_str("out of memory"),
            Status::TOOBIG => f.write_str("too big"),
            Status(code) => write!(f, "status {code}"),
        }
    }
}

/// Receiver for emitted tokens.
///
/// Returning anything other than [`Status::OK`] stops the scan immediately;
/// the segmenter reports it as [`SegmentError::Aborted`](crate::SegmentError::Aborted).
///
/// Implemented for closures taking a [`Token`] and for `Vec<OwnedToken>`,
/// which collects everything and never aborts.
pub trait TokenSink {
    fn emit(&mut self, token: Token<'_>) -> Status;
}

impl<F> TokenSink for F
where
    F: FnMut(Token<'_>) -> Status,
{
    #[inline]
    fn emit(&mut self, token: Token<'_>) -> Status {
        self(token)
    }
}

impl TokenSink for Vec<OwnedToken> {
    fn emit(&mut self, token: Token<'_>) -> Status {
        self.push(token.into_owned());
        Status::OK
    }
}

#[cfg(test)]
mod tests;
