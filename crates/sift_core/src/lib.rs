//! Byte-level text segmentation for full-text search indexing.
//!
//! Turns a raw byte buffer into a stream of indexable tokens, each carrying
//! its byte offsets into the original buffer. Two strategies share one
//! contract ([`Segmenter`]):
//!
//! - [`CategorySegmenter`] groups runs of ASCII letters or digits into single
//!   tokens, lowercases letter runs, drops whitespace/control runs, and emits
//!   every other character (punctuation, symbols, any non-ASCII character) as
//!   its own token.
//! - [`CodepointSegmenter`] emits one token per UTF-8 character, verbatim,
//!   rejecting invalid or truncated sequences.
//!
//! Both run in a single forward pass with no backtracking. Tokens are pushed
//! into a caller-supplied [`TokenSink`], which can stop the scan early by
//! returning a non-OK [`Status`].
//!
//! # Layering
//!
//! Each segmenter is split in two:
//!
//! - A scanner ([`CategoryScanner`], [`CodepointScanner`]) that walks the
//!   buffer with a [`ScanCursor`] and yields raw spans as an [`Iterator`].
//! - The segmenter proper, which drives the scanner, applies filtering and
//!   case folding, and feeds the sink.
//!
//! The scanners are public so callers that only need spans (offset
//! bookkeeping, highlighting) can skip the sink entirely.

mod category;
mod category_segmenter;
mod codepoint_segmenter;
mod cursor;
mod error;
mod segmenter;
mod token;
mod width;

pub use category::Category;
pub use category_segmenter::{CategoryScanner, CategorySegmenter, Run};
pub use codepoint_segmenter::{CodepointScanner, CodepointSegmenter};
pub use cursor::ScanCursor;
pub use error::{EncodingErrorKind, SegmentError};
pub use segmenter::{Segmenter, Strategy, UnknownStrategy};
pub use token::{OwnedToken, Span, Status, Token, TokenSink};
pub use width::utf8_width;
