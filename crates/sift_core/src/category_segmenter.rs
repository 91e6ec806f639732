//! Run-merging segmenter: letters, digits, whitespace, everything else.
//!
//! Scanning and emission are separate layers. [`CategoryScanner`] yields every
//! run in the buffer, whitespace included, so its spans tile the input
//! exactly. [`CategorySegmenter`] drops the whitespace runs, lowercases the
//! letter runs, and feeds the rest to the sink.
//!
//! | Category | Run merging      | Emitted content           |
//! |----------|------------------|---------------------------|
//! | Letter   | maximal run      | ASCII-lowercased copy     |
//! | Digit    | maximal run      | view into the input       |
//! | Space    | maximal run      | not emitted               |
//! | Other    | one character    | view into the input       |

use std::iter::FusedIterator;

use tracing::trace;

use crate::category::Category;
use crate::cursor::ScanCursor;
use crate::error::SegmentError;
use crate::segmenter::Segmenter;
use crate::token::{Span, Token, TokenSink};
use crate::width::utf8_width;

/// A maximal run of one category (or a single `Other` character).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub category: Category,
    pub span: Span,
}

/// Iterator over the category runs of a buffer, whitespace included.
///
/// Consecutive runs are offset-contiguous and together cover the whole
/// buffer. Two adjacent runs never share a category unless both are
/// [`Category::Other`].
#[derive(Clone, Debug)]
pub struct CategoryScanner<'a> {
    cursor: ScanCursor<'a>,
}

impl<'a> CategoryScanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        CategoryScanner {
            cursor: ScanCursor::new(buf),
        }
    }

    /// Produce the next run, or `None` once the buffer is exhausted.
    #[inline]
    pub fn next_run(&mut self) -> Option<Run> {
        let lead = self.cursor.lead_byte()?;
        let category = Category::of(lead);
        if category.merges() {
            self.cursor.advance_n(1);
            self.cursor.eat_while(|b| Category::of(b) == category);
        } else {
            // Stray continuation and invalid bytes stand alone; a sequence cut
            // off by the end of the buffer keeps whatever bytes are left.
            self.cursor.advance_n(utf8_width(lead).max(1));
        }
        Some(Run {
            category,
            span: self.cursor.bump(),
        })
    }
}

impl Iterator for CategoryScanner<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        self.next_run()
    }
}

impl FusedIterator for CategoryScanner<'_> {}

/// Segmenter that merges same-category runs and lowercases ASCII words.
///
/// `"Hello, World! 123"` becomes `hello`, `,`, `world`, `!`, `123`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CategorySegmenter;

impl CategorySegmenter {
    pub fn new() -> Self {
        CategorySegmenter
    }
}

impl Segmenter for CategorySegmenter {
    fn name(&self) -> &'static str {
        "category"
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = buf.len()))]
    fn tokenize(&self, buf: &[u8], sink: &mut dyn TokenSink) -> Result<(), SegmentError> {
        // Per-call scratch for lowercased letter runs. Emptied after every
        // sink call and freed on every exit path by drop.
        let mut folded: Vec<u8> = Vec::new();
        let mut emitted = 0usize;

        for run in CategoryScanner::new(buf) {
            if !run.category.is_indexed() {
                continue;
            }
            let raw = &buf[run.span.range()];
            let status = if run.category == Category::Letter {
                reserve_scratch(&mut folded, raw.len())?;
                folded.extend(raw.iter().map(u8::to_ascii_lowercase));
                let status = sink.emit(Token::new(&folded, run.span));
                folded.clear();
                status
            } else {
                sink.emit(Token::new(raw, run.span))
            };
            if !status.is_ok() {
                trace!(%status, offset = run.span.start, "sink stopped scan");
                return Err(SegmentError::Aborted(status));
            }
            emitted += 1;
        }

        trace!(emitted, "scan complete");
        Ok(())
    }
}

/// Grow the case-fold scratch to hold `len` more bytes without aborting.
fn reserve_scratch(scratch: &mut Vec<u8>, len: usize) -> Result<(), SegmentError> {
    scratch
        .try_reserve(len)
        .map_err(|_| SegmentError::Allocation { len })
}
