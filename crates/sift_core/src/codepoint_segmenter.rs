//! One-token-per-character segmenter for scripts written without spaces.
//!
//! Each character's width comes from its leading byte alone (see
//! [`utf8_width`]). An invalid leading byte, or a sequence that runs past the
//! end of the buffer, ends the scan with an encoding error; no partial token
//! is ever produced.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::ScanCursor;
use crate::error::{EncodingErrorKind, SegmentError};
use crate::segmenter::Segmenter;
use crate::token::{Span, Token, TokenSink};
use crate::width::utf8_width;

/// Iterator over character spans.
///
/// Yields `Ok(span)` per character and at most one `Err`, after which it is
/// exhausted.
#[derive(Clone, Debug)]
pub struct CodepointScanner<'a> {
    cursor: ScanCursor<'a>,
    failed: bool,
}

impl<'a> CodepointScanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        CodepointScanner {
            cursor: ScanCursor::new(buf),
            failed: false,
        }
    }

    fn decode(&mut self) -> Option<Result<Span, SegmentError>> {
        if self.failed {
            return None;
        }
        let lead = self.cursor.lead_byte()?;
        let width = utf8_width(lead);
        let remaining = self.cursor.remaining();

        let kind = if width == 0 {
            EncodingErrorKind::InvalidLeadByte
        } else if width > remaining {
            EncodingErrorKind::Truncated { width, remaining }
        } else {
            self.cursor.advance_n(width);
            return Some(Ok(self.cursor.bump()));
        };

        self.failed = true;
        Some(Err(SegmentError::Encoding {
            offset: self.cursor.start(),
            byte: lead,
            kind,
        }))
    }
}

impl Iterator for CodepointScanner<'_> {
    type Item = Result<Span, SegmentError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode()
    }
}

impl FusedIterator for CodepointScanner<'_> {}

/// Segmenter that emits every character, whitespace included, verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodepointSegmenter;

impl CodepointSegmenter {
    pub fn new() -> Self {
        CodepointSegmenter
    }
}

impl Segmenter for CodepointSegmenter {
    fn name(&self) -> &'static str {
        "codepoint"
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = buf.len()))]
    fn tokenize(&self, buf: &[u8], sink: &mut dyn TokenSink) -> Result<(), SegmentError> {
        let mut emitted = 0usize;

        for decoded in CodepointScanner::new(buf) {
            let span = decoded.inspect_err(|err| debug!(%err, emitted, "undecodable input"))?;
            let status = sink.emit(Token::new(&buf[span.range()], span));
            if !status.is_ok() {
                trace!(%status, offset = span.start, "sink stopped scan");
                return Err(SegmentError::Aborted(status));
            }
            emitted += 1;
        }

        trace!(emitted, "scan complete");
        Ok(())
    }
}
