//! Segmentation failures.
//!
//! Every failure ends the current `tokenize` call. Tokens emitted before the
//! failure point have already reached the sink and are not retracted.

use thiserror::Error;

use crate::token::Status;

/// Why a `tokenize` call stopped before consuming the whole buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// The buffer holds a byte sequence the segmenter cannot decode.
    #[error("{kind} at offset {offset} (byte 0x{byte:02X})")]
    Encoding {
        /// Offset of the offending leading byte.
        offset: usize,
        /// The offending leading byte.
        byte: u8,
        kind: EncodingErrorKind,
    },

    /// The case-fold scratch buffer could not be grown.
    #[error("failed to allocate {len} bytes for case folding")]
    Allocation { len: usize },

    /// The token sink asked to stop. Carries the sink's status unchanged.
    #[error("token sink stopped the scan ({0})")]
    Aborted(Status),
}

/// What was wrong with an undecodable sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncodingErrorKind {
    /// The byte cannot start a UTF-8 sequence.
    #[error("invalid leading byte")]
    InvalidLeadByte,

    /// The sequence needs more bytes than the buffer has left.
    #[error("truncated {width}-byte sequence with {remaining} bytes left")]
    Truncated { width: usize, remaining: usize },
}

impl SegmentError {
    /// Host status code for this failure.
    ///
    /// Sink aborts hand back the sink's own status, so the host sees exactly
    /// what its callback returned.
    pub fn status(self) -> Status {
        match self {
            SegmentError::Encoding { .. } => Status::ERROR,
            SegmentError::Allocation { .. } => Status::NOMEM,
            SegmentError::Aborted(status) => status,
        }
    }

    /// Returns `true` if the sink, not the segmenter, ended the scan.
    pub fn is_abort(self) -> bool {
        matches!(self, SegmentError::Aborted(_))
    }
}
