//! Opaque tokenizer handles and the host-side token callback.

use std::fmt;

use sift_core::{Segmenter, Status, Strategy, Token};
use tracing::{debug, trace, warn};

use crate::flags::{TokenFlags, TokenizeFlags};

/// Host-side token callback.
///
/// Receives the token flags, the token bytes (valid only for the duration of
/// the call), and the token's `[start, end)` byte offsets in the document.
/// Any status other than [`Status::OK`] aborts the rest of the document and
/// becomes the return value of [`Tokenizer::tokenize`].
pub trait HostSink {
    fn token(&mut self, flags: TokenFlags, content: &[u8], start: i32, end: i32) -> Status;
}

impl<F> HostSink for F
where
    F: FnMut(TokenFlags, &[u8], i32, i32) -> Status,
{
    #[inline]
    fn token(&mut self, flags: TokenFlags, content: &[u8], start: i32, end: i32) -> Status {
        self(flags, content, start, end)
    }
}

/// A tokenizer instance handed to the host.
///
/// Created by a [`TokenizerModule`](crate::TokenizerModule); destroyed by
/// dropping it. The handle holds no per-document state, so one instance can
/// tokenize many documents, from several threads at once.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
}

impl Tokenizer {
    /// Wrap an arbitrary segmenter.
    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        Tokenizer { segmenter }
    }

    /// Build a tokenizer for one of the built-in strategies.
    pub fn for_strategy(strategy: Strategy) -> Self {
        Tokenizer::new(strategy.segmenter())
    }

    /// Name of the underlying segmentation strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.segmenter.name()
    }

    /// Tokenize one buffer, forwarding every token to `sink`.
    ///
    /// Returns [`Status::OK`] once the whole buffer has been consumed, the
    /// sink's own status if it aborted, [`Status::ERROR`] for undecodable
    /// input, [`Status::NOMEM`] if scratch memory ran out, and
    /// [`Status::TOOBIG`] if the buffer is too large for 32-bit offsets.
    pub fn tokenize(&self, flags: TokenizeFlags, buf: &[u8], sink: &mut dyn HostSink) -> Status {
        if i32::try_from(buf.len()).is_err() {
            warn!(len = buf.len(), "buffer exceeds host offset range");
            return Status::TOOBIG;
        }
        trace!(?flags, len = buf.len(), strategy = self.strategy_name(), "tokenize");

        let mut forward = |token: Token<'_>| match (
            i32::try_from(token.start()),
            i32::try_from(token.end()),
        ) {
            (Ok(start), Ok(end)) => sink.token(TokenFlags::empty(), token.content(), start, end),
            _ => Status::TOOBIG,
        };

        match self.segmenter.tokenize(buf, &mut forward) {
            Ok(()) => Status::OK,
            Err(err) => {
                if !err.is_abort() {
                    debug!(%err, "tokenize failed");
                }
                err.status()
            }
        }
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}
