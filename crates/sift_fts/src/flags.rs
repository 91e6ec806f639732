//! Flag words exchanged with the host.
//!
//! Bit values match the host's C constants so they can cross the boundary
//! as raw integers.

use bitflags::bitflags;

bitflags! {
    /// Why the host is asking for tokens.
    ///
    /// The built-in segmenters produce the same tokens for every reason; the
    /// flags are accepted and traced only.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenizeFlags: u32 {
        /// Tokenizing a query string.
        const QUERY = 0x0001;
        /// The query term is a prefix query (`term*`).
        const PREFIX = 0x0002;
        /// Tokenizing a document being indexed or deleted.
        const DOCUMENT = 0x0004;
        /// Tokenizing for an auxiliary function (highlight, snippet).
        const AUX = 0x0008;
    }
}

bitflags! {
    /// Per-token flags passed to the [`HostSink`](crate::HostSink).
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u32 {
        /// The token is a synonym occupying the same position as the
        /// previous token. Never set by the built-in segmenters.
        const COLOCATED = 0x0001;
    }
}
