//! Byte classification for run-based segmentation.
//!
//! Classification is ASCII-only and looks at a single byte. Every byte at or
//! above `0x80` is [`Category::Other`], so non-ASCII letters are never merged
//! into letter runs; the segmenter instead consumes each such character as a
//! single-unit token.

/// Character class that drives run merging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    /// ASCII `A-Z` and `a-z`. Runs are merged and lowercased.
    Letter = 0,
    /// ASCII `0-9`. Runs are merged and emitted verbatim.
    Digit = 1,
    /// ASCII whitespace and control bytes (`0x00..=0x20`, `0x7F`).
    /// Runs are merged and never emitted.
    Space = 2,
    /// Everything else, including every non-ASCII byte. Never merged: each
    /// character is its own token.
    Other = 3,
}

impl Category {
    /// Classify a single byte.
    #[inline]
    pub fn of(byte: u8) -> Self {
        CATEGORY_TABLE[usize::from(byte)]
    }

    /// Returns `true` if adjacent bytes of this category merge into one run.
    #[inline]
    pub fn merges(self) -> bool {
        !matches!(self, Category::Other)
    }

    /// Returns `true` if runs of this category become tokens.
    #[inline]
    pub fn is_indexed(self) -> bool {
        !matches!(self, Category::Space)
    }

    /// Short lowercase name, used in debug output.
    pub fn name(self) -> &'static str {
        match self {
            Category::Letter => "letter",
            Category::Digit => "digit",
            Category::Space => "space",
            Category::Other => "other",
        }
    }
}

/// 256-byte lookup table replacing the chain of range tests with one read.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static CATEGORY_TABLE: [Category; 256] = {
    let mut table = [Category::Other; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = match i as u8 {
            b'a'..=b'z' | b'A'..=b'Z' => Category::Letter,
            b'0'..=b'9' => Category::Digit,
            0x00..=0x20 | 0x7F => Category::Space,
            _ => Category::Other,
        };
        i += 1;
    }
    table
};
