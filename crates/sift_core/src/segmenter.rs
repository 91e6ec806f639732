//! The shared segmentation contract and strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::category_segmenter::CategorySegmenter;
use crate::codepoint_segmenter::CodepointSegmenter;
use crate::error::SegmentError;
use crate::token::TokenSink;

/// A segmentation strategy.
///
/// Implementations hold no per-call state: every `tokenize` call owns its
/// cursor and scratch space, so one segmenter may serve any number of threads
/// at once.
pub trait Segmenter: Send + Sync + fmt::Debug {
    /// Strategy name, as accepted by [`Strategy::from_name`].
    fn name(&self) -> &'static str;

    /// Segment `buf`, pushing each token into `sink` in offset order.
    ///
    /// Returns `Ok(())` once the whole buffer has been consumed. Stops at the
    /// first encoding error, allocation failure, or non-OK sink status.
    fn tokenize(&self, buf: &[u8], sink: &mut dyn TokenSink) -> Result<(), SegmentError>;
}

/// Which segmenter to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`CategorySegmenter`]: merged, lowercased runs for space-separated text.
    #[default]
    Category,
    /// [`CodepointSegmenter`]: one token per character.
    Codepoint,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Category, Strategy::Codepoint];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Category => "category",
            Strategy::Codepoint => "codepoint",
        }
    }

    /// Look up a strategy by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Build the segmenter for this strategy.
    pub fn segmenter(self) -> Box<dyn Segmenter> {
        match self {
            Strategy::Category => Box::new(CategorySegmenter::new()),
            Strategy::Codepoint => Box::new(CodepointSegmenter::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized strategy name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown segmentation strategy `{0}` (expected `category` or `codepoint`)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}
