//! Tokenizer creation failures.

use sift_core::{Status, UnknownStrategy};
use thiserror::Error;

/// Why a tokenizer could not be created.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CreateError {
    /// No module is registered under this name.
    #[error("no tokenizer named `{0}`")]
    UnknownTokenizer(String),

    /// The first argument does not name a segmentation strategy.
    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),

    /// More arguments than the module understands.
    #[error("unexpected tokenizer argument `{0}`")]
    UnexpectedArgument(String),
}

impl CreateError {
    /// Host status code for this failure.
    pub fn status(&self) -> Status {
        Status::ERROR
    }
}
