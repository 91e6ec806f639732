//! Host adapter: exposes the `sift_core` segmenters the way a full-text
//! search engine expects to find tokenizers.
//!
//! The host looks tokenizers up by name in a [`Registry`], creates an opaque
//! [`Tokenizer`] from a list of string arguments, calls
//! [`Tokenizer::tokenize`] once per document or query, and drops the handle
//! when done. Tokens arrive through a [`HostSink`] with 32-bit offsets and
//! per-token [`TokenFlags`]; results come back as integer [`Status`] codes.
//!
//! Built-in names:
//!
//! | Name        | Default strategy |
//! |-------------|------------------|
//! | `simple`    | category runs    |
//! | `codepoint` | one per char     |

mod error;
mod flags;
mod registry;
mod tokenizer;

pub use error::CreateError;
pub use flags::{TokenFlags, TokenizeFlags};
pub use registry::{BuiltinModule, Registry, TokenizerModule, DEFAULT_TOKENIZER};
pub use tokenizer::{HostSink, Tokenizer};

pub use sift_core::{Status, Strategy};
