//! Command-line driver for the sift segmenters.
//!
//! `sift tokenize` runs a registered tokenizer over a file or stdin and prints
//! the token stream; `sift list` prints the registered tokenizer names. Both
//! go through the same `sift_fts` registry a search host would use.

pub mod commands;
pub mod config;
mod tracing_setup;

pub use commands::{list_tokenizers, tokenize_bytes, tokenize_input};
pub use config::{CliError, Input, TokenizeConfig};
pub use tracing_setup::init_tracing;
