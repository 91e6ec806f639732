//! Command-line configuration for `sift tokenize`.
//!
//! Options are parsed by hand from the argument list, in the same
//! `--name=value` / `--flag` style as the rest of the CLI:
//!
//! ```text
//! sift tokenize [--tokenizer=<name>] [--strategy=<name>] [--query] [--prefix]
//!               [--show-skipped] [--count] <path|->
//! ```
//!
//! `SIFT_STRATEGY` supplies a strategy when `--strategy` is absent.

use std::io;
use std::path::PathBuf;

use sift_core::{Status, Strategy, UnknownStrategy};
use sift_fts::{CreateError, TokenizeFlags, DEFAULT_TOKENIZER};
use thiserror::Error;

/// Environment variable consulted for the default strategy.
pub const STRATEGY_ENV: &str = "SIFT_STRATEGY";

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),

    #[error(transparent)]
    Create(#[from] CreateError),

    #[error("tokenizing failed ({0})")]
    Tokenize(Status),
}

/// Where the text to tokenize comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

/// Options for `sift tokenize`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Registered tokenizer name.
    pub tokenizer: String,
    /// Strategy override passed to the tokenizer as its argument.
    pub strategy: Option<Strategy>,
    /// Reason for tokenizing, forwarded to the host API.
    pub flags: TokenizeFlags,
    /// Also print the byte ranges no token covers.
    pub show_skipped: bool,
    /// Print only the number of tokens.
    pub count_only: bool,
    pub input: Input,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        TokenizeConfig {
            tokenizer: DEFAULT_TOKENIZER.to_owned(),
            strategy: None,
            flags: TokenizeFlags::DOCUMENT,
            show_skipped: false,
            count_only: false,
            input: Input::Stdin,
        }
    }
}

impl TokenizeConfig {
    /// Parse the arguments following `tokenize`.
    ///
    /// `env_strategy` is the value of [`STRATEGY_ENV`], if set; an explicit
    /// `--strategy` wins over it.
    pub fn from_args(args: &[String], env_strategy: Option<&str>) -> Result<Self, CliError> {
        let mut config = TokenizeConfig::default();
        let mut input = None;
        let mut query = false;
        let mut prefix = false;

        for arg in args {
            if let Some(name) = arg.strip_prefix("--tokenizer=") {
                config.tokenizer = name.to_owned();
            } else if let Some(name) = arg.strip_prefix("--strategy=") {
                config.strategy = Some(name.parse()?);
            } else if arg == "--query" {
                query = true;
            } else if arg == "--prefix" {
                prefix = true;
            } else if arg == "--show-skipped" {
                config.show_skipped = true;
            } else if arg == "--count" {
                config.count_only = true;
            } else if arg == "-" || !arg.starts_with('-') {
                if input.is_some() {
                    return Err(CliError::Usage(format!("unexpected extra input '{arg}'")));
                }
                input = Some(if arg == "-" {
                    Input::Stdin
                } else {
                    Input::Path(PathBuf::from(arg))
                });
            } else {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            }
        }

        if config.strategy.is_none() {
            if let Some(name) = env_strategy.filter(|s| !s.is_empty()) {
                config.strategy = Some(name.parse()?);
            }
        }

        if prefix && !query {
            return Err(CliError::Usage("--prefix requires --query".to_owned()));
        }
        if query {
            config.flags = TokenizeFlags::QUERY;
            config.flags.set(TokenizeFlags::PREFIX, prefix);
        }

        config.input =
            input.ok_or_else(|| CliError::Usage("missing input path (use '-' for stdin)".into()))?;
        Ok(config)
    }

    /// Arguments handed to the tokenizer module on creation.
    pub fn tokenizer_args(&self) -> Vec<&'static str> {
        self.strategy.map(Strategy::name).into_iter().collect()
    }
}

#[cfg(test)]
mod tests;
