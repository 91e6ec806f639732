//! `tokenize` and `list` commands.

use std::fs;
use std::io::{self, Read, Write};

use sift_core::Status;
use sift_fts::{Registry, TokenFlags};
use tracing::debug;

use crate::config::{CliError, Input, TokenizeConfig};

/// Print the registered tokenizer names, one per line.
pub fn list_tokenizers(registry: &Registry, out: &mut dyn Write) -> Result<(), CliError> {
    for name in registry.names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Read the configured input and tokenize it. Returns the token count.
pub fn tokenize_input(
    registry: &Registry,
    config: &TokenizeConfig,
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let text = match &config.input {
        Input::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
        Input::Path(path) => fs::read(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?,
    };
    tokenize_bytes(registry, config, &text, out)
}

/// Tokenize `text` and write the token stream to `out`.
///
/// Each token is printed as `start..end<TAB>content`, with non-printable
/// bytes escaped. With `show_skipped`, byte ranges that no token covers are
/// printed in place as `start..end<TAB><skipped>`. With `count_only`, only the
/// final count is printed.
pub fn tokenize_bytes(
    registry: &Registry,
    config: &TokenizeConfig,
    text: &[u8],
    out: &mut dyn Write,
) -> Result<usize, CliError> {
    let tokenizer = registry.create(&config.tokenizer, &config.tokenizer_args())?;
    debug!(tokenizer = %config.tokenizer, strategy = tokenizer.strategy_name(), len = text.len(), "tokenizing input");

    let mut count = 0usize;
    let mut covered = 0i32;
    let mut write_error: Option<io::Error> = None;

    let status = tokenizer.tokenize(
        config.flags,
        text,
        &mut |_: TokenFlags, content: &[u8], start: i32, end: i32| {
            count += 1;
            if config.count_only {
                return Status::OK;
            }
            let written = if config.show_skipped && start > covered {
                writeln!(out, "{covered}..{start}\t<skipped>")
            } else {
                Ok(())
            }
            .and_then(|()| writeln!(out, "{start}..{end}\t{}", content.escape_ascii()));
            covered = end;
            match written {
                Ok(()) => Status::OK,
                Err(err) => {
                    write_error = Some(err);
                    Status::ERROR
                }
            }
        },
    );

    if let Some(err) = write_error {
        return Err(CliError::Write(err));
    }
    if !status.is_ok() {
        return Err(CliError::Tokenize(status));
    }

    if config.count_only {
        writeln!(out, "{count}")?;
    } else if config.show_skipped {
        let len = text.len();
        let covered = usize::try_from(covered).unwrap_or(len);
        if covered < len {
            writeln!(out, "{covered}..{len}\t<skipped>")?;
        }
    }
    Ok(count)
}
