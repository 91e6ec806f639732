//! sift CLI
//!
//! Runs the sift segmenters over files or stdin.

use std::io::{self, Write};

use sift_fts::Registry;
use siftc::config::STRATEGY_ENV;
use siftc::{init_tracing, list_tokenizers, tokenize_input, CliError, TokenizeConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let registry = Registry::with_builtins();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args[1].as_str() {
        "tokenize" => {
            let env_strategy = std::env::var(STRATEGY_ENV).ok();
            TokenizeConfig::from_args(&args[2..], env_strategy.as_deref())
                .and_then(|config| tokenize_input(&registry, &config, &mut out).map(|_| ()))
        }
        "list" => list_tokenizers(&registry, &mut out),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    };

    let result = result.and_then(|()| out.flush().map_err(CliError::from));
    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: sift <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokenize <path|->   Print the token stream of a file (or stdin)");
    eprintln!("  list                List registered tokenizers");
    eprintln!("  help                Show this message");
    eprintln!();
    eprintln!("Tokenize options:");
    eprintln!("  --tokenizer=<name>  Registered tokenizer (default: simple)");
    eprintln!("  --strategy=<name>   category or codepoint (env: {STRATEGY_ENV})");
    eprintln!("  --query             Tokenize as a query instead of a document");
    eprintln!("  --prefix            Mark the query as a prefix query");
    eprintln!("  --show-skipped      Also print byte ranges not covered by tokens");
    eprintln!("  --count             Print only the token count");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=sift_core=trace) for tracing output.");
}
