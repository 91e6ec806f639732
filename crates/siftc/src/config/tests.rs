#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sift_core::Strategy;
use sift_fts::TokenizeFlags;

use super::{CliError, Input, TokenizeConfig};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn defaults_with_path() {
    let config = TokenizeConfig::from_args(&args(&["doc.txt"]), None).unwrap();
    assert_eq!(
        config,
        TokenizeConfig {
            input: Input::Path(PathBuf::from("doc.txt")),
            ..TokenizeConfig::default()
        }
    );
    assert_eq!(config.tokenizer, "simple");
    assert_eq!(config.flags, TokenizeFlags::DOCUMENT);
    assert!(config.tokenizer_args().is_empty());
}

#[test]
fn dash_means_stdin() {
    let config = TokenizeConfig::from_args(&args(&["-"]), None).unwrap();
    assert_eq!(config.input, Input::Stdin);
}

#[test]
fn all_options() {
    let config = TokenizeConfig::from_args(
        &args(&[
            "--tokenizer=codepoint",
            "--strategy=category",
            "--query",
            "--prefix",
            "--show-skipped",
            "--count",
            "q.txt",
        ]),
        None,
    )
    .unwrap();
    assert_eq!(config.tokenizer, "codepoint");
    assert_eq!(config.strategy, Some(Strategy::Category));
    assert_eq!(config.flags, TokenizeFlags::QUERY | TokenizeFlags::PREFIX);
    assert!(config.show_skipped);
    assert!(config.count_only);
    assert_eq!(config.tokenizer_args(), vec!["category"]);
}

#[test]
fn env_strategy_applies_without_flag() {
    let config = TokenizeConfig::from_args(&args(&["x"]), Some("codepoint")).unwrap();
    assert_eq!(config.strategy, Some(Strategy::Codepoint));
}

#[test]
fn flag_beats_env_strategy() {
    let config =
        TokenizeConfig::from_args(&args(&["--strategy=category", "x"]), Some("codepoint"))
            .unwrap();
    assert_eq!(config.strategy, Some(Strategy::Category));
}

#[test]
fn empty_env_strategy_is_ignored() {
    let config = TokenizeConfig::from_args(&args(&["x"]), Some("")).unwrap();
    assert_eq!(config.strategy, None);
}

#[test]
fn bad_strategy_is_reported() {
    let err = TokenizeConfig::from_args(&args(&["--strategy=ngram", "x"]), None).unwrap_err();
    assert!(matches!(err, CliError::Strategy(_)));
}

#[test]
fn missing_input_is_usage_error() {
    let err = TokenizeConfig::from_args(&args(&["--count"]), None).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
}

#[test]
fn two_inputs_is_usage_error() {
    let err = TokenizeConfig::from_args(&args(&["a", "b"]), None).unwrap_err();
    assert_eq!(err.to_string(), "unexpected extra input 'b'");
}

#[test]
fn unknown_option_is_usage_error() {
    let err = TokenizeConfig::from_args(&args(&["--stem", "a"]), None).unwrap_err();
    assert_eq!(err.to_string(), "unknown option '--stem'");
}

#[test]
fn prefix_without_query_is_rejected() {
    let err = TokenizeConfig::from_args(&args(&["--prefix", "a"]), None).unwrap_err();
    assert!(matches!(err, CliError::Usage(_)));
}
