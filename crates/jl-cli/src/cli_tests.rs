use std::path::PathBuf;

use crate::cli::{Params, build_cli};
use crate::exec::ExecArgs;

fn parse(argv: &[&str]) -> Params {
    let matches = build_cli()
        .try_get_matches_from(argv)
        .expect("arguments parse");
    Params::from_matches(&matches)
}

#[test]
fn pattern_alone_reads_stdin() {
    let params = parse(&["jl", "{a,b}"]);
    assert_eq!(params.pattern, "{a,b}");
    assert_eq!(params.fieldsep, None);
    assert!(params.files.is_empty());
}

#[test]
fn fieldsep_and_files() {
    let params = parse(&["jl", "-f", ",", "[*]", "one.json", "two.json"]);
    assert_eq!(params.fieldsep.as_deref(), Some(","));
    assert_eq!(params.pattern, "[*]");
    assert_eq!(
        params.files,
        [PathBuf::from("one.json"), PathBuf::from("two.json")]
    );
}

#[test]
fn missing_pattern_is_a_usage_error() {
    assert!(build_cli().try_get_matches_from(["jl"]).is_err());
}

#[test]
fn missing_fieldsep_value_is_a_usage_error() {
    assert!(build_cli().try_get_matches_from(["jl", "-f"]).is_err());
}

#[test]
fn default_separator_is_a_tab() {
    let args: ExecArgs = parse(&["jl", "[*]"]).into();
    assert_eq!(args.fieldsep, "\t");
}
