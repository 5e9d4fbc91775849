use std::io::Write;

use jl_lib::Pattern;
use tempfile::NamedTempFile;

use crate::exec::extract_files;

fn temp_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn extracts_from_a_file() {
    let file = temp_json(r#"{"name":"x","tags":["p","q"]}"#);
    let pattern = Pattern::compile("{name,tags[*]}").unwrap();
    let out = extract_files(&pattern, "\t", &[file.path().to_path_buf()], Vec::new()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "x\tp\nx\tq\n");
}

#[test]
fn all_files_feed_the_same_tables() {
    let first = temp_json("[1,2]");
    let second = temp_json("[3]");
    let pattern = Pattern::compile("[*]").unwrap();
    let out = extract_files(
        &pattern,
        "\t",
        &[first.path().to_path_buf(), second.path().to_path_buf()],
        Vec::new(),
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
}

#[test]
fn missing_file_reports_its_path() {
    let pattern = Pattern::compile("[*]").unwrap();
    let err = extract_files(
        &pattern,
        "\t",
        &[std::path::PathBuf::from("no-such-file.json")],
        Vec::new(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("no-such-file.json"));
}
