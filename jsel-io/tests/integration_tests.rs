//! Integration tests for the JSEL I/O layer

use jsel_io::{execute_select, SelectError, SelectRequest};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.json");
    fs::write(&path, contents).expect("write input");
    path
}

fn run_select(input: PathBuf, output: PathBuf) -> jsel_io::Result<jsel_io::SelectSummary> {
    execute_select(SelectRequest { input, output })
}

#[test]
fn end_to_end_selects_requested_element() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": [0, 1, 2, 3, 4, 5, 6, 7], "indices": [5]}"#);
    let output = dir.path().join("output.json");

    let summary = run_select(input, output.clone()).expect("selection succeeds");
    assert_eq!(summary.list_len, 8);
    assert_eq!(summary.values_selected, 1);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "[5]");
    assert_ne!(written, "[6]");
}

#[test]
fn end_to_end_preserves_order_and_multiplicity() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": ["a", "b", "c", "d"], "indices": [1, 1, 2]}"#);
    let output = dir.path().join("output.json");

    run_select(input, output.clone()).expect("selection succeeds");

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, json!(["b", "b", "c"]));
}

#[test]
fn end_to_end_single_integer_indices() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": [10, 20, 30], "indices": 2}"#);
    let output = dir.path().join("output.json");

    let summary = run_select(input, output.clone()).expect("selection succeeds");
    assert_eq!(summary.values_selected, 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[30]");
}

#[test]
fn end_to_end_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": [7], "indices": [0]}"#);
    let output = dir.path().join("output.json");
    fs::write(&output, "stale contents, longer than the result").unwrap();

    run_select(input, output.clone()).expect("selection succeeds");
    assert_eq!(fs::read_to_string(&output).unwrap(), "[7]");
}

#[test]
fn failed_selection_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": [1, 2, 3], "indices": [99]}"#);
    let output = dir.path().join("output.json");

    match run_select(input, output.clone()) {
        Err(SelectError::OutOfBounds { index, len }) => {
            assert_eq!(index, 99);
            assert_eq!(len, 3);
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn type_error_reports_rejected_kind() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": ["a", "b"], "indices": "a"}"#);
    let output = dir.path().join("output.json");

    let err = run_select(input, output.clone()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Indices must be an integer or an array of integers, got string"
    );
    assert!(!output.exists());
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.json");
    let output = dir.path().join("output.json");

    match run_select(input, output) {
        Err(SelectError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn malformed_document_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");

    for contents in ["{not json", r#"{"list": [1, 2]}"#, r#"{"indices": [0]}"#] {
        let input = write_input(&dir, contents);
        match run_select(input, output.clone()) {
            Err(SelectError::Json(_)) => {}
            other => panic!("expected Json for {:?}, got {:?}", contents, other),
        }
    }
}

#[test]
fn unwritable_output_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, r#"{"list": [1], "indices": [0]}"#);
    let output = dir.path().join("missing-dir").join("output.json");

    match run_select(input, output) {
        Err(SelectError::Io(_)) => {}
        other => panic!("expected Io, got {:?}", other),
    }
}
