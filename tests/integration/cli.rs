//! The `lector` binary run against temporary documents.

use super::common::SAMPLE_TEXT;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn lector() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lector"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SAMPLE_TEXT.as_bytes())
        .expect("Failed to write sample");
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn test_search_json() {
    let file = sample_file();
    let output = lector()
        .args(["search", "--json"])
        .arg(file.path())
        .arg("wind")
        .output()
        .expect("Failed to run lector");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["counter"], "1 of 1");
    assert_eq!(report["results"][0]["lineNumber"], 2);
    assert_eq!(report["results"][0]["text"], "wind");
}

#[test]
fn test_search_table_lists_matches() {
    let file = sample_file();
    let output = lector()
        .args(["search", "--limit", "2"])
        .arg(file.path())
        .arg("the")
        .output()
        .expect("Failed to run lector");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("SEARCH"));
    assert!(text.contains("#1"));
    assert!(text.contains("#2"));
    assert!(!text.contains("#3"));
    assert!(text.contains("3 more"));
    assert!(text.contains("1 of 5"));
}

#[test]
fn test_suggest_from_stdin() {
    let mut child = lector()
        .args(["suggest", "--json", "-", "ca"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn lector");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"cat cat car cab cab cab ca")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let suggestions: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(suggestions, vec!["cab", "cat", "car"]);
}

#[test]
fn test_words_json_limit() {
    let file = sample_file();
    let output = lector()
        .args(["words", "--json", "--limit", "3"])
        .arg(file.path())
        .output()
        .expect("Failed to run lector");
    assert!(output.status.success());

    let words: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(words.as_array().unwrap().len(), 3);
    assert_eq!(words[0]["word"], "the");
    assert_eq!(words[0]["frequency"], 5);
}

#[test]
fn test_highlight_lines_escapes() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"a <b>\n\nb").unwrap();
    let output = lector()
        .args(["highlight", "--lines"])
        .arg(file.path())
        .arg("b")
        .output()
        .expect("Failed to run lector");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "<div class=\"line line-highlight\" data-line=\"1\">a &lt;\
         <span class=\"highlight active\" id=\"result-0\" data-result-index=\"0\">b</span>&gt;</div>\
         <div class=\"line\" data-line=\"2\"> </div>\
         <div class=\"line\" data-line=\"3\">\
         <span class=\"highlight\" id=\"result-1\" data-result-index=\"1\">b</span></div>"
    );
}

#[test]
fn test_highlight_raw() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<b>x</b>").unwrap();
    let output = lector()
        .args(["highlight", "--raw"])
        .arg(file.path())
        .arg("x")
        .output()
        .unwrap();
    assert_eq!(
        stdout(&output),
        "<b><span class=\"highlight active\" data-result-index=\"0\">x</span></b>"
    );
}

#[test]
fn test_missing_file_fails() {
    let output = lector()
        .args(["search", "/no/such/document.txt", "x"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not load document"));
}

#[test]
fn test_active_out_of_range_fails() {
    let file = sample_file();
    let output = lector()
        .args(["search", "--active", "99"])
        .arg(file.path())
        .arg("wind")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}
