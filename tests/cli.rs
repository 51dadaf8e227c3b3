//! Tests for the `shakesearch` command-line interface.

use std::path::PathBuf;
use std::process::Command;

fn shakesearch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shakesearch"))
}

fn corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("corpus.txt")
}

/// Run a query and return (stdout, stderr, success)
fn run_query(args: &[&str]) -> (String, String, bool) {
    let output = shakesearch()
        .arg("query")
        .arg("-f")
        .arg(corpus_path())
        .arg("--no-color")
        .args(args)
        .output()
        .expect("Failed to run shakesearch");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_query_prints_one_word_per_line() {
    let (stdout, stderr, ok) = run_query(&["sleep"]);
    assert!(ok, "stderr: {}", stderr);
    assert_eq!(stdout, "sleep\nsleep\n");
    assert!(stderr.contains("2 results"));
}

#[test]
fn test_query_expands_case_variants() {
    let (stdout, _, ok) = run_query(&["hamlet"]);
    assert!(ok);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["HAMLET"; 3]);
}

#[test]
fn test_query_exact_skips_variants() {
    let (stdout, _, ok) = run_query(&["--exact", "hamlet"]);
    assert!(ok);
    assert!(stdout.is_empty());
}

#[test]
fn test_query_multiword() {
    let (stdout, _, ok) = run_query(&["arms", "against"]);
    assert!(ok);
    assert_eq!(stdout, "arms against\n");
}

#[test]
fn test_query_context_mode() {
    let (stdout, _, ok) = run_query(&["--mode", "context", "--radius", "12", "arrows"]);
    assert!(ok);
    assert_eq!(stdout, "slings and arrows of\n");
}

#[test]
fn test_query_limit() {
    let (stdout, _, ok) = run_query(&["-n", "1", "well"]);
    assert!(ok);
    assert_eq!(stdout, "well\n");
}

#[test]
fn test_missing_corpus_fails() {
    let output = shakesearch()
        .args(["query", "-f", "/definitely/not/here.txt", "love"])
        .output()
        .expect("Failed to run shakesearch");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load corpus"));
}

#[test]
fn test_stats() {
    let output = shakesearch()
        .arg("stats")
        .arg("-f")
        .arg(corpus_path())
        .output()
        .expect("Failed to run shakesearch");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Index Statistics"));
    assert!(stdout.contains("Suffix count:"));
    assert!(stdout.contains("memory-mapped"));
}

#[test]
fn test_subcommand_ignores_server_env() {
    let output = shakesearch()
        .env("PORT", "not-a-port")
        .arg("stats")
        .arg("-f")
        .arg(corpus_path())
        .output()
        .expect("Failed to run shakesearch");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn test_server_flags_conflict_with_subcommand() {
    let output = shakesearch()
        .args(["--port", "1", "serve"])
        .output()
        .expect("Failed to run shakesearch");

    assert!(!output.status.success());
}

#[test]
fn test_serve_rejects_bad_port() {
    let output = shakesearch()
        .arg("--port")
        .arg("not-a-port")
        .arg("-f")
        .arg(corpus_path())
        .output()
        .expect("Failed to run shakesearch");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid port"));
}
