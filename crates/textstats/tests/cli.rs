//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const SIMPLE: &str = "This is a simple test. It has two sentences.";
const DENSE: &str = "The committee reviewed the proposal carefully. \
                     Everyone agreed that the implementation was excellent.";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `content` to `name` inside a fresh temp dir.
fn fixture(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    (tmp, path)
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("score"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXTSTATS_LOG_DIR"));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_prints_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_prints_all_formulas() {
    let (tmp, path) = fixture("simple.txt", SIMPLE);
    cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flesch reading ease"))
        .stdout(predicate::str::contains("98.9"))
        .stdout(predicate::str::contains("average 11 year old student"));
}

#[test]
fn score_json_matches_known_values() {
    let (tmp, path) = fixture("dense.txt", DENSE);
    let output = cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["words"], 13);
    assert_eq!(json["sentences"], 2);
    assert_eq!(json["long_words"], 6);
    assert_eq!(json["flesch_kincaid_reading_ease"], 11.5);
    assert_eq!(json["smog_index"], 10.1);
    assert_eq!(
        json["interpretation"],
        "Best understood by university graduates"
    );
}

#[test]
fn score_without_proper_nouns() {
    let (tmp, path) = fixture("dense.txt", DENSE);
    let output = cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap(), "--json", "--no-proper-nouns"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["long_words"], 5);
    assert_eq!(json["long_word_percentage"], 38.5);
}

#[test]
fn score_handles_html() {
    let (tmp, path) = fixture("page.html", "<h1>Title</h1><p>The cat sat.</p>");
    let output = cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["words"], 4);
    assert_eq!(json["sentences"], 2);
}

#[test]
fn score_fails_above_max_grade() {
    let (tmp, path) = fixture("dense.txt", DENSE);
    cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap(), "--max-grade", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 9.0"));
}

#[test]
fn score_passes_within_gates() {
    let (tmp, path) = fixture("simple.txt", SIMPLE);
    cmd()
        .current_dir(tmp.path())
        .args([
            "score",
            path.to_str().unwrap(),
            "--max-grade",
            "9",
            "--min-ease",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"));
}

#[test]
fn score_fails_below_min_ease() {
    let (tmp, path) = fixture("dense.txt", DENSE);
    cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap(), "--min-ease", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading ease 11.5"));
}

#[test]
fn score_rejects_empty_text() {
    let (tmp, path) = fixture("empty.txt", "  <p></p> 42 ");
    cmd()
        .current_dir(tmp.path())
        .args(["score", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no scorable text"));
}

#[test]
fn score_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["score", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_prints_each_word() {
    cmd()
        .args(["syllables", "forever", "walked", "readability"])
        .assert()
        .success()
        .stdout(predicate::str::contains("forever\t3"))
        .stdout(predicate::str::contains("walked\t1"))
        .stdout(predicate::str::contains("readability\t5"));
}

#[test]
fn syllables_json() {
    let output = cmd()
        .args(["syllables", "McDonald", "--json"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["word"], "McDonald");
    assert_eq!(json[0]["syllables"], 3);
}

// =============================================================================
// Normalize Command
// =============================================================================

#[test]
fn normalize_prints_canonical_text() {
    let (tmp, path) = fixture("list.html", "<ul><li>One</li><li>Two!!</li></ul> 3 items");
    cmd()
        .current_dir(tmp.path())
        .args(["normalize", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("One. Two. items.\n"));
}

#[test]
fn normalize_respects_input_limit() {
    let (tmp, path) = fixture("big.txt", SIMPLE);
    fs::write(tmp.path().join(".textstats.toml"), "max_input_bytes = 10").unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["normalize", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_schema_describes_score_json() {
    let tmp = TempDir::new().unwrap();
    let output = cmd()
        .current_dir(tmp.path())
        .args(["info", "--schema"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["title"], "ReadabilityReport");
    assert!(schema["properties"].get("average_grade_level").is_some());
}

#[test]
fn quiet_suppresses_diagnostics() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["-q", "info"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
