//! End-to-end tests for the plagcheck binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A corpus directory with three reference files and a candidate document
fn fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let refs = dir.path().join("refs");
    std::fs::create_dir(&refs).unwrap();

    std::fs::write(
        refs.join("file1.txt"),
        "The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs.",
    )
    .unwrap();
    std::fs::write(
        refs.join("file2.txt"),
        "Sphinx of black quartz, judge my vow. The quick brown fox jumps over the lazy dog.",
    )
    .unwrap();
    std::fs::write(refs.join("file3.txt"), "Nothing in common here.").unwrap();

    std::fs::write(
        dir.path().join("testfile.txt"),
        "The quick brown fox jumps over the lazy dog. An original thought. Sphinx of black quartz, judge my vow. Another original line.",
    )
    .unwrap();

    dir
}

fn plagcheck() -> Command {
    Command::cargo_bin("plagcheck").expect("binary should build")
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_detect_all_algorithms_text() {
    let dir = fixture();

    plagcheck()
        .args(["detect", &path_arg(&dir.path().join("testfile.txt"))])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rabin-Karp: 50%"))
        .stdout(predicate::str::contains("Knuth-Morris-Pratt: 50%"))
        .stdout(predicate::str::contains("Boyer-Moore: 50%"))
        .stdout(predicate::str::contains("Hamming Distance: 50%"))
        .stdout(predicate::str::contains(
            "Documents from which the test file was plagiarized:",
        ))
        .stdout(predicate::str::contains("1. file1.txt"))
        .stdout(predicate::str::contains("2. file2.txt"))
        .stdout(predicate::str::contains("file3.txt").not())
        .stdout(predicate::str::contains("-".repeat(51)));
}

#[test]
fn test_detect_single_algorithm_json() {
    let dir = fixture();

    let output = plagcheck()
        .args(["detect", &path_arg(&dir.path().join("testfile.txt"))])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .args(["--algorithm", "kmp", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["algorithm"], "prefix_function");
    assert_eq!(results[0]["ratio"], 50.0);
    assert_eq!(results[0]["total_sentences"], 4);
    assert_eq!(
        results[0]["matched_documents"],
        serde_json::json!(["file1.txt", "file2.txt"])
    );
}

#[test]
fn test_detect_first_match_tsv() {
    let dir = fixture();

    plagcheck()
        .args(["detect", &path_arg(&dir.path().join("testfile.txt"))])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .args(["--algorithm", "1", "--first-match", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rabin-karp\t50.0000\t2\t4\tfile1.txt,file2.txt"));
}

#[test]
fn test_detect_from_stdin() {
    let dir = fixture();

    plagcheck()
        .args(["detect", "-", "--algorithm", "boyer-moore"])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .write_stdin("Nothing in common here. Something else.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Boyer-Moore: 50%"))
        .stdout(predicate::str::contains("1. file3.txt"));
}

#[test]
fn test_detect_empty_candidate() {
    let dir = fixture();
    let empty = dir.path().join("empty.txt");
    std::fs::write(&empty, "").unwrap();

    plagcheck()
        .args(["detect", &path_arg(&empty), "--algorithm", "hamming"])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hamming Distance: 0%"));
}

#[test]
fn test_detect_unknown_algorithm_fails() {
    let dir = fixture();

    plagcheck()
        .args(["detect", &path_arg(&dir.path().join("testfile.txt"))])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .args(["--algorithm", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm '5'"));
}

#[test]
fn test_detect_missing_candidate_fails() {
    let dir = fixture();

    plagcheck()
        .args(["detect", &path_arg(&dir.path().join("missing.txt"))])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .assert()
        .failure();
}

#[test]
fn test_search_sentence() {
    let dir = fixture();

    plagcheck()
        .args(["search", "The quick brown fox jumps over the lazy dog"])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rabin-Karp: found in file1.txt, file2.txt",
        ))
        .stdout(predicate::str::contains(
            "Hamming Distance: found in file1.txt, file2.txt",
        ));
}

#[test]
fn test_search_not_found() {
    let dir = fixture();

    plagcheck()
        .args(["search", "Completely new", "--algorithm", "kmp"])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .assert()
        .success()
        .stdout(predicate::str::contains("Knuth-Morris-Pratt: not found"));
}

#[test]
fn test_search_blank_sentence_fails() {
    let dir = fixture();

    plagcheck()
        .args(["search", "   "])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search sentence is empty"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_detect_ignores_unterminated_tail() {
    let dir = fixture();

    plagcheck()
        .args(["detect", "-", "--algorithm", "kmp"])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .write_stdin("Nothing in common here. Sphinx of black quartz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Knuth-Morris-Pratt: 100%"))
        .stdout(predicate::str::contains("file2.txt").not());
}

#[test]
fn test_corpus_export_and_reload() {
    let dir = fixture();

    let output = plagcheck()
        .args(["corpus", "export"])
        .args(["--corpus", &path_arg(&dir.path().join("refs"))])
        .output()
        .unwrap();
    assert!(output.status.success());

    let manifest = dir.path().join("corpus.json");
    std::fs::write(&manifest, &output.stdout).unwrap();

    plagcheck()
        .args(["corpus", "list", "--corpus", &path_arg(&manifest)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference corpus: 3 documents"))
        .stdout(predicate::str::contains("1. file1.txt"));

    plagcheck()
        .args(["detect", &path_arg(&dir.path().join("testfile.txt"))])
        .args(["--corpus", &path_arg(&manifest), "--algorithm", "rk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rabin-Karp: 50%"));
}

#[test]
fn test_duplicate_corpus_paths_fail() {
    let dir = fixture();
    let refs = path_arg(&dir.path().join("refs"));

    plagcheck()
        .args(["corpus", "list", "--corpus", &refs, "--corpus", &refs])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate document id"));
}
