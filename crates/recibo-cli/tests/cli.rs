//! End-to-end tests for the recibo binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn recibo() -> Command {
    Command::cargo_bin("recibo").unwrap()
}

#[test]
fn test_extract_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("receipt.txt");
    std::fs::write(&transcript, "Tienda Don Pepe\n2\nCoca Cola 3000\nAgua 1500").unwrap();

    recibo()
        .args(["extract", transcript.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rawText\""))
        .stdout(predicate::str::contains("Coca Cola"))
        .stdout(predicate::str::contains("\"total\": 7500"));
}

#[test]
fn test_extract_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("receipt.txt");
    std::fs::write(&transcript, "Tienda Don Pepe\nCoca Cola 3000").unwrap();

    recibo()
        .args(["extract", "--format", "text", transcript.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merchant: Tienda Don Pepe"))
        .stdout(predicate::str::contains("Total: 3000 $"));
}

#[test]
fn test_extract_with_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("receipt.txt");
    std::fs::write(&transcript, "Tienda\nCoca Cola 3000").unwrap();
    let metadata = dir.path().join("meta.json");
    std::fs::write(
        &metadata,
        r#"{"confidence": 0.95, "processorId": "proc-1"}"#,
    )
    .unwrap();

    recibo()
        .args([
            "extract",
            "--metadata",
            metadata.to_str().unwrap(),
            transcript.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"processor\": \"proc-1\""));
}

#[test]
fn test_extract_missing_input_fails() {
    recibo()
        .args(["extract", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_batch_writes_records() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "Tienda\nCoca Cola 3000").unwrap();
    std::fs::write(dir.path().join("b.txt"), "Otra Tienda\nPan 500").unwrap();
    let out_dir = dir.path().join("out");

    recibo()
        .args([
            "batch",
            "--output-dir",
            out_dir.to_str().unwrap(),
            &format!("{}/*.txt", dir.path().display()),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful"));

    let a: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("a.json")).unwrap()).unwrap();
    assert_eq!(a["receipt"]["total"], 3000);
}

#[test]
fn test_batch_no_matches_fails() {
    recibo()
        .args(["batch", "/nonexistent/dir/*.txt"])
        .assert()
        .failure();
}
