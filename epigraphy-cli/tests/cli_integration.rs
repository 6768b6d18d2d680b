//! Integration tests for the epigraphy CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn epigraphy() -> Command {
    Command::cargo_bin("epigraphy").unwrap()
}

fn dataset(stdout: &[u8]) -> Vec<serde_json::Value> {
    serde_json::from_slice(stdout).unwrap()
}

#[test]
fn test_process_json_array() {
    let output = epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-q")
        .output()
        .unwrap();
    assert!(output.status.success());

    let records = dataset(&output.stdout);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["text"], "εδοξεν τηι βουληι. και τωι δημωι.");
    assert_eq!(records[0]["date_str"], " ca. 450 BC");
    assert_eq!(records[0]["date_min"], -450);
    assert_eq!(records[0]["date_max"], -450);
    assert_eq!(records[0]["date_circa"], true);

    assert_eq!(records[1]["id"], 3);
    assert_eq!(records[1]["text"], "θεοι τυχηι αγαθηι.");
    assert_eq!(records[1]["date_min"], -479);
    assert_eq!(records[1]["date_max"], -323);
    assert_eq!(records[1]["region_sub_id"], -1);
}

#[test]
fn test_process_json_lines_with_unresolved_date() {
    let output = epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.jsonl"))
        .arg("-q")
        .output()
        .unwrap();
    assert!(output.status.success());

    let records = dataset(&output.stdout);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date_min"], -108);
    assert_eq!(records[0]["date_max"], -107);
    assert!(records[1]["date_min"].is_null());
    assert!(records[1]["date_circa"].is_null());
    assert_eq!(records[1]["date_str"], "");
}

#[test]
fn test_process_multiple_inputs_keep_order() {
    let output = epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.jsonl"))
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("--threads")
        .arg("2")
        .arg("-q")
        .output()
        .unwrap();
    assert!(output.status.success());

    let ids: Vec<i64> = dataset(&output.stdout)
        .iter()
        .filter_map(|r| r["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![10, 11, 1, 3]);
}

#[test]
fn test_process_writes_output_and_frequency_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("dataset.json");
    let words = temp_dir.path().join("words.txt");
    let main = temp_dir.path().join("region_main.txt");
    let sub = temp_dir.path().join("region_sub.txt");

    epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-o")
        .arg(&out)
        .arg("--word-list")
        .arg(&words)
        .arg("--region-main-list")
        .arg(&main)
        .arg("--region-sub-list")
        .arg(&sub)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let records = dataset(&fs::read(&out).unwrap());
    assert_eq!(records.len(), 2);

    let words = fs::read_to_string(&words).unwrap();
    assert!(words.starts_with("εδοξεν;1\n"));
    assert!(words.contains("αγαθηι;1"));

    assert_eq!(fs::read_to_string(&main).unwrap(), "Attica_1;1\nIonia_5;1");
    assert_eq!(fs::read_to_string(&sub).unwrap(), "Athens_2;1\n_-1;1");
}

#[test]
fn test_process_summary_on_stderr() {
    epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("kept 2"));
}

#[test]
fn test_process_min_text_len_from_config() {
    let output = epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-c")
        .arg(fixture_path("config.toml"))
        .arg("-q")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(dataset(&output.stdout).is_empty());

    // Flag wins over the config file
    let output = epigraphy()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-c")
        .arg(fixture_path("config.toml"))
        .arg("--min-text-len")
        .arg("1")
        .arg("-q")
        .output()
        .unwrap();
    assert_eq!(dataset(&output.stdout).len(), 3);
}

#[test]
fn test_process_missing_input() {
    epigraphy()
        .arg("process")
        .arg("-i")
        .arg("nonexistent-*.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input files match"));
}

#[test]
fn test_process_invalid_record() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.jsonl");
    fs::write(&input, "{\"id\": 1, \"text\": \"ΑΒΓ\"}\n{\"id\": \"x\"}\n").unwrap();

    epigraphy()
        .arg("process")
        .arg("-i")
        .arg(&input)
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record in"))
        .stderr(predicate::str::contains("broken.jsonl:2"));
}

#[test]
fn test_clean_file() {
    epigraphy()
        .arg("clean")
        .arg("-i")
        .arg(fixture_path("inscription.txt"))
        .assert()
        .success()
        .stdout("τηι βουληι. και τωι δημωι.\n");
}

#[test]
fn test_clean_stdin() {
    epigraphy()
        .arg("clean")
        .write_stdin("{deleted text}(?) [σωκρατης]")
        .assert()
        .success()
        .stdout("σωκρατησ.\n");
}

#[test]
fn test_clean_normalize_only() {
    epigraphy()
        .arg("clean")
        .arg("--normalize-only")
        .write_stdin("αβγ ---c.5--- δεζ")
        .assert()
        .success()
        .stdout("αβγ ----- δεζ\n");
}

#[test]
fn test_date_plain() {
    epigraphy()
        .arg("date")
        .arg("ca. 450 BC")
        .arg("early Roman period")
        .arg("undated")
        .assert()
        .success()
        .stdout("-450 -450 true\n-200 600 false\nunresolved\n");
}

#[test]
fn test_date_json() {
    let output = epigraphy()
        .arg("date")
        .arg("--json")
        .arg("108/7 BC")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["date_min"], -108);
    assert_eq!(value[0]["date_max"], -107);
    assert_eq!(value[0]["date_circa"], false);
}

#[test]
fn test_date_custom_exemptions() {
    epigraphy()
        .arg("date")
        .arg("--exemptions")
        .arg(fixture_path("periods.toml"))
        .arg("Late Geometric")
        .arg("Classical period")
        .assert()
        .success()
        .stdout("-900 -700 false\nunresolved\n");
}

#[test]
fn test_list_periods() {
    epigraphy()
        .arg("list")
        .arg("periods")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  -600   -479  Archaic period\n"))
        .stdout(predicate::str::contains("early Roman period"));
}

#[test]
fn test_list_periods_custom_table() {
    epigraphy()
        .arg("list")
        .arg("periods")
        .arg("--exemptions")
        .arg(fixture_path("periods.toml"))
        .assert()
        .success()
        .stdout("  -900   -700  Geometric\n");
}

#[test]
fn test_help_lists_commands() {
    epigraphy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("date"))
        .stdout(predicate::str::contains("list"));
}
