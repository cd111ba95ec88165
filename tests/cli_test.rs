//! CLI-level tests driving the real binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn complainee() -> Command {
    Command::cargo_bin("complainee").expect("binary builds")
}

#[test]
fn analyzes_sample_file_and_prints_report() {
    complainee()
        .arg("tests/data/sample_emails.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data validation is successful!"))
        .stdout(predicate::str::contains("- Final Frequency Ratio: 40.0%"))
        .stdout(predicate::str::contains("Common Complaint"));
}

#[test]
fn reads_csv_from_stdin() {
    let csv = "email_id,sender,timestamp,subject,content,sentiment_score\n\
               E1,a@example.com,2025-03-07 17:00:00,Refund,I want a refund,-0.4\n";

    complainee()
        .write_stdin(csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data validation is successful!"))
        .stdout(predicate::str::contains("Keyword: refund"));
}

#[test]
fn unparseable_input_reports_invalid_format_without_failing() {
    complainee()
        .write_stdin("{oops")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ERROR: Invalid data format. Please provide data in CSV or JSON format.",
        ));
}

#[test]
fn validation_failure_is_report_content_not_an_error() {
    let input = r#"{"emails": [{"email_id": "E1"}]}"#;

    complainee()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: Missing required field(s):"))
        .stdout(predicate::str::contains("Email Feedback Analysis Summary").not());
}

#[test]
fn writes_report_file_when_output_is_given() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report_path = dir.path().join("report.md");

    complainee()
        .arg("tests/data/sample_emails.json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report saved to"));

    let saved = fs::read_to_string(&report_path).expect("report file written");
    assert!(saved.contains("# Email Feedback Analysis Summary:"));
}

#[test]
fn custom_keyword_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let keyword_path = dir.path().join("keywords.txt");
    fs::write(&keyword_path, "damaged\n").expect("write keywords");

    complainee()
        .arg("tests/data/sample_emails.json")
        .arg("--keywords")
        .arg(&keyword_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword: damaged"))
        .stdout(predicate::str::contains("Keyword: delay").not());
}

#[test]
fn missing_input_file_exits_nonzero() {
    complainee()
        .arg("/no/such/input.json")
        .assert()
        .failure();
}

#[test]
fn init_creates_keyword_file_once() {
    let dir = tempfile::tempdir().expect("temp dir");

    complainee()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created complaint_keywords.txt"));

    let created = fs::read_to_string(dir.path().join("complaint_keywords.txt"))
        .expect("keyword file created");
    assert!(created.contains("delay"));

    complainee()
        .current_dir(dir.path())
        .arg("--init")
        .assert()
        .failure();
}
