#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn roster(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn first_run_lists_sample_roster() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Smith"))
        .stdout(predicate::str::contains("David Wilson"))
        .stdout(predicate::str::contains("Sep 1, 2023"))
        .stdout(predicate::str::contains("Showing 5 of 5 students"));

    assert!(temp_dir.path().join("studentsData.json").exists());
}

#[test]
fn bare_invocation_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 5 of 5 students"));
}

#[test]
fn add_then_search() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["add", "--name", " Ann Lee ", "--email", "ann@school.edu"])
        .args(["--grade", "Grade 9", "--phone", "555-0199"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added successfully!"))
        .stdout(predicate::str::contains("1006 Ann Lee"));

    roster(temp_dir.path())
        .args(["list", "--search", "ANN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann Lee"))
        .stdout(predicate::str::contains("Showing 1 of 6 students"));

    let raw = fs::read_to_string(temp_dir.path().join("studentsData.json")).unwrap();
    assert!(raw.contains("\"phone\": \"555-0199\""));
}

#[test]
fn duplicate_email_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["add", "--name", "Johnny", "--email", "John.Smith@school.edu"])
        .args(["--grade", "Grade 10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email already exists"));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 5 of 5 students"));
}

#[test]
fn every_invalid_field_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = roster(temp_dir.path())
        .args(["add", "--name", "J", "--email", "not-an-email", "--grade", ""])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("Name must be at least 2 characters"));
    assert!(stderr.contains("Please enter a valid email address"));
    assert!(stderr.contains("Please select a grade"));
    assert_eq!(stderr.lines().filter(|l| l.starts_with("Error:")).count(), 3);
}

#[test]
fn edit_changes_only_given_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["edit", "1001", "--status", "Graduated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student updated successfully!"));

    roster(temp_dir.path())
        .args(["list", "--status", "Graduated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Smith"))
        .stdout(predicate::str::contains("Sarah Davis"))
        .stdout(predicate::str::contains("Showing 2 of 5 students"));

    roster(temp_dir.path())
        .args(["view", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("john.smith@school.edu"))
        .stdout(predicate::str::contains("Grade 10"));
}

#[test]
fn edit_without_changes_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["edit", "1001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn edit_normalizes_status() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["edit", "1001", "--status", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));

    roster(temp_dir.path())
        .args(["edit", "1001", "--status", " Inactive "])
        .assert()
        .success();

    let raw = fs::read_to_string(temp_dir.path().join("studentsData.json")).unwrap();
    assert!(raw.contains("\"status\": \"Inactive\""));
    assert!(!raw.contains("\"status\": \"\""));
}

#[test]
fn delete_with_yes_removes_student() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["delete", "1003", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted successfully!"));

    roster(temp_dir.path())
        .args(["list", "--search", "1003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found"));

    roster(temp_dir.path())
        .args(["view", "1003"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student not found: 1003"));
}

#[test]
fn delete_asks_for_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["delete", "1002"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("This action cannot be undone."))
        .stdout(predicate::str::contains("Operation cancelled."));

    roster(temp_dir.path())
        .args(["delete", "1002"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted successfully!"));

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma Johnson").not())
        .stdout(predicate::str::contains("Showing 4 of 4 students"));
}

#[test]
fn delete_of_missing_student_fails_before_prompting() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["delete", "4242"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Are you sure").not())
        .stderr(predicate::str::contains("Student not found: 4242"));
}

#[test]
fn export_writes_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("out.csv");

    roster(temp_dir.path())
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Students exported successfully!"));

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "ID,Name,Email,Grade,Enrollment Date,Status,Phone,DOB"
    );
    assert_eq!(
        lines[1],
        "1001,\"John Smith\",\"john.smith@school.edu\",Grade 10,2023-09-01,Active,\"555-0101\",2008-05-15"
    );
}

#[test]
fn export_defaults_to_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path()).arg("export").assert().success();
    assert!(temp_dir.path().join("students_export.csv").exists());
}

#[test]
fn empty_roster_export_warns() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["config", "seed-sample-data", "false"])
        .assert()
        .success();

    roster(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students to export!"));

    assert!(!temp_dir.path().join("students_export.csv").exists());
}

#[test]
fn print_to_stdout_uses_school_name() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["config", "school-name", "Springfield High"])
        .assert()
        .success()
        .stdout(predicate::str::contains("school-name set to Springfield High"));

    roster(temp_dir.path())
        .args(["print", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Springfield High - Students Report"))
        .stdout(predicate::str::contains("window.print()"))
        .stdout(predicate::str::contains("<td>Michael Brown</td>"));
}

#[test]
fn print_escapes_html() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .args(["add", "--name", "<b>Bold</b>", "--email", "bold@school.edu"])
        .args(["--grade", "Grade 9"])
        .assert()
        .success();

    roster(temp_dir.path())
        .args(["print", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;Bold"))
        .stdout(predicate::str::contains("<b>Bold</b>").not());
}

#[test]
fn print_writes_report_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let html = fs::read_to_string(temp_dir.path().join("students_report.html")).unwrap();
    assert!(html.contains("School Management System - Students Report"));
}

#[test]
fn config_shows_all_keys() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("school-name = School Management System"))
        .stdout(predicate::str::contains("export-file = students_export.csv"))
        .stdout(predicate::str::contains("seed-sample-data = true"));

    roster(temp_dir.path())
        .args(["config", "no-such-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: no-such-key"));

    roster(temp_dir.path())
        .args(["config", "no-such-key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: no-such-key"));
}

#[test]
fn corrupt_roster_fails_loudly() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("studentsData.json"), "{ not json").unwrap();

    roster(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Serialization error"));

    let raw = fs::read_to_string(temp_dir.path().join("studentsData.json")).unwrap();
    assert_eq!(raw, "{ not json");
}

#[test]
fn legacy_records_are_read() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("studentsData.json"),
        r#"[{"id":1001,"name":"Legacy Kid","email":"legacy@school.edu","grade":"Grade 11","date":"2022-01-10","status":"Inactive"}]"#,
    )
    .unwrap();

    roster(temp_dir.path())
        .args(["view", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy Kid"))
        .stdout(predicate::str::contains("Jan 10, 2022"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn version_flag_prints_version() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
