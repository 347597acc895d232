use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const OUTPUT: &str = "tracking-sheet-print.html";

fn tracksheet() -> Command {
    Command::cargo_bin("tracksheet").unwrap()
}

fn write_input(dir: &Path, contents: &str) -> std::path::PathBuf {
    let input = dir.join("trainees.txt");
    fs::write(&input, contents).unwrap();
    input
}

#[test]
fn test_generates_sheet_next_to_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "Jane Doe|https://example.com/a.jpg\nJohn Smith|https://example.com/b.jpg\n",
    );

    tracksheet()
        .arg(&input)
        .arg("--no-open")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 trainees"))
        .stdout(predicate::str::contains("Written to"))
        .stdout(predicate::str::contains(OUTPUT));

    let html = fs::read_to_string(temp_dir.path().join(OUTPUT)).unwrap();
    assert_eq!(html.matches(r#"class="trainee-card""#).count(), 2);
    assert!(html.contains(r#"<span class="trainee-num">1.</span> Jane Doe"#));
    assert!(html.contains(r#"<span class="trainee-num">2.</span> John Smith"#));
    assert!(html.contains(">JD</div>"));
    assert!(html.contains(">JS</div>"));
}

#[test]
fn test_ignores_blank_undelimited_and_nameless_lines() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(
        temp_dir.path(),
        "\nNo Pipe Here\n|https://example.com/orphan.jpg\nMadonna|\n\n",
    );

    tracksheet()
        .arg(&input)
        .arg("--no-open")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 trainees"));

    let html = fs::read_to_string(temp_dir.path().join(OUTPUT)).unwrap();
    assert_eq!(html.matches(r#"class="trainee-card""#).count(), 1);
    assert!(!html.contains("No Pipe Here"));
    assert!(!html.contains("orphan"));
}

#[test]
fn test_blank_input_fails_and_names_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "\n   \n\n");

    tracksheet()
        .arg(&input)
        .arg("--no-open")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No trainees found in"))
        .stderr(predicate::str::contains("trainees.txt"));

    assert!(!temp_dir.path().join(OUTPUT).exists());
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    tracksheet()
        .arg(temp_dir.path().join("absent.txt"))
        .arg("--no-open")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_rerun_overwrites_with_identical_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "Jane Doe|a.jpg\nJohn Smith|b.jpg\n");
    let output = temp_dir.path().join(OUTPUT);
    fs::write(&output, "stale").unwrap();

    tracksheet().arg(&input).arg("--no-open").assert().success();
    let first = fs::read(&output).unwrap();

    tracksheet().arg(&input).arg("--no-open").assert().success();
    let second = fs::read(&output).unwrap();

    assert_ne!(first, b"stale".to_vec());
    assert_eq!(first, second);
}

#[test]
fn test_no_open_skips_launcher_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "Jane Doe|a.jpg\n");

    tracksheet()
        .arg(&input)
        .arg("--no-open")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened in browser").not())
        .stdout(predicate::str::contains("Could not auto-open").not());
}

#[test]
fn test_verbose_logs_generated_sheet() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_input(temp_dir.path(), "Jane Doe|a.jpg\nJohn Smith|b.jpg\n");

    tracksheet()
        .env_remove("RUST_LOG")
        .arg(&input)
        .arg("--no-open")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("sheet generated"));
}
