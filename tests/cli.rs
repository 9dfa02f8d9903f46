use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn config_file(yaml: &str) -> tempfile::NamedTempFile {
    let mut tmp_file = tempfile::NamedTempFile::new().unwrap();
    tmp_file.write_all(yaml.as_bytes()).unwrap();
    tmp_file.flush().unwrap();
    tmp_file
}

const CONF: &str = r#"---
timers:
  - name: ":roast"
    cmd: "exit 0"
    repeat: 2
  - name: "cool neat"
    cmd: "exit 0"
"#;

#[test]
fn test_summary() {
    let config = config_file(CONF);

    Command::cargo_bin("timeup")
        .unwrap()
        .arg("-c")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TimeUp timers summary"))
        .stdout(predicate::str::is_match(r":roast\s+\t\d+\.\d{5}s").unwrap())
        .stdout(predicate::str::contains("\"cool neat\""))
        .stdout(predicate::str::contains("still active").not());
}

#[test]
fn test_json() {
    let config = config_file(CONF);

    let output = Command::cargo_bin("timeup")
        .unwrap()
        .args(["-f", "json", "-c"])
        .arg(config.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[":roast"]["count"], 2);
    assert_eq!(json["\"cool neat\""]["count"], 1);
}

#[test]
fn test_invalid_name_kind() {
    let config = config_file(
        r#"---
timers:
  - name: 42
    cmd: "exit 0"
"#,
    );

    Command::cargo_bin("timeup")
        .unwrap()
        .arg("-c")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_missing_config() {
    Command::cargo_bin("timeup")
        .unwrap()
        .args(["-c", "/nonexistent/timeup.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file path"));
}
