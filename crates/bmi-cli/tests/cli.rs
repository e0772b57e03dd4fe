use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bmi").unwrap();
    cmd.current_dir(dir.path())
        .env("BMI_CONFIG_PATH", dir.path().join("absent.toml"))
        .env_remove("BMI_OUTPUT_FORMAT")
        .env_remove("BMI_LOG_FILTER")
        .env_remove("BMI_LOG_JSON");
    cmd
}

#[test]
fn calc_normal_weight() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["calc", "--height", "180", "--weight", "75"])
        .assert()
        .success()
        .stdout(contains("BMI: 23.1"))
        .stdout(contains("Category: Normal weight (healthy range)"));
}

#[test]
fn calc_obese_json() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["--format", "json", "calc", "--height", "160", "--weight", "90"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["displayValue"], "35.2");
    assert_eq!(value["category"], "Obese");
}

#[test]
fn calc_missing_weight_exits_with_validation_status() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["calc", "--height", "180"])
        .assert()
        .code(2)
        .stdout(contains("Error: Please enter height and weight"));
}

#[test]
fn calc_negative_height() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["calc", "--height", "-170", "--weight", "70"])
        .assert()
        .code(2)
        .stdout(contains("Height must be a positive number"));
}

#[test]
fn form_session_over_stdin() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("form")
        .write_stdin("180\n0\n180\n75\nquit\n")
        .assert()
        .success()
        .stdout(contains("Error: Weight must be a positive number"))
        .stdout(contains("BMI: 23.1"));
}

#[test]
fn config_file_sets_output_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bmi.toml");
    fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&path)
        .args(["calc", "--height", "180", "--weight", "75"])
        .assert()
        .success()
        .stdout(contains("\"displayValue\": \"23.1\""));
}

#[test]
fn env_override_beats_config_file() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .env("BMI_OUTPUT_FORMAT", "json")
        .args(["calc", "--height", "100", "--weight", "25"])
        .assert()
        .success()
        .stdout(contains("\"category\": \"Overweight\""));
}

#[test]
fn config_command_prints_effective_config() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--format", "json", "config"])
        .assert()
        .success()
        .stdout(contains("format = \"json\""))
        .stdout(contains("filter = \"warn\""));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[output\n").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&path)
        .args(["calc", "--height", "180", "--weight", "75"])
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}

#[test]
fn logs_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--verbose", "calc", "--height", "180", "--weight", "75"])
        .assert()
        .success()
        .stdout(contains("Computed BMI").not())
        .stderr(contains("Computed BMI"));
}

#[test]
fn missing_config_file_warns_on_stderr() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["calc", "--height", "180", "--weight", "75"])
        .assert()
        .success()
        .stdout(contains("not found").not())
        .stderr(contains("Using default configuration"));
}
