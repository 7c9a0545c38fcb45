//! End-to-end tests for the sift binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sift(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sift").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn classify_not_found_is_resource_failure() {
    let dir = TempDir::new().unwrap();
    sift(&dir)
        .args(["classify", "--code", "404", "--message", "no such core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resource_failure: no such core"))
        .stdout(predicate::str::contains("NOT_FOUND (404)"));
}

#[test]
fn classify_parse_failure_is_invalid_usage() {
    let dir = TempDir::new().unwrap();
    sift(&dir)
        .args([
            "classify",
            "--code",
            "500",
            "--message",
            "internal",
            "--parse",
            "Cannot parse 'title:('",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "invalid_api_usage: Cannot parse 'title:('",
        ));
}

#[test]
fn classify_unmapped_code_is_unhandled() {
    let dir = TempDir::new().unwrap();
    sift(&dir)
        .args(["classify", "--code", "409", "--message", "version conflict"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("unhandled: Search request failed"))
        .stdout(predicate::str::contains("caused by: version conflict"));
}

#[test]
fn classify_bare_shape_is_unhandled() {
    let dir = TempDir::new().unwrap();
    sift(&dir)
        .args(["classify", "--code", "403", "-m", "forbidden", "--shape", "bare"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("unhandled: forbidden"));
}

#[test]
fn classify_json_output() {
    let dir = TempDir::new().unwrap();
    let output = sift(&dir)
        .args(["-f", "json", "classify", "--code", "401", "-m", "login required"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["handled"], true);
    assert_eq!(report["kind"], "permission_denied");
    assert_eq!(report["message"], "login required");
    assert_eq!(report["code"], "unauthorized");
}

#[test]
fn config_format_applies_when_flag_absent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "format = \"json\"\nouter_message = \"repo call failed\"\n",
    )
    .unwrap();

    let output = sift(&dir)
        .args(["classify", "--code", "418", "-m", "teapot"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["handled"], false);
    assert_eq!(report["message"], "repo call failed");
    assert!(report.get("kind").is_none());
}

#[test]
fn malformed_config_fails_with_path() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "format = [").unwrap();

    sift(&dir)
        .args(["classify", "--code", "404", "-m", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn codes_lists_categories() {
    let dir = TempDir::new().unwrap();
    sift(&dir)
        .arg("codes")
        .assert()
        .success()
        .stdout(predicate::str::contains("SERVICE_UNAVAILABLE"))
        .stdout(predicate::str::contains("permission_denied"))
        .stdout(predicate::str::contains("uncategorized"));
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    sift(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    sift(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    sift(&dir).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    sift(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("format = table"));
}
