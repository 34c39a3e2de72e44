use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("hugo-utils.log");
    let content = root.join("content");
    fs::create_dir(&content).unwrap();
    fs::write(content.join("page.md"), "---\ntitle: page\n---\n").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
[content]
root = "{}"

[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        content.display(),
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hugo-utils"));
    cmd.arg("--config").arg(&config_path).arg("list").assert().success();

    assert!(log_file.exists(), "Log file should be created");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let page = root.join("page.md");
    fs::write(&page, "---\ntitle: page\n---\n").unwrap();

    let config_path = root.join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"trace\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hugo-utils"));
    cmd.arg("--config")
        .arg(&config_path)
        .arg("update")
        .arg("--filepath")
        .arg(&page)
        .assert()
        .success();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hugo-utils"));
    cmd.arg("--config").arg(dir.path().join("nope.toml")).arg("list").assert().failure();
}
