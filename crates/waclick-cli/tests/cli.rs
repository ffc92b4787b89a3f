use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_raw(config_home: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("waclick")
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = run_raw(config_home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(config_home: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("waclick")
        .env("XDG_CONFIG_HOME", config_home)
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("custom.toml");
    fs::write(&path, contents).expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms).expect("chmod");
    }
    path
}

#[test]
fn cli_link_prints_url() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(
        temp.path(),
        &["link", "050-123-4567", "--message", "Hello there"],
    );
    assert_eq!(
        stdout.trim(),
        "https://wa.me/972501234567?text=Hello%20there"
    );
}

#[test]
fn cli_link_without_message_has_no_query() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["link", "+972501234567"]);
    assert_eq!(stdout.trim(), "https://wa.me/972501234567");
}

#[test]
fn cli_link_json_reports_parts() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_cmd_json(temp.path(), &["link", "501234567", "-m", "שלום"]);
    assert_eq!(value["phone"], "972501234567");
    assert_eq!(value["message"], "שלום");
    assert_eq!(
        value["url"],
        "https://wa.me/972501234567?text=%D7%A9%D7%9C%D7%95%D7%9D"
    );
    assert_eq!(value["copied"], false);
    assert!(value.get("qr").is_none());
}

#[test]
fn cli_link_rejects_phone_without_digits() {
    let temp = TempDir::new().expect("temp dir");
    let output = run_raw(temp.path(), &["link", "no digits here"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("phone number is required"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_normalize_json() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_cmd_json(temp.path(), &["normalize", "(050) 123-4567"]);
    assert_eq!(value["input"], "(050) 123-4567");
    assert_eq!(value["phone"], "972501234567");
}

#[test]
fn cli_normalize_with_policy_override() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(
        temp.path(),
        &["normalize", "07911 123456", "--country-code", "44"],
    );
    assert_eq!(stdout.trim(), "447911123456");

    let output = run_raw(temp.path(), &["normalize", "0501", "--local-length", "0"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_link_with_qr_prints_code_block() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["link", "0501234567", "--qr"]);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("https://wa.me/972501234567"));
    assert!(stdout.lines().count() > 10);
}

#[test]
fn cli_qr_json_includes_url() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_cmd_json(temp.path(), &["qr", "0501234567", "-m", "hi"]);
    assert_eq!(value["url"], "https://wa.me/972501234567?text=hi");
    assert!(value["qr"].as_str().expect("qr").lines().count() > 10);
}

#[test]
fn cli_uses_config_file_policy() {
    let temp = TempDir::new().expect("temp dir");
    let config = write_config(
        temp.path(),
        "[phone]\ncountry_code = \"1\"\nlocal_length = 10\n",
    );
    let stdout = run_cmd(
        temp.path(),
        &[
            "--config",
            config.to_str().expect("config path"),
            "link",
            "415 555 1212",
        ],
    );
    assert_eq!(stdout.trim(), "https://wa.me/14155551212");
}

#[test]
fn cli_missing_explicit_config_is_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("missing.toml");
    let output = run_raw(
        temp.path(),
        &[
            "--config",
            missing.to_str().expect("config path"),
            "link",
            "0501234567",
        ],
    );
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_completions_emit_script() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["completions", "bash"]);
    assert!(stdout.contains("waclick"));
}

#[test]
fn cli_json_rejected_for_commands_without_json_output() {
    let temp = TempDir::new().expect("temp dir");
    let cases: [&[&str]; 2] = [&["--json", "completions", "bash"], &["--json", "tui"]];
    for args in cases {
        let output = run_raw(temp.path(), args);
        assert_eq!(output.status.code(), Some(3), "{:?}", args);
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).expect("utf8");
        assert!(stderr.contains("--json is not supported"), "{stderr}");
    }
}

#[test]
fn cli_message_may_start_with_hyphen() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_cmd(temp.path(), &["link", "0501234567", "-m", "-5% today"]);
    assert_eq!(
        stdout.trim(),
        "https://wa.me/972501234567?text=-5%25%20today"
    );

    let value = run_cmd_json(temp.path(), &["qr", "0501234567", "--message", "-x"]);
    assert_eq!(value["url"], "https://wa.me/972501234567?text=-x");
}

#[cfg(target_os = "linux")]
#[test]
fn cli_copy_without_display_prints_link_before_failing() {
    let temp = TempDir::new().expect("temp dir");
    let output = cargo_bin_cmd!("waclick")
        .env("XDG_CONFIG_HOME", temp.path())
        .env_remove("RUST_LOG")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["link", "0501234567", "--copy"])
        .output()
        .expect("run command");
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "https://wa.me/972501234567");
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("copy link to clipboard"), "{stderr}");
}
