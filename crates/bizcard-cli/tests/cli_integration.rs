//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bizcard").expect("Failed to find bizcard binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Write a card JSON file into the temp dir and return its path
fn write_card(data_dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = data_dir.path().join("card.json");
    std::fs::write(&path, json).unwrap();
    path
}

const VALID_CARD: &str = r#"{
    "firstName": "Sara",
    "lastName": "Ali",
    "jobTitle": "Designer",
    "company": "Studio",
    "email": "sara@studio.io",
    "phone": "+966501234567",
    "website": "https://studio.io"
}"#;

// ============================================================================
// QR Command Tests
// ============================================================================

#[test]
fn test_qr_url_payload_and_image_url() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["qr", "url", "--url", "https://example.com", "--size", "420"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload: https://example.com"))
        .stdout(predicate::str::contains("size=400x400"))
        .stdout(predicate::str::contains("data=https%3A%2F%2Fexample.com"));
}

#[test]
fn test_qr_malformed_config_warns_and_uses_defaults() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("config.toml"), "log_level = [").unwrap();

    cli_cmd(&data_dir)
        .args(["qr", "text", "--text", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.qrserver.com"))
        .stderr(predicate::str::contains("Using default config"));
}

#[test]
fn test_qr_wifi_payload() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args([
            "qr", "wifi", "--ssid", "Office", "--password", "p@ss", "--security", "WEP",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload: WIFI:T:WEP;S:Office;P:p@ss;;"));
}

#[test]
fn test_qr_options_in_url() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args([
            "qr", "phone", "--phone", "+966501234567", "--ecc", "H", "--fg", "#112233",
            "--margin", "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload: tel:+966501234567"))
        .stdout(predicate::str::contains("color=112233"))
        .stdout(predicate::str::contains("margin=20"))
        .stdout(predicate::str::contains("ecc=H"));
}

#[test]
fn test_qr_writes_default_config() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["qr", "text", "--text", "hello"])
        .assert()
        .success();

    assert!(data_dir.path().join("config.toml").exists());
}

#[test]
fn test_qr_empty_payload_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["qr", "url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to encode"));
}

#[test]
fn test_qr_unknown_kind_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["qr", "vcard", "--text", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown QR type"));
}

// ============================================================================
// Preference Command Tests
// ============================================================================

#[test]
fn test_prefs_show_defaults() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: ar"))
        .stdout(predicate::str::contains("direction: rtl"))
        .stdout(predicate::str::contains("theme: BLUE_THEME"))
        .stdout(predicate::str::contains("border radius: 7"));
}

#[test]
fn test_prefs_language_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["prefs", "set-language", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("direction: ltr"));

    cli_cmd(&data_dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("language: en"))
        .stdout(predicate::str::contains("direction: ltr"));
}

#[test]
fn test_prefs_radius_clamped() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["prefs", "set-radius", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Radius clamped to 24"))
        .stdout(predicate::str::contains("border radius: 24"));
}

#[test]
fn test_prefs_invalid_theme_fails() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["prefs", "set-theme", "PINK_THEME"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn test_prefs_reset() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["prefs", "set-mode", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: dark"));

    cli_cmd(&data_dir)
        .args(["prefs", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preferences reset."))
        .stdout(predicate::str::contains("mode: light"));
}

// ============================================================================
// Template and Card Command Tests
// ============================================================================

#[test]
fn test_templates_lists_all() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["prefs", "set-language", "en"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("modern"))
        .stdout(predicate::str::contains("bold"))
        .stdout(predicate::str::contains("[premium]"));
}

#[test]
fn test_card_validate_ok() {
    let data_dir = TempDir::new().unwrap();
    let card = write_card(&data_dir, VALID_CARD);

    cli_cmd(&data_dir)
        .args(["card", "validate"])
        .arg(&card)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: Sara Ali"));
}

#[test]
fn test_card_validate_reports_issues() {
    let data_dir = TempDir::new().unwrap();
    let card = write_card(
        &data_dir,
        r#"{"firstName": "S", "lastName": "Ali", "jobTitle": "Designer", "company": "Studio", "email": "nope"}"#,
    );

    cli_cmd(&data_dir)
        .args(["card", "validate"])
        .arg(&card)
        .assert()
        .failure()
        .stdout(predicate::str::contains("firstName"))
        .stdout(predicate::str::contains("email"));
}

#[test]
fn test_card_validate_missing_file() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["card", "validate", "/no/such/card.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_card_vcard_stdout() {
    let data_dir = TempDir::new().unwrap();
    let card = write_card(&data_dir, VALID_CARD);

    cli_cmd(&data_dir)
        .args(["card", "vcard"])
        .arg(&card)
        .assert()
        .success()
        .stdout(predicate::str::contains("BEGIN:VCARD"))
        .stdout(predicate::str::contains("FN:Sara Ali"))
        .stdout(predicate::str::contains("ORG:Studio"));
}

#[test]
fn test_card_vcard_to_directory() {
    let data_dir = TempDir::new().unwrap();
    let card = write_card(&data_dir, VALID_CARD);

    cli_cmd(&data_dir)
        .args(["card", "vcard"])
        .arg(&card)
        .arg("--output")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:"));

    assert!(data_dir.path().join("Sara-Ali.vcf").exists());
}

#[test]
fn test_help_lists_commands() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("qr"))
        .stdout(predicate::str::contains("prefs"))
        .stdout(predicate::str::contains("templates"));
}
