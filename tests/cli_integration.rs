//! Integration tests for the PassVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Interactive prompts are avoided by passing every value as a flag and
//! the master password through `PASSVAULT_PASSWORD`; clipboard commands
//! are left out because headless CI has no clipboard to copy into.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MASTER: &str = "test-master-pw";

/// Argon2 settings small enough to keep generator tests fast.
const FAST_SETTINGS: &str = "argon2_memory_kib = 8192
argon2_iterations = 1
argon2_parallelism = 1
";

/// Helper: get a Command pointing at the passvault binary.
fn passvault() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passvault").expect("binary should exist")
}

/// Helper: a passvault command rooted in `tmp` with the master password
/// preset, so the vault directory becomes `<tmp>/.passvault`.
fn passvault_in(tmp: &TempDir) -> Command {
    let mut cmd = passvault();
    cmd.current_dir(tmp.path()).env("PASSVAULT_PASSWORD", MASTER);
    cmd
}

/// The generated password is the only stdout line without spaces; the
/// status lines around it all carry a symbol and a message.
fn password_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.contains(' '))
        .expect("output should contain a password line")
        .to_string()
}

// ---------------------------------------------------------------------------
// Surface checks
// ---------------------------------------------------------------------------

#[test]
fn help_flag_shows_usage() {
    passvault()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Local encrypted password vault",
        ))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("regen"))
        .stdout(predicate::str::contains("profiles"))
        .stdout(predicate::str::contains("fingerprint"));
}

#[test]
fn version_flag_shows_version() {
    passvault()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn no_args_shows_help() {
    // Running with no subcommand should show an error or help.
    passvault()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn invalid_vault_name_rejected() {
    passvault()
        .args(["--vault", "UPPER", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn unknown_backend_rejected() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp)
        .args(["--backend", "carrier-pigeon", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown backend"));
}

// ---------------------------------------------------------------------------
// Vault lifecycle
// ---------------------------------------------------------------------------

#[test]
fn init_creates_the_vault_file() {
    let tmp = TempDir::new().unwrap();

    passvault_in(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault 'main' created"));

    assert!(tmp.path().join(".passvault/main.csv").is_file());
}

#[test]
fn init_refuses_a_second_time() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp).arg("init").assert().success();

    passvault_in(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn short_master_password_rejected_on_init() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp)
        .env("PASSVAULT_PASSWORD", "short")
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8 characters"));
}

#[test]
fn add_list_show_delete_flow() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp).arg("init").assert().success();

    passvault_in(&tmp)
        .args(["add", "--title", "email", "--username", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 total)"));

    // The listing masks the password.
    passvault_in(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("*****"))
        .stdout(predicate::str::contains("hunter2").not());

    // `show` prints exactly the password, for scripting.
    passvault_in(&tmp)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout("hunter2\n");

    passvault_in(&tmp)
        .args(["delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry 'email'"));

    passvault_in(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"));
}

#[test]
fn random_add_prints_the_stored_password() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp).arg("init").assert().success();

    let added = passvault_in(&tmp)
        .args(["add", "--title", "gen", "--username", "u", "--random"])
        .assert()
        .success();
    let generated = password_line(&added.get_output().stdout);
    assert_eq!(generated.len(), 16);

    // What was printed is exactly what the vault stored.
    passvault_in(&tmp)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(format!("{generated}\n"));
}

#[test]
fn wrong_master_password_fails_to_open() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp).arg("init").assert().success();

    passvault_in(&tmp)
        .env("PASSVAULT_PASSWORD", "a-different-password")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn out_of_range_index_fails() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp).arg("init").assert().success();

    passvault_in(&tmp)
        .args(["show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn vaults_are_independent() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp).arg("init").assert().success();
    passvault_in(&tmp)
        .args(["--vault", "work", "init"])
        .assert()
        .success();

    passvault_in(&tmp)
        .args(["add", "--title", "personal-mail", "--username", "a", "--password", "pw1"])
        .assert()
        .success();

    // The other vault stays empty.
    passvault_in(&tmp)
        .args(["--vault", "work", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries"));
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[test]
fn generate_requires_an_image() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp)
        .args(["generate", "--site", "example.com", "--username", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--image"));
}

#[test]
fn generate_then_regen_rebuilds_the_same_password() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".passvault.toml"), FAST_SETTINGS).unwrap();
    fs::write(tmp.path().join("avatar.png"), b"not really a png").unwrap();

    let generated = passvault_in(&tmp)
        .args([
            "generate",
            "--site",
            "example.com",
            "--username",
            "alice",
            "--image",
            "avatar.png",
        ])
        .assert()
        .success();
    let password = password_line(&generated.get_output().stdout);
    assert_eq!(password.len(), 16);

    passvault_in(&tmp)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("alice"));

    // No image needed: the stored profile carries the fingerprint.
    passvault_in(&tmp)
        .args(["regen", "--site", "example.com", "--username", "alice"])
        .assert()
        .success()
        .stdout(format!("{password}\n"));
}

#[test]
fn regen_with_a_different_image_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".passvault.toml"), FAST_SETTINGS).unwrap();
    fs::write(tmp.path().join("avatar.png"), b"the original image").unwrap();
    fs::write(tmp.path().join("other.png"), b"a different image").unwrap();

    passvault_in(&tmp)
        .args([
            "generate",
            "--site",
            "example.com",
            "--username",
            "alice",
            "--image",
            "avatar.png",
        ])
        .assert()
        .success();

    passvault_in(&tmp)
        .args([
            "regen",
            "--site",
            "example.com",
            "--username",
            "alice",
            "--image",
            "other.png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fingerprint does not match"));
}

#[test]
fn regen_without_a_profile_fails() {
    let tmp = TempDir::new().unwrap();
    passvault_in(&tmp)
        .args(["regen", "--site", "nosuch.com", "--username", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn generate_rejects_out_of_range_length() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("avatar.png"), b"image").unwrap();

    passvault_in(&tmp)
        .args([
            "generate",
            "--site",
            "s.com",
            "--username",
            "u",
            "--length",
            "4",
            "--image",
            "avatar.png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be between 8 and 64"));
}

#[test]
fn generate_no_save_leaves_no_profile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".passvault.toml"), FAST_SETTINGS).unwrap();
    fs::write(tmp.path().join("avatar.png"), b"image").unwrap();

    passvault_in(&tmp)
        .args([
            "generate",
            "--site",
            "example.com",
            "--username",
            "alice",
            "--image",
            "avatar.png",
            "--no-save",
        ])
        .assert()
        .success();

    passvault_in(&tmp)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("No generator profiles"));
}

// ---------------------------------------------------------------------------
// Fingerprint and completions
// ---------------------------------------------------------------------------

#[test]
fn fingerprint_prints_the_sha256_digest() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("image.png");
    fs::write(&path, b"test-image-bytes").unwrap();

    passvault()
        .args(["fingerprint", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "573d05aa415feef0765c448120a4bc03f8a7f01a341a3a0cdc9c4ebe08b6e289",
        ));
}

#[test]
fn fingerprint_of_missing_file_fails() {
    passvault()
        .args(["fingerprint", "/no/such/file.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn completions_bash_prints_a_script() {
    passvault()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passvault"));
}

#[test]
fn completions_unknown_shell_fails() {
    passvault()
        .args(["completions", "tcsh"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// SQLite backend
// ---------------------------------------------------------------------------

#[cfg(feature = "sqlite-store")]
#[test]
fn sqlite_backend_end_to_end() {
    let tmp = TempDir::new().unwrap();

    passvault_in(&tmp)
        .args(["--backend", "sqlite", "init"])
        .assert()
        .success();
    assert!(tmp.path().join(".passvault/main.db").is_file());

    passvault_in(&tmp)
        .args([
            "--backend",
            "sqlite",
            "add",
            "--title",
            "db-entry",
            "--username",
            "u",
            "--password",
            "pw-in-sqlite",
        ])
        .assert()
        .success();

    passvault_in(&tmp)
        .args(["--backend", "sqlite", "show", "1"])
        .assert()
        .success()
        .stdout("pw-in-sqlite\n");
}
