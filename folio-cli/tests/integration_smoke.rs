//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    // Keep the developer's environment out of the tests
    cmd.env_remove("API_BASE_URL")
        .env_remove("API_KEY")
        .env_remove("RUST_LOG")
        .current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

#[test]
fn test_serve_help() {
    folio()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("X-Renderer-Key"))
        .stdout(predicate::str::contains("Directory served under /assets"));
}

#[test]
fn test_serve_without_api_key_fails() {
    folio()
        .arg("serve")
        .arg("--api-base-url")
        .arg("http://127.0.0.1:9")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API_KEY"));
}

#[test]
fn test_completions_bash() {
    folio()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
