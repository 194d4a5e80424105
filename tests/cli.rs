use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_config(dir: &Path, api_base_url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, format!("api_base_url: {api_base_url}\n")).expect("failed to write config");
    path
}

fn write_credentials(dir: &Path, token: &str, user_id: &str) -> PathBuf {
    let path = dir.join("credentials.yaml");
    fs::write(&path, format!("auth_token: {token}\nuser_id: '{user_id}'\n"))
        .expect("failed to write credentials");
    path
}

fn gochat(config_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gochat"));
    cmd.arg("--config")
        .arg(config_path)
        .env_remove("GOCHAT_CONFIG")
        .env_remove("GOCHAT_API_BASE_URL")
        .env_remove("GOCHAT_FORMAT")
        .env_remove("GOCHAT_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://chat.internal:9000");

    let assert = gochat(&config_path).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("http://chat.internal:9000"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("Not logged in"));

    Ok(())
}

#[test]
fn status_reports_stored_session_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");
    write_credentials(temp.path(), "opaque", "42");

    gochat(&config_path)
        .args(["--format", "json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"logged_in\": true"))
        .stdout(predicate::str::contains("\"user_id\": \"42\""));

    Ok(())
}

#[test]
fn legacy_token_key_counts_as_logged_in() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");
    let credentials = temp.path().join("credentials.yaml");
    fs::write(&credentials, "token: old-token\nuser_id: '3'\n")?;

    gochat(&config_path)
        .args(["open", "/login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/home"));

    let saved = fs::read_to_string(&credentials)?;
    assert!(saved.contains("auth_token: old-token"));
    assert!(!saved.contains("\ntoken:") && !saved.starts_with("token:"));

    Ok(())
}

#[test]
fn open_protected_page_logged_out_lands_on_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");

    gochat(&config_path)
        .args(["open", "/friends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("redirected to"))
        .stdout(predicate::str::contains("/login"));

    Ok(())
}

#[test]
fn open_unknown_page_logged_in_lands_on_home() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");
    write_credentials(temp.path(), "tok", "1");

    gochat(&config_path)
        .args(["--format", "json", "open", "/nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\": \"/home\""))
        .stdout(predicate::str::contains("\"redirected\": true"));

    Ok(())
}

// ============================================================================
// Error Scenario Tests
// ============================================================================

/// Protected commands stop at the route guard before any request.
#[test]
fn protected_command_requires_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:9");

    gochat(&config_path)
        .args(["friends", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gochat login"));

    Ok(())
}

#[test]
fn login_page_rejects_logged_in_user() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:9");
    write_credentials(temp.path(), "tok", "5");

    gochat(&config_path)
        .args(["login", "--email", "a@b.c", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already logged in as user 5"));

    Ok(())
}

#[test]
fn non_numeric_conversation_id_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://127.0.0.1:9");
    write_credentials(temp.path(), "tok", "5");

    gochat(&config_path)
        .args(["messages", "send", "abc", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid numeric identifier"));

    Ok(())
}

#[test]
fn invalid_api_url_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");

    gochat(&config_path)
        .args(["--api-url", "localhost:8080", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_base_url"));

    Ok(())
}

#[test]
fn logout_removes_stored_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");
    let credentials = write_credentials(temp.path(), "tok", "5");

    gochat(&config_path)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!credentials.exists());
    Ok(())
}

#[test]
fn logout_recovers_from_corrupt_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(temp.path(), "http://localhost:8080");
    let credentials = temp.path().join("credentials.yaml");
    fs::write(&credentials, "- not\n- a map\n")?;

    gochat(&config_path).arg("logout").assert().success();

    assert!(!credentials.exists());
    Ok(())
}

// ============================================================================
// Gateway Tests
// ============================================================================

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn login_stores_credentials() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _login = server
        .mock("POST", "/v1/auth/login")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "email": "ada@example.com",
            "password": "secret"
        })))
        .with_status(200)
        .with_body(r#"{"user_id": 42, "token": "jwt-abc"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    gochat(&config_path)
        .args(["login", "--email", "ada@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as user"));

    let saved = fs::read_to_string(temp.path().join("credentials.yaml"))?;
    assert!(saved.contains("auth_token: jwt-abc"));
    assert!(saved.contains("'42'") || saved.contains("\"42\""));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn login_failure_shows_backend_message() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _login = server
        .mock("POST", "/v1/auth/login")
        .with_status(401)
        .with_body(r#"{"message": "invalid credentials"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());

    gochat(&config_path)
        .args(["login", "--email", "ada@example.com", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: invalid credentials"));

    assert!(!temp.path().join("credentials.yaml").exists());
    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn friends_list_sends_bearer_token() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _friends = server
        .mock("POST", "/v1/friends")
        .match_header("authorization", "Bearer tok-7")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "user_id": "7",
            "show_friends": true
        })))
        .with_status(200)
        .with_body(r#"{"users": [{"id": 8, "first_name": "Bo", "last_name": "Diddley", "user_name": "bo"}]}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());
    write_credentials(temp.path(), "tok-7", "7");

    gochat(&config_path)
        .args(["--format", "json", "friends", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"user_name\": \"bo\""))
        .stdout(predicate::str::contains("\"count\": 1"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn api_command_sends_raw_request() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _raw = server
        .mock("PUT", "/v1/custom")
        .match_header("x-client", "cli")
        .match_header("authorization", "Bearer tok")
        .match_body("plain text")
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(temp.path(), &server.url());
    write_credentials(temp.path(), "tok", "1");

    gochat(&config_path)
        .args(["api", "/v1/custom", "-X", "put", "-d", "plain text", "-H", "X-Client: cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": true"));

    Ok(())
}
