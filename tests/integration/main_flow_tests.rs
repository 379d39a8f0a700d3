use serial_test::serial;
use std::process::{Command, Output};

const BINARY: &str = env!("CARGO_BIN_EXE_standings-processor");

fn run_isolated(envs: &[(&str, &str)], args: &[&str]) -> Output {
    // A directory without a .env file
    let temp_dir = std::env::temp_dir().join("standings_processor_test");
    std::fs::create_dir_all(&temp_dir).ok();

    let output = Command::new(BINARY)
        .current_dir(&temp_dir)
        .env_clear()
        .env("PATH", std::env::var("PATH").unwrap_or_default())
        .envs(envs.iter().copied())
        .args(args)
        .output()
        .expect("Failed to execute processor");

    std::fs::remove_dir_all(&temp_dir).ok();
    output
}

/// Test that the application handles missing CONNECTION_STRING environment variable
#[test]
#[serial]
fn test_application_exits_on_missing_connection_string() {
    let output = run_isolated(&[("RUST_LOG", "error")], &[]);

    assert!(
        !output.status.success(),
        "Process should fail without CONNECTION_STRING"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("CONNECTION_STRING environment variable must be set"),
        "Should report missing CONNECTION_STRING. Got: {}",
        stderr
    );
}

/// Test that the application exits with error code when database connection fails
#[test]
#[serial]
fn test_application_exits_on_connection_failure() {
    let output = run_isolated(
        &[
            (
                "CONNECTION_STRING",
                "host=127.0.0.1 port=1 user=postgres password=wrong dbname=nonexistent connect_timeout=2"
            ),
            ("RUST_LOG", "error")
        ],
        &[]
    );

    assert!(!output.status.success(), "Process should fail with invalid connection");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to connect to database"),
        "Should log connection error. Got: {}",
        stderr
    );
    assert!(
        stderr.contains("Application cannot start without a valid database connection"),
        "Should log clear message about needing database connection"
    );
}

#[test]
#[serial]
fn test_save_extras_requires_team_id() {
    let output = run_isolated(&[("RUST_LOG", "error")], &["save-extras", "--opening", "3", "--additional", "1"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--team-id"));
}

#[test]
#[serial]
fn test_help_lists_commands() {
    let output = run_isolated(&[], &["--help"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["standings", "extras", "save-extras", "points-table"] {
        assert!(stdout.contains(command), "help should mention {}", command);
    }
}
