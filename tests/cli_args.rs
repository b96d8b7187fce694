//! Integration tests for CLI argument handling
//!
//! Tests the binary's flag surface and startup credential resolution.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_parkscout"))
        .args(args)
        .env_remove("MAPQUEST_API_KEY")
        .output()
        .expect("Failed to execute parkscout")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parkscout"), "Help should mention parkscout");
    assert!(
        stdout.contains("cache-file"),
        "Help should mention --cache-file flag"
    );
    assert!(
        stdout.contains("api-key"),
        "Help should mention --api-key flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parkscout"));
}

#[test]
fn test_missing_api_key_is_a_startup_error() {
    // No --api-key and the environment variable removed: the program must
    // fail before ever prompting or touching the network.
    let output = run_cli(&[]);
    assert!(
        !output.status.success(),
        "Expected missing credential to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("MAPQUEST_API_KEY") || stderr.contains("api-key"),
        "Should name the credential sources: {}",
        stderr
    );
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = run_cli(&["--no-such-flag"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for startup resolution that don't require running the binary

    use clap::Parser;
    use parkscout::cli::{resolve_api_key, Cli};

    #[test]
    fn test_cli_no_args_leaves_options_unset() {
        let cli = Cli::parse_from(["parkscout"]);
        assert!(cli.cache_file.is_none());
        assert!(cli.api_key.is_none());
    }

    #[test]
    fn test_cli_both_flags_parse() {
        let cli = Cli::parse_from([
            "parkscout",
            "--cache-file",
            "/tmp/cache.json",
            "--api-key",
            "k",
        ]);
        assert!(cli.cache_file.is_some());
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_resolve_api_key_flag_wins_over_env() {
        let key = resolve_api_key(Some("flag".to_string()), Some("env".to_string())).unwrap();
        assert_eq!(key, "flag");
    }

    #[test]
    fn test_resolve_api_key_requires_some_source() {
        assert!(resolve_api_key(None, None).is_err());
    }
}
