//! Test assertion helpers.

use std::process::Output;

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command exited with status 1.
pub fn assert_exit_one(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit status 1, stderr: {}",
        stderr(output)
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout is exactly `expected`.
pub fn assert_stdout_eq(output: &Output, expected: &str) {
    assert_eq!(stdout(output), expected, "stderr: {}", stderr(output));
}

/// Assert nothing was written to stdout.
pub fn assert_no_stdout(output: &Output) {
    assert!(
        output.stdout.is_empty(),
        "expected empty stdout, got: {}",
        stdout(output)
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    output
        .clone()
        .assert()
        .stderr(predicate::str::contains(expected));
}

/// Assert stderr does not contain a string.
pub fn assert_stderr_excludes(output: &Output, unexpected: &str) {
    output
        .clone()
        .assert()
        .stderr(predicate::str::contains(unexpected).not());
}
