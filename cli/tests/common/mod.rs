//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the spanscope binary.
pub fn spanscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spanscope"))
}

/// Run a command and return its stdout, asserting success.
pub fn stdout_of(args: &[&str]) -> String {
    let output = spanscope()
        .args(args)
        .output()
        .expect("failed to execute command");
    assert!(output.status.success(), "{args:?} failed");
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], expected: Expect) {
    expected.assert_eq(&stdout_of(args));
}

/// Run a command and check that stderr matches the expected output.
pub fn check_stderr(args: &[&str], expected: Expect) {
    let output = spanscope()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stderr = String::from_utf8_lossy(&output.stderr);
    expected.assert_eq(&stderr);
}

/// The header every transcript starts with.
pub fn header() -> String {
    format!(
        "spanscope\nSpan tour version: {}\n\n{}\n",
        env!("CARGO_PKG_VERSION"),
        "-".repeat(80)
    )
}
