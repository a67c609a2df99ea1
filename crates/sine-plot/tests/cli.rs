// File: crates/sine-plot/tests/cli.rs
// Purpose: Run the binary and check its transport contract: one base64 PNG line
// on stdout, diagnostics on stderr only, zero exit status.

use std::process::Command;

use plot_core::encode::{from_base64, is_png};

#[test]
fn prints_one_base64_png_line_and_logs_to_stderr() {
    let out = Command::new(env!("CARGO_BIN_EXE_sine-plot"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("spawn sine-plot");
    assert!(out.status.success(), "exit status {:?}", out.status);

    let stdout = String::from_utf8(out.stdout).expect("stdout is utf-8");
    assert!(stdout.ends_with('\n'), "stdout must be newline-terminated");
    assert_eq!(stdout.matches('\n').count(), 1, "stdout must hold exactly one line");

    let bytes = from_base64(stdout.trim_end_matches('\n')).expect("stdout decodes as base64");
    assert!(is_png(&bytes));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("writing base64 PNG to stdout"), "missing debug event on stderr: {stderr}");
    assert!(!stdout.contains("writing base64 PNG"));
}

#[test]
fn default_log_level_keeps_stderr_quiet() {
    let out = Command::new(env!("CARGO_BIN_EXE_sine-plot"))
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn sine-plot");
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("writing base64 PNG"));
}
