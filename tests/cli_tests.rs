//! Tests for the `prl` binary: flags, output and exit status.

use std::process::{Command, Output, Stdio};
use std::time::Duration;

fn prl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prl"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run prl binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_dry_run_lists_commands_in_order() {
    let output = prl(&["-c", "echo {seq 1 3}", "--dry-run"]);

    assert!(output.status.success());
    let out = stdout(&output);
    let divider = "=".repeat(50);
    assert_eq!(
        out,
        format!("\n{divider}\necho 1\n\n{divider}\necho 2\n\n{divider}\necho 3\n")
    );
}

#[test]
fn test_dry_run_silent_prints_nothing() {
    let output = prl(&["-c", "echo {seq 1 3}", "--dry-run", "-s"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_execution_prints_results() {
    let output = prl(&["-j", "4", "-c", "echo {seq 1 3}"]);

    assert!(output.status.success());
    let out = stdout(&output);
    for expected in ["1\n", "2\n", "3\n"] {
        assert!(out.contains(expected), "missing {:?} in {:?}", expected, out);
    }
}

#[test]
fn test_json_output() {
    let output = prl(&["-j", "2", "-c", "echo {seq 1 5}", "-o", "json"]);

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry["index"], i);
        assert_eq!(entry["output"], format!("{}\n", i + 1));
        assert_eq!(entry["status"], "completed");
    }
}

#[test]
fn test_file_source() {
    let dir = tempfile::TempDir::new().unwrap();
    let list = dir.path().join("names.txt");
    std::fs::write(&list, "ann\nbob\n").unwrap();

    let template = format!("echo hi {{{}}}", list.display());
    let output = prl(&["--source", "file", "-c", &template, "--dry-run"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("echo hi ann\n"));
    assert!(out.contains("echo hi bob\n"));
}

#[test]
fn test_many_jobs() {
    let output = prl(&[
        "-j",
        "4",
        "-c",
        "ls {for i in `seq 1 200`; do echo /; done}",
        "-s",
    ]);

    assert!(output.status.success());
}

#[test]
fn test_no_placeholders_fails_with_usage() {
    let output = prl(&["-c", "echo hello"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Usage:"));
    assert!(err.contains("no dynamic arguments supplied"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_mismatch_fails() {
    let output = prl(&["-c", "echo {seq 1 2} {seq 1 3}"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not the same"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_failing_job_fails_the_run() {
    let output = prl(&["-c", "exit {printf '0\\n2\\n'}"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("exit status: 2"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_zero_workers_rejected() {
    let output = prl(&["-j", "0", "-c", "echo {seq 1 2}"]);

    assert!(!output.status.success());
}

#[test]
fn test_missing_template_rejected() {
    let output = prl(&["-j", "2"]);

    assert!(!output.status.success());
}

#[test]
fn test_progress_line_per_job_at_default_level() {
    let output = Command::new(env!("CARGO_BIN_EXE_prl"))
        .args(["-j", "2", "-c", "echo {seq 1 5}", "-s"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run prl binary");

    assert!(output.status.success());
    let err = stderr(&output);
    let progress: Vec<&str> = err.lines().filter(|l| l.contains("Job finished")).collect();
    assert_eq!(progress.len(), 5, "{}", err);
    assert!(progress.iter().all(|l| l.contains("Executing commands...")));
}

#[test]
fn test_help_documents_posix_shell() {
    let output = prl(&["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("POSIX"));
}

#[test]
fn test_sigint_stops_queued_jobs() {
    let child = Command::new(env!("CARGO_BIN_EXE_prl"))
        .args(["-j", "1", "-c", "sleep 0.5; echo {seq 1 6}"])
        .env("RUST_LOG", "warn")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run prl binary");

    // Lands while the second job is running
    std::thread::sleep(Duration::from_millis(800));
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("failed to run kill");
    assert!(status.success());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("interrupted"), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
}
