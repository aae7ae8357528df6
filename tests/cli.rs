//! End-to-end tests for the cluster-env binary: exit codes and stream usage.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cluster-env"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cluster-env")
}

fn write_config(dir: &Path, contents: &str) -> String {
    let path = dir.join("cluster.yaml");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn prints_assignments_for_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r#"
project:
  name: demo
jobs:
  - name: simulation
    script: submit_gate.sbatch
    array: "1-10"
  - name: merge_results
    script: merge_results.sbatch
    depends_on: simulation
claude:
  enabled: true
  auto_fix: true
"#,
    );

    let output = run(&[&path]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "unexpected stderr: {:?}", output.stderr);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2 + 2 * 6 + 7);
    assert_eq!(lines[0], "PROJECT_NAME=demo");
    assert_eq!(lines[1], "NUM_JOBS=2");
    assert!(lines.contains(&"JOB_1_DEPENDS_ON=simulation"));
    assert!(lines.contains(&"CLAUDE_ENABLED=true"));
    assert!(stdout.ends_with("CLAUDE_FIX_BUDGET=1.00\n"));
}

#[test]
fn missing_file_exits_one_without_stdout() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    let output = run(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn malformed_yaml_exits_one_without_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "jobs: [\n  - name: a\n");

    let output = run(&[&path]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to parse YAML"), "stderr: {}", stderr);
}

#[test]
fn non_mapping_document_exits_one() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "- a\n- b\n");

    let output = run(&[&path]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_argument_exits_one() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn extra_argument_exits_one() {
    let output = run(&["a.yaml", "b.yaml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn help_exits_zero() {
    let output = run(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("CONFIG"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "jobs: []\n");

    let output = run(&["-v", &path]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("NUM_JOBS=0\n"));
    assert!(stdout.lines().all(|line| line.contains('=')));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("decoded cluster config"), "stderr: {}", stderr);
}
