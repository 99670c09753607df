//! Tests for the CLI boundary

use anyhow::Result;
use std::process::Command;

fn run_binary(args: &[&str]) -> Result<std::process::Output> {
  let bin = env!("CARGO_BIN_EXE_jira-version-sync");
  Ok(Command::new(bin).args(args).output()?)
}

#[test]
fn test_missing_required_flag_exits_one_with_usage() -> Result<()> {
  let output = run_binary(&[])?;

  assert_eq!(output.status.code(), Some(1));
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("--jira-base-url"));
  assert!(stderr.to_lowercase().contains("usage"));
  Ok(())
}

#[test]
fn test_unknown_flag_exits_one() -> Result<()> {
  let output = run_binary(&["--jira-base-url", "https://issues.jenkins.io", "--bogus"])?;

  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_help_exits_zero() -> Result<()> {
  let output = run_binary(&["--help"])?;

  assert_eq!(output.status.code(), Some(0));
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("--no-experimental"));
  Ok(())
}
