//! End-to-end sync runs against in-memory collaborators

use crate::helpers::*;
use anyhow::Result;
use jira_version_sync::commands::sync::{run_against, SyncParams};
use jira_version_sync::repo::filter::NoExperimental;
use std::io::Write;

fn params(credentials_file: Option<std::path::PathBuf>) -> SyncParams {
  SyncParams {
    jira_base_url: "https://issues.jenkins.io".to_string(),
    update_center_url: "https://updates.jenkins.io".to_string(),
    project_key: "JENKINS".to_string(),
    no_experimental: false,
    credentials_file,
  }
}

/// Credentials file that exists but is empty, so the run never looks at the
/// invoking user's home directory
fn no_credentials() -> Result<(tempfile::TempDir, std::path::PathBuf)> {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join(".jenkins-ci.org");
  std::fs::File::create(&path)?;
  Ok((dir, path))
}

#[test]
fn test_creates_missing_core_and_plugin_versions() -> Result<()> {
  let (_dir, creds) = no_credentials()?;
  let source = FakeSource::default()
    .with_core(&["1.409", "1.410"])
    .with_plugin("git-plugin", false, &["1.1.9"])
    .with_plugin("subversion", false, &["1.28"]);
  let tracker = FakeTracker::with_versions(&["jenkins-1.409"]);

  run_against(&source, &tracker, &params(Some(creds)))?;

  // Core reconciles before plugins; plugins in sorted artifact order
  assert_eq!(
    tracker.created_names(),
    vec!["jenkins-1.410", "git-1.1.9", "subversion-1.28"]
  );
  Ok(())
}

#[test]
fn test_second_run_creates_nothing() -> Result<()> {
  let (_dir, creds) = no_credentials()?;
  let source = FakeSource::default()
    .with_core(&["1.410"])
    .with_plugin("git-plugin", false, &["1.1.9"]);

  let first = FakeTracker::with_versions(&[]);
  run_against(&source, &first, &params(Some(creds.clone())))?;
  assert_eq!(first.created_names(), vec!["jenkins-1.410", "git-1.1.9"]);

  // Exactly what the first run left behind is now in the tracker
  let second = FakeTracker::with_versions(&["jenkins-1.410", "git-1.1.9"]);
  run_against(&source, &second, &params(Some(creds)))?;
  assert!(second.created_names().is_empty());
  Ok(())
}

#[test]
fn test_deprecated_plugin_is_skipped() -> Result<()> {
  let (_dir, creds) = no_credentials()?;
  let source = FakeSource::default()
    .with_plugin("abandoned-plugin", true, &["1.0", "2.0"])
    .with_plugin("git-plugin", false, &["1.1.9"]);
  let tracker = FakeTracker::with_versions(&[]);

  run_against(&source, &tracker, &params(Some(creds)))?;

  assert_eq!(tracker.created_names(), vec!["git-1.1.9"]);
  Ok(())
}

#[test]
fn test_expired_session_is_renewed_mid_batch() -> Result<()> {
  let (_dir, creds) = no_credentials()?;
  let source = FakeSource::default().with_core(&["1.410"]);
  let tracker = FakeTracker::with_versions(&[]).failing_writes(1);

  run_against(&source, &tracker, &params(Some(creds)))?;

  // Initial login plus exactly one re-login; the entry lands once
  assert_eq!(tracker.logins.borrow().len(), 2);
  assert_eq!(tracker.created_names(), vec!["jenkins-1.410"]);
  Ok(())
}

#[test]
fn test_no_experimental_filters_the_source() -> Result<()> {
  let (_dir, creds) = no_credentials()?;
  let source = NoExperimental::new(
    FakeSource::default()
      .with_core(&["1.410", "1.411-beta-1"])
      .with_plugin("git-plugin", false, &["1.1.9", "1.2-alpha-1"]),
  );
  let tracker = FakeTracker::with_versions(&[]);

  run_against(&source, &tracker, &params(Some(creds)))?;

  assert_eq!(tracker.created_names(), vec!["jenkins-1.410", "git-1.1.9"]);
  Ok(())
}

#[test]
fn test_credentials_file_feeds_the_login() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let creds = dir.path().join(".jenkins-ci.org");
  let mut file = std::fs::File::create(&creds)?;
  writeln!(file, "userName=releasebot")?;
  writeln!(file, "password=hunter2")?;

  let source = FakeSource::default();
  let tracker = FakeTracker::with_versions(&[]);

  run_against(&source, &tracker, &params(Some(creds)))?;

  assert_eq!(
    tracker.logins.borrow().as_slice(),
    &[("releasebot".to_string(), "hunter2".to_string())]
  );
  Ok(())
}

#[test]
fn test_absent_credentials_file_logs_in_anonymously() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let creds = dir.path().join("does-not-exist");

  let source = FakeSource::default();
  let tracker = FakeTracker::with_versions(&[]);

  run_against(&source, &tracker, &params(Some(creds)))?;

  assert_eq!(
    tracker.logins.borrow().as_slice(),
    &[(String::new(), String::new())]
  );
  Ok(())
}

#[test]
fn test_release_dates_come_from_the_repository() -> Result<()> {
  let (_dir, creds) = no_credentials()?;
  let source = FakeSource::default().with_core(&["1.410"]);
  let tracker = FakeTracker::with_versions(&[]);

  run_against(&source, &tracker, &params(Some(creds)))?;

  let created = tracker.created.borrow();
  assert_eq!(created.len(), 1);
  assert!(created[0].released);
  assert_eq!(created[0].release_date, ts());
  Ok(())
}
