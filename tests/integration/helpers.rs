//! Test helpers: in-memory tracker and release source

use chrono::{DateTime, TimeZone, Utc};
use jira_version_sync::core::error::{SyncError, SyncResult};
use jira_version_sync::jira::{SessionToken, TrackerClient, TrackerVersionEntry};
use jira_version_sync::repo::{CoreRelease, PluginHistory, PluginRelease, ReleaseSource};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub fn ts() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2011, 4, 25, 0, 0, 0).unwrap()
}

/// In-memory JIRA: hands out numbered session tokens, remembers created
/// versions, and can be told to reject a number of writes with auth errors
/// first.
pub struct FakeTracker {
  pub existing: RefCell<Vec<String>>,
  pub created: RefCell<Vec<TrackerVersionEntry>>,
  pub logins: RefCell<Vec<(String, String)>>,
  pub auth_failures_left: RefCell<u32>,
}

impl FakeTracker {
  pub fn with_versions(existing: &[&str]) -> Self {
    Self {
      existing: RefCell::new(existing.iter().map(|s| s.to_string()).collect()),
      created: RefCell::new(Vec::new()),
      logins: RefCell::new(Vec::new()),
      auth_failures_left: RefCell::new(0),
    }
  }

  pub fn failing_writes(self, times: u32) -> Self {
    *self.auth_failures_left.borrow_mut() = times;
    self
  }

  pub fn created_names(&self) -> Vec<String> {
    self.created.borrow().iter().map(|e| e.name.clone()).collect()
  }
}

impl TrackerClient for FakeTracker {
  fn login(&self, username: &str, password: &str) -> SyncResult<SessionToken> {
    let mut logins = self.logins.borrow_mut();
    logins.push((username.to_string(), password.to_string()));
    Ok(SessionToken(format!("JSESSIONID=session-{}", logins.len())))
  }

  fn versions(&self, _token: &SessionToken, _project_key: &str) -> SyncResult<Vec<String>> {
    Ok(self.existing.borrow().clone())
  }

  fn add_version(&self, _token: &SessionToken, _project_key: &str, entry: &TrackerVersionEntry) -> SyncResult<()> {
    let mut left = self.auth_failures_left.borrow_mut();
    if *left > 0 {
      *left -= 1;
      return Err(SyncError::auth("session expired"));
    }
    self.created.borrow_mut().push(entry.clone());
    Ok(())
  }
}

/// In-memory release repository
#[derive(Default)]
pub struct FakeSource {
  core: Vec<CoreRelease>,
  plugins: BTreeMap<String, PluginHistory>,
}

impl FakeSource {
  pub fn with_core(mut self, versions: &[&str]) -> Self {
    self.core.extend(versions.iter().map(|v| CoreRelease {
      version: v.to_string(),
      timestamp: ts(),
    }));
    self
  }

  pub fn with_plugin(mut self, artifact_id: &str, deprecated: bool, versions: &[&str]) -> Self {
    let releases = versions
      .iter()
      .map(|v| PluginRelease {
        artifact_id: artifact_id.to_string(),
        version: v.to_string(),
        timestamp: ts(),
      })
      .collect();
    self
      .plugins
      .insert(artifact_id.to_string(), PluginHistory { deprecated, releases });
    self
  }
}

impl ReleaseSource for FakeSource {
  fn core_releases(&self) -> SyncResult<Vec<CoreRelease>> {
    Ok(self.core.clone())
  }

  fn plugins(&self) -> SyncResult<Vec<String>> {
    Ok(self.plugins.keys().cloned().collect())
  }

  fn plugin_history(&self, artifact_id: &str) -> SyncResult<PluginHistory> {
    self
      .plugins
      .get(artifact_id)
      .cloned()
      .ok_or_else(|| SyncError::repo(format!("no release history for plugin '{}'", artifact_id)))
  }
}
