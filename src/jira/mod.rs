//! JIRA tracker client
//!
//! - **rest**: JIRA REST API client over blocking reqwest
//!
//! The [`TrackerClient`] trait is the seam between the sync core and the
//! tracker: production wires in [`rest::JiraRestClient`], tests wire in
//! in-memory fakes.

pub mod rest;

use crate::core::error::SyncResult;
use chrono::{DateTime, Utc};

/// Opaque, renewable session token obtained from `login`. Never cached
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

/// A version entry to be created in the tracker. Write-once: this tool never
/// updates or deletes entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerVersionEntry {
  /// Canonical version name in the tracker's namespace
  pub name: String,
  /// Always true: only shipped releases are synced
  pub released: bool,
  /// Release timestamp copied from the repository candidate
  pub release_date: DateTime<Utc>,
}

impl TrackerVersionEntry {
  pub fn released(name: impl Into<String>, release_date: DateTime<Utc>) -> Self {
    Self {
      name: name.into(),
      released: true,
      release_date,
    }
  }
}

/// Remote operations this tool needs from the issue tracker
pub trait TrackerClient {
  /// Authenticate and obtain a session token. Empty credentials are a
  /// legitimate anonymous login attempt.
  fn login(&self, username: &str, password: &str) -> SyncResult<SessionToken>;

  /// Names of the versions currently defined for the project
  fn versions(&self, token: &SessionToken, project_key: &str) -> SyncResult<Vec<String>>;

  /// Create one version entry. Fails with `SyncError::Auth` when the session
  /// is rejected.
  fn add_version(&self, token: &SessionToken, project_key: &str, entry: &TrackerVersionEntry) -> SyncResult<()>;
}
