//! Resilient version writer
//!
//! Wraps each create-version call in a re-authentication retry loop so an
//! expired or invalidated session never aborts the batch. On an auth
//! rejection the writer re-logs-in and retries the same entry; any other
//! write error propagates and aborts the run.
//!
//! A failed re-login (rejected credentials or transport alike) is itself
//! retried under the same policy, which under the default retry-forever
//! policy means a permanently wrong credentials file spins. That matches the
//! original tool; callers wanting an upper bound inject a limited policy.

use crate::core::error::{SyncError, SyncResult};
use crate::core::reconcile::VersionSink;
use crate::core::retry::RetryPolicy;
use crate::core::session::SessionManager;
use crate::jira::{SessionToken, TrackerClient, TrackerVersionEntry};

pub struct ResilientWriter<'a> {
  client: &'a dyn TrackerClient,
  session: &'a SessionManager,
  project_key: &'a str,
  policy: RetryPolicy,
  token: SessionToken,
}

impl<'a> ResilientWriter<'a> {
  pub fn new(
    client: &'a dyn TrackerClient,
    session: &'a SessionManager,
    project_key: &'a str,
    policy: RetryPolicy,
    token: SessionToken,
  ) -> Self {
    Self {
      client,
      session,
      project_key,
      policy,
      token,
    }
  }

  /// Re-authenticate after a rejection, retrying failed logins under the
  /// policy. Returns the error to surface when the policy is exhausted.
  fn reauthenticate(&mut self, rejection: SyncError, attempts: &mut u32) -> SyncResult<()> {
    let mut last = rejection;
    loop {
      *attempts += 1;
      if !self.policy.allows(*attempts) {
        return Err(last);
      }
      self.policy.pause();

      match self.session.login(self.client) {
        Ok(token) => {
          self.token = token;
          return Ok(());
        }
        Err(e) => last = e,
      }
    }
  }
}

impl VersionSink for ResilientWriter<'_> {
  fn create(&mut self, entry: &TrackerVersionEntry) -> SyncResult<()> {
    let mut attempts = 0u32;

    loop {
      match self.client.add_version(&self.token, self.project_key, entry) {
        Ok(()) => return Ok(()),
        Err(e) if e.is_auth() => self.reauthenticate(e, &mut attempts)?,
        Err(e) => return Err(e),
      }
    }
  }
}
