//! Session management
//!
//! Turns stored credentials into a fresh tracker session token. Tokens are
//! disposable: the writer asks for a new one whenever the tracker rejects
//! the current session.

use crate::core::credentials::Credentials;
use crate::core::error::SyncResult;
use crate::jira::{SessionToken, TrackerClient};

pub struct SessionManager {
  credentials: Credentials,
}

impl SessionManager {
  pub fn new(credentials: Credentials) -> Self {
    Self { credentials }
  }

  /// Obtain a new session token. Empty credentials produce an anonymous
  /// login attempt, which the tracker may legitimately accept.
  pub fn login(&self, client: &dyn TrackerClient) -> SyncResult<SessionToken> {
    client.login(&self.credentials.username, &self.credentials.password)
  }
}
