//! Error types for jira-version-sync with contextual messages and exit codes
//!
//! Every remote interaction in this tool can fail in one of a handful of
//! ways, and the retry loop in the writer needs to tell authentication
//! rejections apart from everything else. This module provides that
//! categorized error type along with the process exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for jira-version-sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid args, unreadable credentials file)
  User = 1,
  /// System error (transport, tracker, repository, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for jira-version-sync
#[derive(Debug)]
pub enum SyncError {
  /// The tracker rejected the session (login or write). Recovered inside
  /// the resilient writer by re-authenticating; only surfaces when a
  /// bounded retry policy is exhausted.
  Auth { message: String },

  /// Network-level failure talking to the tracker or the update centre
  Transport { message: String },

  /// The tracker answered with a non-auth error (bad request, 5xx, ...)
  Tracker { message: String },

  /// The release repository produced unusable data
  Repo { message: String },

  /// Credentials file exists but could not be read or parsed
  Credentials { path: PathBuf, message: String },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional help text
  Message { message: String, help: Option<String> },
}

impl SyncError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SyncError::Message {
      message: msg.into(),
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    SyncError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  pub fn auth(msg: impl Into<String>) -> Self {
    SyncError::Auth { message: msg.into() }
  }

  pub fn transport(msg: impl Into<String>) -> Self {
    SyncError::Transport { message: msg.into() }
  }

  pub fn tracker(msg: impl Into<String>) -> Self {
    SyncError::Tracker { message: msg.into() }
  }

  pub fn repo(msg: impl Into<String>) -> Self {
    SyncError::Repo { message: msg.into() }
  }

  /// True for errors the writer recovers from by re-authenticating
  pub fn is_auth(&self) -> bool {
    matches!(self, SyncError::Auth { .. })
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SyncError::Credentials { .. } => ExitCode::User,
      SyncError::Message { .. } => ExitCode::User,
      SyncError::Auth { .. }
      | SyncError::Transport { .. }
      | SyncError::Tracker { .. }
      | SyncError::Repo { .. }
      | SyncError::Io(_) => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SyncError::Auth { .. } => Some(
        "Check the userName/password entries in ~/.jenkins-ci.org. An absent file means an anonymous login attempt."
          .to_string(),
      ),
      SyncError::Credentials { path, .. } => Some(format!(
        "Expected a Java-style properties file with userName= and password= lines at {}",
        path.display()
      )),
      SyncError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for SyncError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SyncError::Auth { message } => write!(f, "Authentication rejected: {}", message),
      SyncError::Transport { message } => write!(f, "Transport error: {}", message),
      SyncError::Tracker { message } => write!(f, "Tracker error: {}", message),
      SyncError::Repo { message } => write!(f, "Release repository error: {}", message),
      SyncError::Credentials { path, message } => {
        write!(f, "Credentials file {} unusable: {}", path.display(), message)
      }
      SyncError::Io(e) => write!(f, "I/O error: {}", e),
      SyncError::Message { message, .. } => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for SyncError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SyncError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for SyncError {
  fn from(err: io::Error) -> Self {
    SyncError::Io(err)
  }
}

impl From<String> for SyncError {
  fn from(msg: String) -> Self {
    SyncError::message(msg)
  }
}

impl From<&str> for SyncError {
  fn from(msg: &str) -> Self {
    SyncError::message(msg)
  }
}

impl From<reqwest::Error> for SyncError {
  fn from(err: reqwest::Error) -> Self {
    SyncError::transport(err.to_string())
  }
}

impl From<serde_json::Error> for SyncError {
  fn from(err: serde_json::Error) -> Self {
    SyncError::message(format!("JSON error: {}", err))
  }
}

/// Result type alias for jira-version-sync
pub type SyncResult<T> = Result<T, SyncError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> SyncResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> SyncResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<SyncError>,
{
  fn context(self, ctx: impl Into<String>) -> SyncResult<T> {
    self.map_err(|e| {
      let err = e.into();
      let ctx = ctx.into();
      match err {
        SyncError::Message { message, help } => SyncError::Message {
          message: format!("{}\n{}", ctx, message),
          help,
        },
        other => SyncError::Message {
          message: format!("{}\n{}", ctx, other),
          help: other.help_message(),
        },
      }
    })
  }

  fn with_context<F>(self, f: F) -> SyncResult<T>
  where
    F: FnOnce() -> String,
  {
    self.context(f())
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SyncError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
