//! JIRA credentials from the `~/.jenkins-ci.org` properties file
//!
//! The file is a Java-style properties file with `userName` and `password`
//! keys. An absent file is not an error: the tool then attempts an anonymous
//! login, which some tracker setups accept.

use crate::core::error::{SyncError, SyncResult};
use std::path::{Path, PathBuf};

/// JIRA login credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl Credentials {
  /// Load credentials from a properties file; absent file yields empty
  /// credentials.
  pub fn load(path: &Path) -> SyncResult<Self> {
    if !path.is_file() {
      return Ok(Self::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| SyncError::Credentials {
      path: path.to_path_buf(),
      message: e.to_string(),
    })?;

    Ok(Self::parse(&contents))
  }

  /// Default credentials file location: `<home>/.jenkins-ci.org`
  pub fn default_path() -> SyncResult<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
      SyncError::with_help(
        "Cannot locate the home directory (HOME is unset)",
        "Pass --credentials-file to point at the properties file explicitly.",
      )
    })?;
    Ok(PathBuf::from(home).join(".jenkins-ci.org"))
  }

  /// Parse Java properties syntax: `key=value` lines, `#`/`!` comments,
  /// whitespace around the key ignored. Unknown keys are ignored.
  fn parse(contents: &str) -> Self {
    let mut creds = Self::default();

    for line in contents.lines() {
      let line = line.trim_start();
      if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        continue;
      }
      let Some((key, value)) = line.split_once('=') else {
        continue;
      };
      match key.trim() {
        "userName" => creds.username = value.trim().to_string(),
        "password" => creds.password = value.trim().to_string(),
        _ => {}
      }
    }

    creds
  }
}
