//! Release repository reader
//!
//! - **version**: numeric component ordering and pre-release detection
//! - **http**: update-centre reader (release-history.json + deprecations)
//! - **filter**: pre-release exclusion wrapper
//!
//! The [`ReleaseSource`] trait is the seam between the sync core and the
//! artifact repository; production wires in [`http::HttpReleaseSource`],
//! tests wire in in-memory fakes.

pub mod filter;
pub mod http;
pub mod version;

use crate::core::error::SyncResult;
use chrono::{DateTime, Utc};

/// One core (jenkins.war) release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreRelease {
  pub version: String,
  pub timestamp: DateTime<Utc>,
}

/// One release of one plugin artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRelease {
  /// Maven artifact id, e.g. `git-plugin`
  pub artifact_id: String,
  pub version: String,
  pub timestamp: DateTime<Utc>,
}

/// Everything known about one plugin's release history
#[derive(Debug, Clone, Default)]
pub struct PluginHistory {
  /// Flagged deprecated in the plugin directory; deprecated plugins are
  /// skipped wholesale.
  pub deprecated: bool,
  /// Ascending version order
  pub releases: Vec<PluginRelease>,
}

/// What the sync core needs from the artifact repository
pub trait ReleaseSource {
  /// All core releases, ascending by version. Failure here aborts the run:
  /// core release data is expected to always be well-formed.
  fn core_releases(&self) -> SyncResult<Vec<CoreRelease>>;

  /// Artifact ids of all known plugins, in stable sorted order
  fn plugins(&self) -> SyncResult<Vec<String>>;

  /// One plugin's history. A failure here is a per-plugin condition: the
  /// caller logs it and moves on to the next plugin.
  fn plugin_history(&self, artifact_id: &str) -> SyncResult<PluginHistory>;
}
