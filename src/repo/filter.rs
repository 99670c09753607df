//! Pre-release exclusion
//!
//! `--no-experimental` restricts the release source to final releases before
//! reconciliation begins. This is a source filter, not reconciler logic: the
//! reconciler never sees the excluded candidates.

use crate::core::error::SyncResult;
use crate::repo::version::VersionNumber;
use crate::repo::{CoreRelease, PluginHistory, ReleaseSource};

/// Wraps a release source and drops alpha/beta/rc/snapshot releases
pub struct NoExperimental<S> {
  inner: S,
}

impl<S: ReleaseSource> NoExperimental<S> {
  pub fn new(inner: S) -> Self {
    Self { inner }
  }
}

impl<S: ReleaseSource> ReleaseSource for NoExperimental<S> {
  fn core_releases(&self) -> SyncResult<Vec<CoreRelease>> {
    let releases = self.inner.core_releases()?;
    Ok(
      releases
        .into_iter()
        .filter(|r| !VersionNumber::new(&r.version).is_pre_release())
        .collect(),
    )
  }

  fn plugins(&self) -> SyncResult<Vec<String>> {
    self.inner.plugins()
  }

  fn plugin_history(&self, artifact_id: &str) -> SyncResult<PluginHistory> {
    let mut history = self.inner.plugin_history(artifact_id)?;
    history.releases.retain(|r| !VersionNumber::new(&r.version).is_pre_release());
    Ok(history)
  }
}
