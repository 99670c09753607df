//! Update-centre release reader
//!
//! Reads two documents from an update-centre mirror:
//! - `release-history.json`: every core and plugin release ever published,
//!   day-bucketed, each with a `gav` (group:artifact:version) and an
//!   epoch-millisecond timestamp
//! - `update-center.actual.json`: only its `deprecations` map is used, to
//!   flag plugins the directory has retired
//!
//! Both documents are fetched and parsed once at construction; the trait
//! methods read memory afterwards.

use crate::core::error::{SyncError, SyncResult};
use crate::repo::version::VersionNumber;
use crate::repo::{CoreRelease, PluginHistory, PluginRelease, ReleaseSource};
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

const RELEASE_HISTORY_PATH: &str = "/release-history.json";
const UPDATE_CENTER_PATH: &str = "/update-center.actual.json";

/// Maven coordinates of the core distribution. `hudson-war` covers the
/// pre-rename releases that still live in the history.
const CORE_ARTIFACTS: [&str; 2] = ["jenkins-war", "hudson-war"];
const CORE_GROUP: &str = "org.jenkins-ci.main";

#[derive(Deserialize)]
struct ReleaseHistoryDoc {
  #[serde(rename = "releaseHistory")]
  release_history: Vec<DayBucket>,
}

#[derive(Deserialize)]
struct DayBucket {
  #[serde(default)]
  releases: Vec<RawRelease>,
}

/// One published artifact; rows without coordinates (wiki edits and the
/// like) are skipped.
#[derive(Deserialize)]
struct RawRelease {
  gav: Option<String>,
  version: Option<String>,
  timestamp: Option<i64>,
}

#[derive(Deserialize)]
struct UpdateCenterDoc {
  #[serde(default)]
  deprecations: BTreeMap<String, serde_json::Value>,
}

/// In-memory view of the update centre's release history
pub struct HttpReleaseSource {
  core: Vec<CoreRelease>,
  // BTreeMap keeps plugin iteration deterministic
  plugins: BTreeMap<String, Vec<PluginRelease>>,
  deprecated: HashSet<String>,
}

impl HttpReleaseSource {
  /// Fetch and index both update-centre documents
  pub fn fetch(base_url: &str) -> SyncResult<Self> {
    let base = base_url.trim_end_matches('/');
    let http = reqwest::blocking::Client::builder()
      .user_agent(concat!("jira-version-sync/", env!("CARGO_PKG_VERSION")))
      .build()?;

    let history: ReleaseHistoryDoc = http
      .get(format!("{}{}", base, RELEASE_HISTORY_PATH))
      .send()?
      .error_for_status()
      .map_err(|e| SyncError::repo(format!("fetching release history: {}", e)))?
      .json()
      .map_err(|e| SyncError::repo(format!("parsing release history: {}", e)))?;

    let update_center: UpdateCenterDoc = http
      .get(format!("{}{}", base, UPDATE_CENTER_PATH))
      .send()?
      .error_for_status()
      .map_err(|e| SyncError::repo(format!("fetching update centre: {}", e)))?
      .json()
      .map_err(|e| SyncError::repo(format!("parsing update centre: {}", e)))?;

    Self::index(history, update_center.deprecations.into_keys().collect())
  }

  /// Build the indexed view from a parsed history document
  fn index(history: ReleaseHistoryDoc, deprecated: HashSet<String>) -> SyncResult<Self> {
    let mut core = Vec::new();
    let mut plugins: BTreeMap<String, Vec<PluginRelease>> = BTreeMap::new();

    for bucket in history.release_history {
      for release in bucket.releases {
        let (Some(gav), Some(version), Some(millis)) = (release.gav, release.version, release.timestamp) else {
          continue;
        };

        let mut parts = gav.split(':');
        let (Some(group), Some(artifact)) = (parts.next(), parts.next()) else {
          return Err(SyncError::repo(format!("malformed gav '{}'", gav)));
        };

        let Some(timestamp) = Utc.timestamp_millis_opt(millis).single() else {
          return Err(SyncError::repo(format!(
            "release {}:{} has unusable timestamp {}",
            artifact, version, millis
          )));
        };

        if group == CORE_GROUP && CORE_ARTIFACTS.contains(&artifact) {
          core.push(CoreRelease { version, timestamp });
        } else {
          plugins.entry(artifact.to_string()).or_default().push(PluginRelease {
            artifact_id: artifact.to_string(),
            version,
            timestamp,
          });
        }
      }
    }

    core.sort_by(|a, b| VersionNumber::new(&a.version).cmp(&VersionNumber::new(&b.version)));
    for releases in plugins.values_mut() {
      releases.sort_by(|a, b| VersionNumber::new(&a.version).cmp(&VersionNumber::new(&b.version)));
    }

    Ok(Self {
      core,
      plugins,
      deprecated,
    })
  }
}

impl ReleaseSource for HttpReleaseSource {
  fn core_releases(&self) -> SyncResult<Vec<CoreRelease>> {
    Ok(self.core.clone())
  }

  fn plugins(&self) -> SyncResult<Vec<String>> {
    Ok(self.plugins.keys().cloned().collect())
  }

  fn plugin_history(&self, artifact_id: &str) -> SyncResult<PluginHistory> {
    let releases = self
      .plugins
      .get(artifact_id)
      .ok_or_else(|| SyncError::repo(format!("no release history for plugin '{}'", artifact_id)))?
      .clone();

    Ok(PluginHistory {
      deprecated: self.deprecated.contains(artifact_id),
      releases,
    })
  }
}
