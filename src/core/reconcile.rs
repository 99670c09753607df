//! Version reconciliation
//!
//! Compares the artifact repository's naming scheme against the tracker's
//! and decides, per candidate release, create-or-skip. Decisions are made
//! against the shared [`KnownNames`] ledger: a name is admitted to the
//! ledger at the moment its create is emitted, so a source that repeats a
//! version cannot produce a duplicate submission within one run.
//!
//! Core releases are reconciled before any plugin releases, against the same
//! ledger, so a hypothetical name collision resolves in core's favor.

use crate::core::error::SyncResult;
use crate::core::ledger::KnownNames;
use crate::jira::TrackerVersionEntry;
use crate::repo::ReleaseSource;

/// Where emitted entries go. Production wires in the resilient writer;
/// tests record.
pub trait VersionSink {
  fn create(&mut self, entry: &TrackerVersionEntry) -> SyncResult<()>;
}

/// Canonical tracker name for a core release: `jenkins-<version>`
pub fn canonical_core_name(version: &str) -> String {
  format!("jenkins-{}", version)
}

/// Canonical tracker name for a plugin release: the artifact id with one
/// trailing `-plugin` suffix stripped, then `-<version>`
pub fn canonical_plugin_name(artifact_id: &str, version: &str) -> String {
  let stem = artifact_id.strip_suffix("-plugin").unwrap_or(artifact_id);
  format!("{}-{}", stem, version)
}

/// Reconcile core releases. Any failure, from the source or the sink,
/// propagates and aborts the run: core release data is expected to always
/// be well-formed.
///
/// Returns the number of entries created.
pub fn reconcile_core(
  source: &dyn ReleaseSource,
  known: &mut KnownNames,
  sink: &mut dyn VersionSink,
) -> SyncResult<usize> {
  let mut created = 0;

  for release in source.core_releases()? {
    let name = canonical_core_name(&release.version);
    if !known.admit(&name) {
      continue;
    }

    sink.create(&TrackerVersionEntry::released(name, release.timestamp))?;
    created += 1;
  }

  Ok(created)
}

/// Reconcile plugin releases. Deprecated plugins are skipped wholesale; a
/// failure reading one plugin's history is printed and that plugin is
/// skipped, the run continues. A sink (write) failure still propagates and
/// aborts the run.
///
/// Returns the number of entries created.
pub fn reconcile_plugins(
  source: &dyn ReleaseSource,
  known: &mut KnownNames,
  sink: &mut dyn VersionSink,
) -> SyncResult<usize> {
  let mut created = 0;

  for artifact_id in source.plugins()? {
    println!("{}", artifact_id);

    let history = match source.plugin_history(&artifact_id) {
      Ok(history) => history,
      Err(e) => {
        println!("   ⚠️  Failed to read plugin history: {}", e);
        continue;
      }
    };

    if history.deprecated {
      println!("   Plugin is deprecated, skipping");
      continue;
    }

    for release in history.releases {
      let name = canonical_plugin_name(&release.artifact_id, &release.version);
      if !known.admit(&name) {
        continue;
      }

      sink.create(&TrackerVersionEntry::released(name, release.timestamp))?;
      created += 1;
    }
  }

  Ok(created)
}
