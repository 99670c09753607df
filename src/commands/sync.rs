//! The sync run: wire the release source, the tracker client, the ledger,
//! the reconciler and the resilient writer together and execute one batch.

use std::path::PathBuf;

use crate::core::credentials::Credentials;
use crate::core::error::SyncResult;
use crate::core::ledger::KnownNames;
use crate::core::reconcile::{reconcile_core, reconcile_plugins};
use crate::core::retry::RetryPolicy;
use crate::core::session::SessionManager;
use crate::core::writer::ResilientWriter;
use crate::jira::rest::JiraRestClient;
use crate::jira::TrackerClient;
use crate::repo::filter::NoExperimental;
use crate::repo::http::HttpReleaseSource;
use crate::repo::ReleaseSource;

/// Sync command parameters
pub struct SyncParams {
  pub jira_base_url: String,
  pub update_center_url: String,
  pub project_key: String,
  pub no_experimental: bool,
  pub credentials_file: Option<PathBuf>,
}

/// Run the sync command
pub fn run_sync(params: SyncParams) -> SyncResult<()> {
  println!("📦 Reading release history from {}", params.update_center_url);
  let source = HttpReleaseSource::fetch(&params.update_center_url)?;

  let tracker = JiraRestClient::new(&params.jira_base_url)?;

  if params.no_experimental {
    println!("   Excluding alpha/beta releases");
    run_against(&NoExperimental::new(source), &tracker, &params)
  } else {
    run_against(&source, &tracker, &params)
  }
}

/// The batch itself, over the injected collaborators. Integration tests
/// call this with in-memory fakes.
pub fn run_against(source: &dyn ReleaseSource, tracker: &dyn TrackerClient, params: &SyncParams) -> SyncResult<()> {
  let credentials_path = match &params.credentials_file {
    Some(path) => path.clone(),
    None => Credentials::default_path()?,
  };
  let credentials = Credentials::load(&credentials_path)?;
  let session = SessionManager::new(credentials);

  println!("🔐 Logging in to {}", params.jira_base_url);
  let token = session.login(tracker)?;

  let existing = tracker.versions(&token, &params.project_key)?;
  println!(
    "   Project {} currently has {} versions",
    params.project_key,
    existing.len()
  );
  let mut known = KnownNames::seed(existing);

  let mut writer = ResilientWriter::new(tracker, &session, &params.project_key, RetryPolicy::forever(), token);

  // Core before plugins, against the one shared ledger
  reconcile_core(source, &mut known, &mut writer)?;
  reconcile_plugins(source, &mut known, &mut writer)?;

  println!("✅ Sync complete");
  Ok(())
}
