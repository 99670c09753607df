//! Integration tests for jira-version-sync
//!
//! The sync run is exercised end-to-end against in-memory collaborators;
//! the CLI boundary is exercised by running the real binary.

mod helpers;
mod test_cli;
mod test_sync_run;
