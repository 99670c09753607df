//! CLI commands for jira-version-sync
//!
//! - **sync**: the one-shot batch synchronization run

pub mod sync;

pub use sync::{run_sync, SyncParams};
