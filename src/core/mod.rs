//! Core engine for jira-version-sync
//!
//! - **credentials**: `~/.jenkins-ci.org` properties file
//! - **error**: categorized error types with exit codes
//! - **ledger**: the in-memory set of version names already in the tracker
//! - **reconcile**: create-or-skip decisions per candidate release
//! - **retry**: injectable re-authentication retry policy
//! - **session**: credentials → session token
//! - **writer**: create-version calls wrapped in the auth-retry loop

pub mod credentials;
pub mod error;
pub mod ledger;
pub mod reconcile;
pub mod retry;
pub mod session;
pub mod writer;
