//! Sync Jenkins core and plugin releases into a JIRA project
//!
//! One-shot batch synchronizer: reads the update centre's release history,
//! compares each release's canonical version name against the versions the
//! JIRA project already has, and creates the missing entries. Create-only,
//! sequential, idempotent across runs.
//!
//! The library surface exists so the reconciler and the resilient writer
//! can be driven against in-memory collaborators in tests; the binary in
//! `main.rs` is a thin clap wrapper over [`commands::run_sync`].

pub mod commands;
pub mod core;
pub mod jira;
pub mod repo;
