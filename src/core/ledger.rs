//! The running ledger of version names already present in the tracker
//!
//! Seeded once from the tracker's current version list, then grown in memory
//! as entries are emitted. Never re-queried from the tracker mid-run: the
//! ledger is the single source of "already exists or already created this
//! run".

use std::collections::HashSet;

/// Append-only set of canonical version names
#[derive(Debug, Default)]
pub struct KnownNames {
  names: HashSet<String>,
}

impl KnownNames {
  /// Seed the ledger from the tracker's current version list
  pub fn seed(names: impl IntoIterator<Item = String>) -> Self {
    Self {
      names: names.into_iter().collect(),
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(name)
  }

  /// Record a name; returns true if the name was new.
  ///
  /// Callers emit a create for a candidate only when this returns true, so a
  /// canonical name can never be submitted twice within one run.
  pub fn admit(&mut self, name: &str) -> bool {
    self.names.insert(name.to_string())
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }
}
