//! Re-authentication retry policy
//!
//! The default mirrors the original tool: retry forever with no backoff,
//! on the assumption that session expiry mid-batch is transient and
//! self-correcting. Tests inject a bounded policy so a permanently failing
//! login cannot spin them.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
  /// `None` retries forever
  pub max_attempts: Option<u32>,
  /// Pause between attempts
  pub backoff: Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self::forever()
  }
}

impl RetryPolicy {
  /// Unbounded retries, no backoff
  pub fn forever() -> Self {
    Self {
      max_attempts: None,
      backoff: Duration::ZERO,
    }
  }

  /// At most `attempts` tries in total
  pub fn limited(attempts: u32) -> Self {
    Self {
      max_attempts: Some(attempts),
      backoff: Duration::ZERO,
    }
  }

  pub fn with_backoff(mut self, backoff: Duration) -> Self {
    self.backoff = backoff;
    self
  }

  /// Whether another attempt is allowed after `attempts` completed tries
  pub fn allows(&self, attempts: u32) -> bool {
    match self.max_attempts {
      None => true,
      Some(max) => attempts < max,
    }
  }

  /// Pause before the next attempt, if the policy has a backoff
  pub fn pause(&self) {
    if !self.backoff.is_zero() {
      std::thread::sleep(self.backoff);
    }
  }
}
