//! Jenkins-style version numbers
//!
//! Jenkins core and plugin versions are dot/dash separated token lists
//! (`1.410`, `2.303.1`, `4.10.2-beta-1`) that do not fit semver, so ordering
//! compares numeric tokens numerically and everything else textually. This
//! only needs to produce a stable ascending order for reproducible runs, not
//! a full Maven-compatible comparison.

use std::cmp::Ordering;

/// A version string with component-wise ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumber {
  raw: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
  Number(u64),
  Text(&'a str),
}

impl VersionNumber {
  pub fn new(raw: impl Into<String>) -> Self {
    Self { raw: raw.into() }
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }

  /// Alpha/beta/rc/snapshot releases are "experimental" and excluded by
  /// `--no-experimental`
  pub fn is_pre_release(&self) -> bool {
    self
      .tokens()
      .iter()
      .any(|t| matches!(t, Token::Text(s) if is_pre_release_token(s)))
  }

  fn tokens(&self) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for part in self.raw.split(['.', '-', '_']) {
      if part.is_empty() {
        continue;
      }
      // Split runs like "beta2" into a text and a number token
      let mut rest = part;
      while !rest.is_empty() {
        let digit = rest.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false);
        let split = rest
          .find(|c: char| c.is_ascii_digit() != digit)
          .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(split);
        if digit {
          tokens.push(head.parse::<u64>().map(Token::Number).unwrap_or(Token::Text(head)));
        } else {
          tokens.push(Token::Text(head));
        }
        rest = tail;
      }
    }
    tokens
  }
}

fn is_pre_release_token(token: &str) -> bool {
  matches!(
    token.to_ascii_lowercase().as_str(),
    "alpha" | "beta" | "rc" | "snapshot" | "preview" | "milestone"
  )
}

impl Ord for VersionNumber {
  fn cmp(&self, other: &Self) -> Ordering {
    let a = self.tokens();
    let b = other.tokens();

    for pair in a.iter().zip(b.iter()) {
      let ord = match pair {
        (Token::Number(x), Token::Number(y)) => x.cmp(y),
        (Token::Text(x), Token::Text(y)) => x.cmp(y),
        // A numeric token sorts after a qualifier at the same position
        // (1.0.1 > 1.0-beta)
        (Token::Number(_), Token::Text(_)) => Ordering::Greater,
        (Token::Text(_), Token::Number(_)) => Ordering::Less,
      };
      if ord != Ordering::Equal {
        return ord;
      }
    }

    // 1.0 < 1.0.1, but 1.0 > 1.0-beta
    match a.len().cmp(&b.len()) {
      Ordering::Equal => Ordering::Equal,
      Ordering::Less => match b[a.len()] {
        Token::Text(_) => Ordering::Greater,
        Token::Number(_) => Ordering::Less,
      },
      Ordering::Greater => match a[b.len()] {
        Token::Text(_) => Ordering::Less,
        Token::Number(_) => Ordering::Greater,
      },
    }
  }
}

impl PartialOrd for VersionNumber {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
