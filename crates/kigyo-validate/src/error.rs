//! Error types for `kigyo-validate`.

use thiserror::Error;

use crate::violation::Violation;

/// A document that broke one or more hard rules.
///
/// Carries every violation found in the tree, not only the first.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("document has {} violation(s): {}", .violations.len(), summary(.violations))]
pub struct ValidationError {
  pub violations: Vec<Violation>,
}

impl ValidationError {
  /// Violations located at `path` (dotted display form).
  pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> {
    self
      .violations
      .iter()
      .filter(move |v| v.path.to_string() == path)
  }
}

fn summary(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid JSON: {0}")]
  Json(#[source] serde_json::Error),

  #[error(transparent)]
  Invalid(#[from] ValidationError),

  /// The document passed every rule but still failed typed decoding.
  #[error("validated document failed to decode: {0}")]
  Decode(#[source] serde_json::Error),
}

impl Error {
  /// The violation list, when this is a rule failure.
  pub fn violations(&self) -> Option<&[Violation]> {
    match self {
      Error::Invalid(e) => Some(&e.violations),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
