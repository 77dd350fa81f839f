//! Validation of untyped company-profile documents.
//!
//! Walks a `serde_json::Value` against the field table in
//! [`kigyo_core::fields`], collects every violation in one pass, and decodes a
//! conforming document into a typed [`CompanyProfile`] with defaults applied.
//! Pure and synchronous; no state is shared between calls.
//!
//! # Quick start
//!
//! ```no_run
//! use kigyo_validate::validate;
//! use serde_json::json;
//!
//! let doc = json!({ "basic": { "company_name": "トヨタ自動車株式会社" } });
//! let report = validate(&doc).unwrap();
//! assert!(report.profile.basic.executives.is_empty());
//! ```

pub mod consistency;
pub mod error;
pub mod path;
pub mod violation;
mod walk;

pub use consistency::{Warning, WarningKind};
pub use error::{Error, Result, ValidationError};
use kigyo_core::{CompanyProfile, fields::COMPANY_PROFILE};
pub use path::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
pub use violation::{Rule, Violation, ViolationKind};

// ─── Public types ────────────────────────────────────────────────────────────

/// What to do with a document that breaks some rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
  /// Reject the whole document on any violation.
  #[default]
  Strict,
  /// Null out invalid optional fields, drop invalid list elements, and
  /// reject only when the company's basic facts cannot be salvaged.
  Lenient,
}

/// A successfully validated profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
  pub profile:  CompanyProfile,
  /// Advisory findings; never cause rejection.
  pub warnings: Vec<Warning>,
  /// Violations that were salvaged under [`Policy::Lenient`]. Always empty
  /// under [`Policy::Strict`].
  pub dropped:  Vec<Violation>,
}

impl Report {
  /// No violations were salvaged and no warnings raised.
  pub fn is_clean(&self) -> bool {
    self.warnings.is_empty() && self.dropped.is_empty()
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Validate `doc` under [`Policy::Strict`].
pub fn validate(doc: &Value) -> Result<Report> { validate_with(doc, Policy::Strict) }

/// Validate `doc` under `policy`.
///
/// On failure the error carries every violation found anywhere in the tree.
pub fn validate_with(doc: &Value, policy: Policy) -> Result<Report> {
  let mut walk = walk::Walk::default();
  let salvaged = walk.check_record(&COMPANY_PROFILE, doc, &FieldPath::root());
  let violations = walk.violations;

  let salvaged = match (salvaged, policy) {
    (Some(v), Policy::Lenient) => v,
    (Some(v), Policy::Strict) if violations.is_empty() => v,
    _ => {
      tracing::debug!(violations = violations.len(), "profile document rejected");
      return Err(ValidationError { violations }.into());
    }
  };

  let profile: CompanyProfile =
    serde_json::from_value(salvaged).map_err(Error::Decode)?;
  let warnings = consistency::check(&profile);
  tracing::debug!(
    warnings = warnings.len(),
    dropped = violations.len(),
    "profile document accepted"
  );

  Ok(Report {
    profile,
    warnings,
    dropped: violations,
  })
}

/// Parse `input` as JSON and validate it under `policy`.
pub fn validate_str(input: &str, policy: Policy) -> Result<Report> {
  let doc: Value = serde_json::from_str(input).map_err(Error::Json)?;
  validate_with(&doc, policy)
}

#[cfg(test)]
mod tests;
