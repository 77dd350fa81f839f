//! Hard violations found while walking a document.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::path::FieldPath;

/// The four classes of hard violation.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
  /// Missing required field, unknown field, wrong JSON type, or null where
  /// null is not allowed.
  Structural,
  /// Numeric value outside its inclusive bounds.
  Range,
  /// String outside its closed enumeration.
  Enum,
  /// String failing a semantic pattern such as URL or date.
  Format,
}

/// The specific rule a value broke.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
  MissingField,
  UnknownField,
  NullNotAllowed,
  WrongType {
    expected: &'static str,
  },
  OutOfRange {
    min: Option<f64>,
    max: Option<f64>,
  },
  NotInEnum {
    enumeration: &'static str,
    allowed:     &'static [&'static str],
  },
  BadFormat {
    expected: &'static str,
  },
}

impl Rule {
  pub fn kind(&self) -> ViolationKind {
    match self {
      Rule::MissingField
      | Rule::UnknownField
      | Rule::NullNotAllowed
      | Rule::WrongType { .. } => ViolationKind::Structural,
      Rule::OutOfRange { .. } => ViolationKind::Range,
      Rule::NotInEnum { .. } => ViolationKind::Enum,
      Rule::BadFormat { .. } => ViolationKind::Format,
    }
  }
}

impl fmt::Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Rule::MissingField => f.write_str("required field is missing"),
      Rule::UnknownField => f.write_str("field is not part of the schema"),
      Rule::NullNotAllowed => f.write_str("null is not allowed"),
      Rule::WrongType { expected } => write!(f, "expected {expected}"),
      Rule::OutOfRange { min, max } => match (min, max) {
        (Some(min), Some(max)) => write!(f, "must be within [{min}, {max}]"),
        (Some(min), None) => write!(f, "must be at least {min}"),
        (None, Some(max)) => write!(f, "must be at most {max}"),
        (None, None) => f.write_str("out of range"),
      },
      Rule::NotInEnum { enumeration, allowed } => {
        write!(f, "not a {enumeration} (allowed: {})", allowed.join(", "))
      }
      Rule::BadFormat { expected } => write!(f, "expected {expected}"),
    }
  }
}

/// One hard violation: where, what rule, and the value received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
  pub path:     FieldPath,
  pub kind:     ViolationKind,
  #[serde(flatten)]
  pub rule:     Rule,
  /// `None` when the field was absent.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub received: Option<Value>,
}

impl Violation {
  pub fn new(path: FieldPath, rule: Rule, received: Option<Value>) -> Self {
    Self {
      path,
      kind: rule.kind(),
      rule,
      received,
    }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.path, self.rule)?;
    if let Some(received) = &self.received {
      write!(f, " (received {received})")?;
    }
    Ok(())
  }
}
