//! Constraint walk over an untyped document.
//!
//! Pipeline:
//!   &Value
//!     └─ check_record()       → per-field presence and unknown keys
//!          └─ check_value()   → type, bounds, enumeration, format
//!               └─ salvaged copy of the document + every violation
//!
//! The walk never stops at the first failure. Alongside the violation list it
//! builds a salvaged copy of the document in which invalid optional fields are
//! null, invalid defaulted fields are omitted, invalid list elements are
//! dropped and unknown keys are removed. A record whose required field is
//! invalid cannot be salvaged and fails its parent in turn.

use chrono::NaiveDate;
use kigyo_core::fields::{Field, FieldKind, Format, Presence, Record};
use serde_json::{Map, Value};

use crate::{
  path::FieldPath,
  violation::{Rule, Violation},
};

#[derive(Default)]
pub(crate) struct Walk {
  pub(crate) violations: Vec<Violation>,
}

impl Walk {
  fn reject(&mut self, path: &FieldPath, rule: Rule, received: Option<&Value>) {
    self
      .violations
      .push(Violation::new(path.clone(), rule, received.cloned()));
  }

  /// Check an object against `record`. Returns the salvaged object, or `None`
  /// if the record cannot stand.
  pub(crate) fn check_record(
    &mut self,
    record: &Record,
    value: &Value,
    path: &FieldPath,
  ) -> Option<Value> {
    let Value::Object(obj) = value else {
      self.reject(path, Rule::WrongType { expected: "object" }, Some(value));
      return None;
    };

    for (key, received) in obj {
      if record.field(key).is_none() {
        self.reject(&path.key(key.as_str()), Rule::UnknownField, Some(received));
      }
    }

    let mut salvaged = Map::new();
    let mut intact = true;
    for field in record.fields {
      let field_path = path.key(field.name);
      match self.check_field(field, obj.get(field.name), &field_path) {
        FieldOutcome::Keep(v) => {
          salvaged.insert(field.name.to_string(), v);
        }
        FieldOutcome::Omit => {}
        FieldOutcome::Fatal => intact = false,
      }
    }

    intact.then_some(Value::Object(salvaged))
  }

  fn check_field(
    &mut self,
    field: &Field,
    received: Option<&Value>,
    path: &FieldPath,
  ) -> FieldOutcome {
    match (received, field.presence) {
      (None, Presence::Required) => {
        self.reject(path, Rule::MissingField, None);
        FieldOutcome::Fatal
      }
      (None, _) => FieldOutcome::Omit,
      (Some(Value::Null), Presence::Optional) => FieldOutcome::Keep(Value::Null),
      (Some(Value::Null), presence) => {
        self.reject(path, Rule::NullNotAllowed, Some(&Value::Null));
        FieldOutcome::fallback(presence)
      }
      (Some(value), presence) => match self.check_value(&field.kind, value, path) {
        Some(v) => FieldOutcome::Keep(v),
        None => FieldOutcome::fallback(presence),
      },
    }
  }

  /// Check a single non-null value against `kind`.
  fn check_value(
    &mut self,
    kind: &FieldKind,
    value: &Value,
    path: &FieldPath,
  ) -> Option<Value> {
    match kind {
      FieldKind::Text => match value {
        Value::String(_) => Some(value.clone()),
        _ => self.wrong_type(kind, value, path),
      },
      FieldKind::Formatted(format) => {
        let Value::String(s) = value else {
          return self.wrong_type(kind, value, path);
        };
        if conforms(*format, s) {
          Some(value.clone())
        } else {
          self.reject(
            path,
            Rule::BadFormat { expected: format.describe() },
            Some(value),
          );
          None
        }
      }
      FieldKind::Bool => match value {
        Value::Bool(_) => Some(value.clone()),
        _ => self.wrong_type(kind, value, path),
      },
      FieldKind::Integer { min, max } => {
        let Value::Number(n) = value else {
          return self.wrong_type(kind, value, path);
        };
        let in_range = if let Some(i) = n.as_i64() {
          min.is_none_or(|min| i >= min) && max.is_none_or(|max| i <= max)
        } else if n.is_u64() {
          // Beyond i64::MAX: only an open upper bound can admit it.
          max.is_none()
        } else {
          return self.wrong_type(kind, value, path);
        };
        if in_range {
          Some(value.clone())
        } else {
          self.reject(
            path,
            Rule::OutOfRange {
              min: min.map(|m| m as f64),
              max: max.map(|m| m as f64),
            },
            Some(value),
          );
          None
        }
      }
      FieldKind::Number { min, max } => {
        let Some(x) = value.as_f64() else {
          return self.wrong_type(kind, value, path);
        };
        if min.is_none_or(|min| x >= min) && max.is_none_or(|max| x <= max) {
          Some(value.clone())
        } else {
          self.reject(
            path,
            Rule::OutOfRange { min: *min, max: *max },
            Some(value),
          );
          None
        }
      }
      FieldKind::Choice { enumeration, labels } => {
        let Value::String(s) = value else {
          return self.wrong_type(kind, value, path);
        };
        if labels.contains(&s.as_str()) {
          Some(value.clone())
        } else {
          self.reject(
            path,
            Rule::NotInEnum {
              enumeration: *enumeration,
              allowed:     *labels,
            },
            Some(value),
          );
          None
        }
      }
      FieldKind::Record(record) => self.check_record(record, value, path),
      FieldKind::List(item) => {
        let Value::Array(items) = value else {
          return self.wrong_type(kind, value, path);
        };
        let kept = items
          .iter()
          .enumerate()
          .filter_map(|(i, elem)| self.check_element(item, elem, &path.index(i)))
          .collect();
        Some(Value::Array(kept))
      }
    }
  }

  fn check_element(
    &mut self,
    kind: &FieldKind,
    value: &Value,
    path: &FieldPath,
  ) -> Option<Value> {
    if value.is_null() {
      self.reject(path, Rule::NullNotAllowed, Some(value));
      return None;
    }
    self.check_value(kind, value, path)
  }

  fn wrong_type(
    &mut self,
    kind: &FieldKind,
    value: &Value,
    path: &FieldPath,
  ) -> Option<Value> {
    self.reject(path, Rule::WrongType { expected: kind.expected() }, Some(value));
    None
  }
}

enum FieldOutcome {
  Keep(Value),
  /// Leave the key out so decoding applies the field's default.
  Omit,
  /// A required field failed; the enclosing record is invalid.
  Fatal,
}

impl FieldOutcome {
  /// What remains of a field whose value was rejected.
  fn fallback(presence: Presence) -> Self {
    match presence {
      Presence::Required => FieldOutcome::Fatal,
      Presence::Optional => FieldOutcome::Keep(Value::Null),
      Presence::Defaulted => FieldOutcome::Omit,
    }
  }
}

// ─── Formats ─────────────────────────────────────────────────────────────────

fn conforms(format: Format, s: &str) -> bool {
  match format {
    Format::Url => is_web_url(s),
    Format::Date => is_iso_date(s),
    Format::CorporateNumber => {
      s.len() == 13 && s.bytes().all(|b| b.is_ascii_digit())
    }
  }
}

/// An absolute `http://` or `https://` URL with a host. The scheme is
/// matched case-sensitively, as the rendered schema pattern is.
pub(crate) fn is_web_url(s: &str) -> bool {
  if !(s.starts_with("http://") || s.starts_with("https://")) {
    return false;
  }
  match url::Url::parse(s) {
    Ok(url) => url.host_str().is_some_and(|h| !h.is_empty()),
    Err(_) => false,
  }
}

/// A `YYYY-MM-DD` string naming a real calendar day.
pub(crate) fn is_iso_date(s: &str) -> bool {
  let bytes = s.as_bytes();
  let digits = |r: std::ops::Range<usize>| bytes[r].iter().all(u8::is_ascii_digit);
  bytes.len() == 10
    && bytes[4] == b'-'
    && bytes[7] == b'-'
    && digits(0..4)
    && digits(5..7)
    && digits(8..10)
    && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn web_urls() {
    assert!(is_web_url("https://global.toyota/jp/ir/"));
    assert!(is_web_url("http://example.co.jp/report.pdf"));
    assert!(!is_web_url("HTTPS://example.com"));
    assert!(!is_web_url("Http://example.com"));
    assert!(!is_web_url("ir.example.com/report.pdf"));
    assert!(!is_web_url("ftp://example.com/file"));
    assert!(!is_web_url("https://"));
    assert!(!is_web_url(" https://example.com"));
    assert!(!is_web_url(""));
  }

  #[test]
  fn iso_dates() {
    assert!(is_iso_date("2024-03-31"));
    assert!(is_iso_date("2024-02-29"));
    assert!(!is_iso_date("2023-02-29"));
    assert!(!is_iso_date("2024/03/31"));
    assert!(!is_iso_date("2024-3-31"));
    assert!(!is_iso_date("20240331"));
    assert!(!is_iso_date("2024-03-31T00:00:00Z"));
    assert!(!is_iso_date("+202-01-01"));
    assert!(!is_iso_date("-202-01-01"));
    assert!(!is_iso_date("2024-+3-01"));
  }

  #[test]
  fn corporate_numbers() {
    assert!(conforms(Format::CorporateNumber, "1180301018771"));
    assert!(!conforms(Format::CorporateNumber, "118030101877"));
    assert!(!conforms(Format::CorporateNumber, "118030101877X"));
  }
}
