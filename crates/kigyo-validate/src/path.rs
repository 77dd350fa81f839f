//! Field paths into a profile document, e.g. `financials.records[2].roe`.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  Key(String),
  Index(usize),
}

/// Location of a value inside a document, relative to the root object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
  segments: Vec<Segment>,
}

impl FieldPath {
  pub fn root() -> Self { Self::default() }

  pub fn is_root(&self) -> bool { self.segments.is_empty() }

  pub fn segments(&self) -> &[Segment] { &self.segments }

  /// A child path naming an object key.
  pub fn key(&self, key: impl Into<String>) -> Self {
    let mut segments = self.segments.clone();
    segments.push(Segment::Key(key.into()));
    Self { segments }
  }

  /// A child path naming a list element.
  pub fn index(&self, index: usize) -> Self {
    let mut segments = self.segments.clone();
    segments.push(Segment::Index(index));
    Self { segments }
  }

  /// Build a path from dotted keys, for tests and lookups.
  pub fn parse(s: &str) -> Self {
    let mut path = Self::root();
    for part in s.split('.').filter(|p| !p.is_empty()) {
      let (key, rest) = match part.find('[') {
        Some(pos) => (&part[..pos], &part[pos..]),
        None => (part, ""),
      };
      if !key.is_empty() {
        path = path.key(key);
      }
      for index in rest
        .split(['[', ']'])
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<usize>().ok())
      {
        path = path.index(index);
      }
    }
    path
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.segments.is_empty() {
      return f.write_str("<root>");
    }
    for (i, segment) in self.segments.iter().enumerate() {
      match segment {
        Segment::Key(key) if i == 0 => f.write_str(key)?,
        Segment::Key(key) => write!(f, ".{key}")?,
        Segment::Index(index) => write!(f, "[{index}]")?,
      }
    }
    Ok(())
  }
}

impl Serialize for FieldPath {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}
