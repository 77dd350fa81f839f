//! Error types for `kigyo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{value:?} is not a valid {enumeration}")]
  UnknownVariant {
    enumeration: &'static str,
    value:       String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
