//! Error types for `kigyo-task`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("company name is empty")]
  EmptyCompanyName,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
