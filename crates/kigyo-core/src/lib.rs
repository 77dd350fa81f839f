//! Core types for the Kigyo company-profile contract.
//!
//! This crate holds the typed profile records, the closed enumerations that
//! bound them, and the declarative field table that the validator and the
//! JSON Schema renderer both read. It performs no I/O and has no network or
//! inference dependencies.

pub mod enums;
pub mod error;
pub mod fields;
pub mod json_schema;
pub mod profile;

pub use error::{Error, Result};
pub use profile::CompanyProfile;
