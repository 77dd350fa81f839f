//! The task descriptor handed to the research agent, and the per-company
//! request built from it.

use std::sync::LazyLock;

use serde::Serialize;
use serde_json::Value;

use crate::{
  capability::{Capabilities, Reasoning, Tool},
  error::{Error, Result},
  policy::{self, CLAUSES, Clause, POLICY_VERSION},
};

/// Name the output schema is registered under in the request envelope.
pub const SCHEMA_NAME: &str = "CompanyProfile";

static STANDARD: LazyLock<TaskDescriptor> =
  LazyLock::new(|| TaskDescriptor::new(Capabilities::default()));

/// Instructions, output schema and capability grant for one research task.
///
/// Immutable once built. The rendered instructions and schema are computed
/// once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescriptor {
  clauses:      &'static [Clause],
  instructions: String,
  schema:       Value,
  capabilities: Capabilities,
}

impl TaskDescriptor {
  /// The process-wide descriptor with the default capability grant.
  pub fn standard() -> &'static TaskDescriptor { &STANDARD }

  pub fn new(capabilities: Capabilities) -> Self {
    let descriptor = Self {
      clauses: CLAUSES,
      instructions: policy::render(CLAUSES),
      schema: kigyo_core::json_schema::company_profile(),
      capabilities,
    };
    tracing::debug!(
      policy_version = POLICY_VERSION,
      clauses = descriptor.clauses.len(),
      "task descriptor built"
    );
    descriptor
  }

  /// Copy of this descriptor with a different capability grant.
  pub fn with_capabilities(&self, capabilities: Capabilities) -> Self {
    Self {
      capabilities,
      ..self.clone()
    }
  }

  pub fn policy_version(&self) -> &'static str { POLICY_VERSION }

  pub fn clauses(&self) -> &'static [Clause] { self.clauses }

  pub fn instructions(&self) -> &str { &self.instructions }

  pub fn schema(&self) -> &Value { &self.schema }

  pub fn capabilities(&self) -> Capabilities { self.capabilities }

  /// Build the request for researching `company_name`.
  ///
  /// The name is passed through as given apart from surrounding whitespace.
  pub fn request(&self, company_name: &str) -> Result<TaskRequest> {
    let input = company_name.trim();
    if input.is_empty() {
      return Err(Error::EmptyCompanyName);
    }
    Ok(TaskRequest {
      policy_version:  POLICY_VERSION,
      instructions:    self.instructions.clone(),
      input:           input.to_owned(),
      response_format: ResponseFormat {
        kind:   "json_schema",
        name:   SCHEMA_NAME,
        strict: true,
        schema: self.schema.clone(),
      },
      tools:           self.capabilities.tools(),
      reasoning:       self.capabilities.reasoning(),
    })
  }
}

/// Everything an agent runtime needs to research one company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRequest {
  pub policy_version:  &'static str,
  pub instructions:    String,
  pub input:           String,
  pub response_format: ResponseFormat,
  pub tools:           Vec<Tool>,
  pub reasoning:       Reasoning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormat {
  #[serde(rename = "type")]
  pub kind:   &'static str,
  pub name:   &'static str,
  pub strict: bool,
  pub schema: Value,
}
