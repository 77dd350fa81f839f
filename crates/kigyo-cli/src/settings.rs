//! Layered configuration: optional TOML file, then `KIGYO_*` environment
//! variables, then command-line flags.

use std::path::Path;

use anyhow::Context as _;
use kigyo_task::{Capabilities, ReasoningEffort};
use kigyo_validate::Policy;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub policy:             Policy,
  pub web_search:         bool,
  pub reasoning_effort:   ReasoningEffort,
  pub warnings_as_errors: bool,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      policy:             Policy::Strict,
      web_search:         true,
      reasoning_effort:   ReasoningEffort::Medium,
      warnings_as_errors: false,
    }
  }
}

impl Settings {
  /// Load from `path` (if it exists) layered under the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("KIGYO"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise settings")
  }

  pub fn capabilities(&self) -> Capabilities {
    Capabilities {
      web_search:       self.web_search,
      reasoning_effort: self.reasoning_effort,
    }
  }
}
