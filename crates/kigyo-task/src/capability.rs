//! Capabilities granted to the research agent.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
  Low,
  #[default]
  Medium,
  High,
}

impl ReasoningEffort {
  pub fn as_str(&self) -> &'static str {
    match self {
      ReasoningEffort::Low => "low",
      ReasoningEffort::Medium => "medium",
      ReasoningEffort::High => "high",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
  pub web_search:       bool,
  pub reasoning_effort: ReasoningEffort,
}

impl Default for Capabilities {
  fn default() -> Self {
    Self {
      web_search:       true,
      reasoning_effort: ReasoningEffort::default(),
    }
  }
}

/// A tool declaration in the request envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
  #[serde(rename = "type")]
  pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reasoning {
  pub effort: ReasoningEffort,
}

impl Capabilities {
  pub fn tools(&self) -> Vec<Tool> {
    let mut tools = Vec::new();
    if self.web_search {
      tools.push(Tool { kind: "web_search" });
    }
    tools
  }

  pub fn reasoning(&self) -> Reasoning {
    Reasoning {
      effort: self.reasoning_effort,
    }
  }
}
