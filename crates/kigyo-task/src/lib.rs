//! Task descriptor for the company-research agent.
//!
//! Bundles the versioned operating policy, the `CompanyProfile` JSON Schema
//! and the capability grant into the configuration handed to an external
//! agent runtime. Nothing here performs research or touches the network.

pub mod capability;
pub mod descriptor;
pub mod error;
pub mod policy;

pub use capability::{Capabilities, ReasoningEffort};
pub use descriptor::{TaskDescriptor, TaskRequest};
pub use error::{Error, Result};
pub use policy::{Clause, Enforcement, POLICY_VERSION};
