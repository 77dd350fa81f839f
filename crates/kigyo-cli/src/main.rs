//! `kigyo`: validate company-profile documents and assemble research
//! requests.
//!
//! # Usage
//!
//! ```
//! kigyo validate profile.json
//! kigyo --config kigyo.toml validate --policy lenient - < profile.json
//! kigyo schema
//! kigyo request トヨタ自動車株式会社
//! ```
//!
//! Reports and requests go to stdout as JSON; logs go to stderr.

mod settings;

use std::{
  io::{self, Read as _},
  path::PathBuf,
  process::ExitCode,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use kigyo_core::CompanyProfile;
use kigyo_task::{ReasoningEffort, TaskDescriptor};
use kigyo_validate::{Policy, Violation, Warning};
use serde::Serialize;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "kigyo", author, version, about = "Japanese company profile contract")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, global = true, default_value = "kigyo.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Validate a profile document and print a JSON report.
  Validate {
    /// Document to read; stdin when omitted or `-`.
    file: Option<PathBuf>,

    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Fail when any consistency warning is raised.
    #[arg(long)]
    warnings_as_errors: bool,
  },
  /// Print the JSON Schema of a profile document.
  Schema,
  /// Print the agent instructions.
  Instructions,
  /// Print the research request for a company.
  Request {
    company: String,

    /// Withhold the web search tool.
    #[arg(long)]
    no_web_search: bool,

    #[arg(long, value_enum)]
    reasoning_effort: Option<EffortArg>,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
  Strict,
  Lenient,
}

impl From<PolicyArg> for Policy {
  fn from(arg: PolicyArg) -> Self {
    match arg {
      PolicyArg::Strict => Policy::Strict,
      PolicyArg::Lenient => Policy::Lenient,
    }
  }
}

#[derive(Clone, Copy, ValueEnum)]
enum EffortArg {
  Low,
  Medium,
  High,
}

impl From<EffortArg> for ReasoningEffort {
  fn from(arg: EffortArg) -> Self {
    match arg {
      EffortArg::Low => ReasoningEffort::Low,
      EffortArg::Medium => ReasoningEffort::Medium,
      EffortArg::High => ReasoningEffort::High,
    }
  }
}

// ─── Validation report ────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ValidationReport {
  valid:      bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  profile:    Option<CompanyProfile>,
  /// Hard violations; under the lenient policy, those that were salvaged.
  violations: Vec<Violation>,
  warnings:   Vec<Warning>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let mut settings = Settings::load(&cli.config)?;

  match cli.command {
    Command::Validate {
      file,
      policy,
      warnings_as_errors,
    } => {
      if let Some(policy) = policy {
        settings.policy = policy.into();
      }
      settings.warnings_as_errors |= warnings_as_errors;
      validate(file, &settings)
    }
    Command::Schema => {
      print_json(TaskDescriptor::standard().schema())?;
      Ok(ExitCode::SUCCESS)
    }
    Command::Instructions => {
      print!("{}", TaskDescriptor::standard().instructions());
      Ok(ExitCode::SUCCESS)
    }
    Command::Request {
      company,
      no_web_search,
      reasoning_effort,
    } => {
      if no_web_search {
        settings.web_search = false;
      }
      if let Some(effort) = reasoning_effort {
        settings.reasoning_effort = effort.into();
      }
      let descriptor =
        TaskDescriptor::standard().with_capabilities(settings.capabilities());
      let request = descriptor
        .request(&company)
        .context("failed to assemble request")?;
      print_json(&request)?;
      Ok(ExitCode::SUCCESS)
    }
  }
}

fn validate(file: Option<PathBuf>, settings: &Settings) -> anyhow::Result<ExitCode> {
  let input = match file.filter(|p| p.as_os_str() != "-") {
    Some(path) => std::fs::read_to_string(&path)
      .with_context(|| format!("reading {}", path.display()))?,
    None => {
      let mut buf = String::new();
      io::stdin()
        .read_to_string(&mut buf)
        .context("reading stdin")?;
      buf
    }
  };

  let report = match kigyo_validate::validate_str(&input, settings.policy) {
    Ok(report) => {
      for warning in &report.warnings {
        tracing::warn!(path = %warning.path, kind = ?warning.kind, "{}", warning.message);
      }
      for dropped in &report.dropped {
        tracing::warn!(%dropped, "invalid value dropped");
      }
      ValidationReport {
        valid:      !(settings.warnings_as_errors && !report.warnings.is_empty()),
        profile:    Some(report.profile),
        violations: report.dropped,
        warnings:   report.warnings,
      }
    }
    Err(kigyo_validate::Error::Invalid(err)) => {
      tracing::info!(violations = err.violations.len(), "document rejected");
      ValidationReport {
        valid:      false,
        profile:    None,
        violations: err.violations,
        warnings:   Vec::new(),
      }
    }
    Err(err) => return Err(err).context("failed to validate document"),
  };

  print_json(&report)?;
  Ok(if report.valid {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
  let text = serde_json::to_string_pretty(value).context("serialising output")?;
  println!("{text}");
  Ok(())
}
