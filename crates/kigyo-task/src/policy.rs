//! Operating policy for the research agent, as versioned clauses.
//!
//! Each clause is one instruction. Clauses are grouped into sections for
//! rendering and tagged with how far compliance can be checked once the agent
//! returns a document: some are enforced by the validator, some only raise
//! consistency warnings, and some cannot be verified from the output at all.

use serde::Serialize;

/// Bumped whenever a clause is added, removed or reworded.
pub const POLICY_VERSION: &str = "2025-01";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
  Role,
  Disambiguation,
  Sources,
  OutputRules,
  Input,
  Output,
}

impl Section {
  pub const ORDER: &'static [Section] = &[
    Section::Role,
    Section::Disambiguation,
    Section::Sources,
    Section::OutputRules,
    Section::Input,
    Section::Output,
  ];

  /// Heading used when rendering; the role section has none.
  pub fn heading(&self) -> Option<&'static str> {
    match self {
      Section::Role => None,
      Section::Disambiguation => Some("Disambiguation"),
      Section::Sources => Some("Sources to consult"),
      Section::OutputRules => Some("Output rules"),
      Section::Input => Some("Input"),
      Section::Output => Some("Output"),
    }
  }
}

/// How compliance with a clause can be established from the returned
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
  /// A violation is a hard validation failure.
  Validated,
  /// A violation surfaces as a consistency warning.
  Advisory,
  /// Nothing in the document can show whether the agent complied.
  Unverifiable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clause {
  pub id:          &'static str,
  pub section:     Section,
  pub enforcement: Enforcement,
  pub text:        &'static str,
}

const fn clause(
  id: &'static str,
  section: Section,
  enforcement: Enforcement,
  text: &'static str,
) -> Clause {
  Clause { id, section, enforcement, text }
}

use Enforcement::{Advisory, Unverifiable, Validated};

pub static CLAUSES: &[Clause] = &[
  clause(
    "role.researcher",
    Section::Role,
    Unverifiable,
    "You are an assistant that researches publicly available information on \
     Japanese companies. For the company name you are given, investigate \
     public sources with the web search tool and return structured JSON that \
     follows the CompanyProfile schema.",
  ),
  // ── Disambiguation ─────────────────────────────────────────────────────
  clause(
    "disambiguation.prominent",
    Section::Disambiguation,
    Unverifiable,
    "If the name matches more than one company, research the best known, \
     most representative Japanese company. For example, 「パナソニック」 \
     means the electronics group パナソニックホールディングス株式会社.",
  ),
  clause(
    "disambiguation.specific",
    Section::Disambiguation,
    Unverifiable,
    "If the name already identifies a single company, such as \
     「パナソニック インダストリー株式会社」, research exactly that company.",
  ),
  // ── Sources ────────────────────────────────────────────────────────────
  clause(
    "sources.corporate_site",
    Section::Sources,
    Unverifiable,
    "The official corporate website.",
  ),
  clause(
    "sources.ir",
    Section::Sources,
    Unverifiable,
    "Investor relations pages: 決算短信, 有価証券報告書 and integrated \
     reports.",
  ),
  clause(
    "sources.disclosures",
    Section::Sources,
    Unverifiable,
    "Disclosures on TDnet and EDINET.",
  ),
  clause(
    "sources.press",
    Section::Sources,
    Unverifiable,
    "Press releases.",
  ),
  clause(
    "sources.social",
    Section::Sources,
    Unverifiable,
    "Official social media accounts (X, LinkedIn, YouTube, Instagram and \
     others).",
  ),
  // ── Output rules ───────────────────────────────────────────────────────
  clause(
    "output.yen",
    Section::OutputRules,
    Unverifiable,
    "Store every monetary amount in yen. Figures published in 百万円 or 億円 \
     must be converted to 円 before they are stored.",
  ),
  clause(
    "output.ratios",
    Section::OutputRules,
    Validated,
    "Store every proportion as a fraction between 0 and 1, so 38.2% becomes \
     0.382. ROE and ROA may be negative and must lie between -1 and 1.",
  ),
  clause(
    "output.enumerations",
    Section::OutputRules,
    Validated,
    "Use only the values the schema lists for enumerated fields. Use null \
     when none of them applies.",
  ),
  clause(
    "output.company_name",
    Section::OutputRules,
    Advisory,
    "company_name is the registered trade name only, with no annotations or \
     bracketed remarks.",
  ),
  clause(
    "output.fiscal_period",
    Section::OutputRules,
    Advisory,
    "Fill in fiscal year, quarter, start date and end date of every \
     FiscalPeriod as far as possible. quarter is null for annual periods.",
  ),
  clause(
    "output.fiscal_split",
    Section::OutputRules,
    Unverifiable,
    "When annual and quarterly figures can both be obtained, record each as \
     its own record.",
  ),
  clause(
    "output.coverage",
    Section::OutputRules,
    Unverifiable,
    "Include annual results for the three most recent fiscal years and the \
     latest quarterly results.",
  ),
  clause(
    "output.source_url",
    Section::OutputRules,
    Validated,
    "Fill source_url wherever possible with the page that supports the data \
     (IR PDF, corporate page, press release, official social account). Every \
     URL must be absolute and start with http:// or https://.",
  ),
  clause(
    "output.null_over_guess",
    Section::OutputRules,
    Unverifiable,
    "Use null or an empty list for anything you cannot confirm. Guessing or \
     inventing values is forbidden.",
  ),
  clause(
    "output.executives",
    Section::OutputRules,
    Validated,
    "For every executive include at least name and title, and add the dates \
     of appointment and departure when they are known.",
  ),
  clause(
    "output.official_social",
    Section::OutputRules,
    Unverifiable,
    "List official social media accounts only.",
  ),
  // ── Input / output ─────────────────────────────────────────────────────
  clause(
    "io.input",
    Section::Input,
    Unverifiable,
    "A company name, for example 「トヨタ自動車株式会社」.",
  ),
  clause(
    "io.output",
    Section::Output,
    Validated,
    "Structured JSON conforming to the CompanyProfile model.",
  ),
];

/// Render `clauses` as a sectioned plain-text prompt.
pub fn render(clauses: &[Clause]) -> String {
  let mut out = String::new();
  for section in Section::ORDER {
    let texts: Vec<&str> = clauses
      .iter()
      .filter(|c| c.section == *section)
      .map(|c| c.text)
      .collect();
    if texts.is_empty() {
      continue;
    }
    if !out.is_empty() {
      out.push('\n');
    }
    match section.heading() {
      Some(heading) => {
        out.push_str("### ");
        out.push_str(heading);
        out.push('\n');
        for text in texts {
          out.push_str("- ");
          out.push_str(text);
          out.push('\n');
        }
      }
      None => {
        for text in texts {
          out.push_str(text);
          out.push('\n');
        }
      }
    }
  }
  out
}
