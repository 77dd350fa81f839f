//! Declarative field table for the profile tree.
//!
//! Each [`Record`] lists its fields with their wire name, value kind,
//! presence class and a short description. The validator walks untyped
//! documents against these tables and the JSON Schema renderer emits them, so
//! the constraints in this file are the single statement of the contract. The
//! typed structs in [`crate::profile`] mirror the same shape for decoding.

use crate::enums::{
  AccountingStandard, Market, OrgEventType, PeriodType, Platform, Prefecture,
  RelationType,
};

// ─── Table types ─────────────────────────────────────────────────────────────

/// Whether a field may be absent, and what absence means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
  /// Must be present and non-null.
  Required,
  /// Absent or null both mean "unknown".
  Optional,
  /// Absent takes the default (empty list, empty record); null is rejected.
  Defaulted,
}

/// Semantic string formats checked beyond the JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  /// Absolute `http://` or `https://` URL.
  Url,
  /// `YYYY-MM-DD` calendar date.
  Date,
  /// Thirteen ASCII digits.
  CorporateNumber,
}

impl Format {
  pub fn describe(&self) -> &'static str {
    match self {
      Format::Url => "an http:// or https:// URL",
      Format::Date => "a YYYY-MM-DD date",
      Format::CorporateNumber => "a 13-digit corporate number",
    }
  }
}

/// The value kind of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
  Text,
  Formatted(Format),
  Bool,
  /// JSON integer within inclusive bounds.
  Integer { min: Option<i64>, max: Option<i64> },
  /// Any JSON number within inclusive bounds.
  Number { min: Option<f64>, max: Option<f64> },
  /// String restricted to a closed set of labels.
  Choice {
    enumeration: &'static str,
    labels:      &'static [&'static str],
  },
  Record(&'static Record),
  List(&'static FieldKind),
}

impl FieldKind {
  /// Short name of the expected JSON shape, for diagnostics.
  pub fn expected(&self) -> &'static str {
    match self {
      FieldKind::Text | FieldKind::Formatted(_) | FieldKind::Choice { .. } => {
        "string"
      }
      FieldKind::Bool => "boolean",
      FieldKind::Integer { .. } => "integer",
      FieldKind::Number { .. } => "number",
      FieldKind::Record(_) => "object",
      FieldKind::List(_) => "array",
    }
  }
}

#[derive(Debug)]
pub struct Field {
  pub name:        &'static str,
  pub kind:        FieldKind,
  pub presence:    Presence,
  pub description: &'static str,
}

/// A named record: an object with a fixed set of fields.
#[derive(Debug)]
pub struct Record {
  pub name:   &'static str,
  pub fields: &'static [Field],
}

impl Record {
  pub fn field(&self, name: &str) -> Option<&'static Field> {
    self.fields.iter().find(|f| f.name == name)
  }
}

// ─── Table helpers ───────────────────────────────────────────────────────────

const fn required(
  name: &'static str,
  kind: FieldKind,
  description: &'static str,
) -> Field {
  Field { name, kind, presence: Presence::Required, description }
}

const fn optional(
  name: &'static str,
  kind: FieldKind,
  description: &'static str,
) -> Field {
  Field { name, kind, presence: Presence::Optional, description }
}

const fn defaulted(
  name: &'static str,
  kind: FieldKind,
  description: &'static str,
) -> Field {
  Field { name, kind, presence: Presence::Defaulted, description }
}

const TEXT: FieldKind = FieldKind::Text;
const BOOL: FieldKind = FieldKind::Bool;
const URL: FieldKind = FieldKind::Formatted(Format::Url);
const DATE: FieldKind = FieldKind::Formatted(Format::Date);
const CORPORATE_NUMBER: FieldKind =
  FieldKind::Formatted(Format::CorporateNumber);

const YEN: FieldKind = FieldKind::Number { min: Some(0.0), max: None };
const FRACTION: FieldKind = FieldKind::Number { min: Some(0.0), max: Some(1.0) };
const SIGNED_FRACTION: FieldKind =
  FieldKind::Number { min: Some(-1.0), max: Some(1.0) };
const COUNT: FieldKind = FieldKind::Integer { min: Some(0), max: None };
const TICKER: FieldKind = FieldKind::Integer { min: Some(1000), max: Some(9999) };
const FOUNDED_YEAR: FieldKind =
  FieldKind::Integer { min: Some(1600), max: Some(2100) };

const MARKET: FieldKind = FieldKind::Choice {
  enumeration: Market::NAME,
  labels:      Market::VARIANTS,
};
const PREFECTURE: FieldKind = FieldKind::Choice {
  enumeration: Prefecture::NAME,
  labels:      Prefecture::VARIANTS,
};

static TEXT_ITEM: FieldKind = FieldKind::Text;
static URL_ITEM: FieldKind = FieldKind::Formatted(Format::Url);

// ─── Root ────────────────────────────────────────────────────────────────────

pub static COMPANY_PROFILE: Record = Record {
  name:   "CompanyProfile",
  fields: &[
    required(
      "basic",
      FieldKind::Record(&COMPANY_BASIC),
      "Static corporate facts.",
    ),
    defaulted(
      "financials",
      FieldKind::Record(&FINANCIALS),
      "Financial records, all amounts in yen.",
    ),
    defaulted(
      "org_signals",
      FieldKind::List(&ORG_SIGNAL_ITEM),
      "HR and organisational announcements.",
    ),
    defaulted(
      "communications",
      FieldKind::Record(&COMMUNICATIONS),
      "Owned media and official social accounts.",
    ),
    defaulted(
      "competitors",
      FieldKind::List(&COMPETITOR_ITEM),
      "Main competitors.",
    ),
    defaulted(
      "group_companies",
      FieldKind::List(&GROUP_COMPANY_ITEM),
      "Subsidiaries, affiliates and joint ventures, listed or not, with \
       ownership, listing details, a short business summary and a source URL.",
    ),
    optional("source_url", URL, "Reference URL for the profile as a whole."),
    optional("last_verified_at", DATE, "Date the profile was last verified."),
    optional(
      "confidence",
      FRACTION,
      "Overall confidence in the profile, from 0 to 1.",
    ),
  ],
};

// ─── Corporate facts ─────────────────────────────────────────────────────────

pub static COMPANY_BASIC: Record = Record {
  name:   "CompanyBasic",
  fields: &[
    required(
      "company_name",
      TEXT,
      "Registered trade name only, with no annotations.",
    ),
    optional(
      "ticker_code",
      TICKER,
      "Four-digit securities code; null when not listed.",
    ),
    optional("market", MARKET, "TSE market segment."),
    optional("corporate_number", CORPORATE_NUMBER, "13-digit corporate number."),
    optional(
      "headquarters_pref",
      PREFECTURE,
      "Prefecture of the head office, or Other outside Japan.",
    ),
    optional("founded_year", FOUNDED_YEAR, "Year of establishment."),
    optional("capital_yen", COUNT, "Paid-in capital in yen."),
    optional(
      "employees_consolidated",
      COUNT,
      "Consolidated number of employees.",
    ),
    defaulted(
      "executives",
      FieldKind::List(&EXECUTIVE_ITEM),
      "Key officers.",
    ),
    optional(
      "accounting_standard",
      FieldKind::Choice {
        enumeration: AccountingStandard::NAME,
        labels:      AccountingStandard::VARIANTS,
      },
      "Accounting standard applied.",
    ),
    optional(
      "fiscal_year_start_month",
      FieldKind::Integer { min: Some(1), max: Some(12) },
      "First month of the fiscal year (4 = April).",
    ),
    optional("source_url", URL, "Source URL for the corporate overview."),
  ],
};

static EXECUTIVE_ITEM: FieldKind = FieldKind::Record(&EXECUTIVE);

pub static EXECUTIVE: Record = Record {
  name:   "Executive",
  fields: &[
    required("name", TEXT, "Full name."),
    required("title", TEXT, "Title, e.g. 代表取締役社長 or 取締役CIO."),
    optional(
      "career_summary",
      TEXT,
      "Career history: education, previous employers and roles.",
    ),
    optional(
      "responsibility",
      TEXT,
      "Areas of responsibility, e.g. corporate planning, IT strategy, R&D.",
    ),
    optional("start_date", DATE, "Date of appointment."),
    optional("end_date", DATE, "Date of departure."),
    optional("source_url", URL, "Source URL for this officer."),
  ],
};

// ─── Financials ──────────────────────────────────────────────────────────────

pub static FINANCIALS: Record = Record {
  name:   "Financials",
  fields: &[
    defaulted(
      "records",
      FieldKind::List(&FINANCIAL_RECORD_ITEM),
      "Financial records for roughly the last three years.",
    ),
    optional("source_url", URL, "Reference URL for the financials overall."),
    optional("last_verified_at", DATE, "Date last verified."),
  ],
};

static FINANCIAL_RECORD_ITEM: FieldKind = FieldKind::Record(&FINANCIAL_RECORD);

pub static FINANCIAL_RECORD: Record = Record {
  name:   "FinancialRecord",
  fields: &[
    required(
      "period",
      FieldKind::Record(&FISCAL_PERIOD),
      "Fiscal year and quarter.",
    ),
    optional("is_consolidated", BOOL, "Consolidated figures (usually true)."),
    optional(
      "is_cumulative",
      BOOL,
      "Year-to-date cumulative rather than single-period figures.",
    ),
    optional("restated", BOOL, "Figures were reclassified or restated."),
    optional("revenue_yen", YEN, "Revenue in yen."),
    optional("op_income_yen", YEN, "Operating income in yen."),
    optional("ordinary_income_yen", YEN, "Ordinary income in yen."),
    optional("ebitda_yen", YEN, "EBITDA in yen."),
    optional("net_income_yen", YEN, "Net income in yen."),
    optional("eps_yen", YEN, "Earnings per share in yen."),
    optional("total_assets_yen", YEN, "Total assets in yen."),
    optional("net_assets_yen", YEN, "Net assets in yen."),
    optional("equity_ratio", FRACTION, "Equity ratio from 0 to 1."),
    optional(
      "interest_bearing_debt_yen",
      YEN,
      "Interest-bearing debt in yen.",
    ),
    optional(
      "roe",
      SIGNED_FRACTION,
      "Return on equity from -1 to 1; convert percentages.",
    ),
    optional(
      "roa",
      SIGNED_FRACTION,
      "Return on assets from -1 to 1; convert percentages.",
    ),
    defaulted(
      "segment_revenue_ratio",
      FieldKind::List(&SEGMENT_RATIO_ITEM),
      "Revenue share per segment, each from 0 to 1.",
    ),
    defaulted(
      "segment_revenue_yen",
      FieldKind::List(&SEGMENT_AMOUNT_ITEM),
      "Revenue per segment in yen.",
    ),
    optional(
      "notes",
      TEXT,
      "Remarks such as an IFRS transition or one-off factors.",
    ),
    optional("source_url", URL, "Source URL for this record."),
  ],
};

pub static FISCAL_PERIOD: Record = Record {
  name:   "FiscalPeriod",
  fields: &[
    required(
      "period_type",
      FieldKind::Choice {
        enumeration: PeriodType::NAME,
        labels:      PeriodType::VARIANTS,
      },
      "Kind of period.",
    ),
    required(
      "fiscal_year",
      FieldKind::Integer { min: Some(1900), max: Some(2100) },
      "Fiscal year, e.g. 2025. For a March year-end FY2025 runs \
       2024-04-01 to 2025-03-31.",
    ),
    optional(
      "quarter",
      FieldKind::Integer { min: Some(1), max: Some(4) },
      "Quarter 1-4; null for annual periods.",
    ),
    optional("period_start", DATE, "First day of the period."),
    optional("period_end", DATE, "Last day of the period."),
  ],
};

static SEGMENT_RATIO_ITEM: FieldKind = FieldKind::Record(&SEGMENT_RATIO);

pub static SEGMENT_RATIO: Record = Record {
  name:   "SegmentRatio",
  fields: &[
    required("name", TEXT, "Segment name."),
    required("ratio", FRACTION, "Share of revenue from 0 to 1."),
  ],
};

static SEGMENT_AMOUNT_ITEM: FieldKind = FieldKind::Record(&SEGMENT_AMOUNT);

pub static SEGMENT_AMOUNT: Record = Record {
  name:   "SegmentAmount",
  fields: &[
    required("name", TEXT, "Segment name."),
    required("amount_yen", YEN, "Segment revenue in yen."),
  ],
};

// ─── Organisation ────────────────────────────────────────────────────────────

static ORG_SIGNAL_ITEM: FieldKind = FieldKind::Record(&ORG_SIGNAL);

pub static ORG_SIGNAL: Record = Record {
  name:   "OrgSignal",
  fields: &[
    optional(
      "event_type",
      FieldKind::Choice {
        enumeration: OrgEventType::NAME,
        labels:      OrgEventType::VARIANTS,
      },
      "Kind of event.",
    ),
    required("title", TEXT, "Summary of the event."),
    optional("announced_date", DATE, "Announcement date."),
    optional("source_url", URL, "Source URL."),
  ],
};

// ─── Communications ──────────────────────────────────────────────────────────

pub static COMMUNICATIONS: Record = Record {
  name:   "Communications",
  fields: &[
    defaulted(
      "owned_media_urls",
      FieldKind::List(&URL_ITEM),
      "Main corporate, IR and other owned URLs.",
    ),
    defaulted(
      "social_accounts",
      FieldKind::List(&SOCIAL_ACCOUNT_ITEM),
      "Official social media accounts.",
    ),
    optional("source_url", URL, "Source URL for communications data."),
    optional("last_verified_at", DATE, "Date last verified."),
  ],
};

static SOCIAL_ACCOUNT_ITEM: FieldKind = FieldKind::Record(&SOCIAL_ACCOUNT);

pub static SOCIAL_ACCOUNT: Record = Record {
  name:   "SocialAccount",
  fields: &[
    required(
      "platform",
      FieldKind::Choice {
        enumeration: Platform::NAME,
        labels:      Platform::VARIANTS,
      },
      "Social network.",
    ),
    required("url", URL, "Account URL."),
    optional("handle", TEXT, "@handle."),
    optional("followers", COUNT, "Follower count."),
    optional("last_post_date", DATE, "Date of the latest post."),
    optional("active", BOOL, "Whether the account is currently operated."),
    optional("source_url", URL, "Source URL."),
  ],
};

// ─── Competitors & group ─────────────────────────────────────────────────────

static COMPETITOR_ITEM: FieldKind = FieldKind::Record(&COMPETITOR);

pub static COMPETITOR: Record = Record {
  name:   "Competitor",
  fields: &[
    required("name", TEXT, "Competitor name."),
    defaulted(
      "areas",
      FieldKind::List(&TEXT_ITEM),
      "Competing areas, e.g. EC, payments, advertising.",
    ),
    optional("notes", TEXT, "Notes on where the companies compete."),
    optional("source_url", URL, "Source URL."),
  ],
};

static GROUP_COMPANY_ITEM: FieldKind = FieldKind::Record(&GROUP_COMPANY);

pub static GROUP_COMPANY: Record = Record {
  name:   "GroupCompany",
  fields: &[
    required("name", TEXT, "Registered name of the group company."),
    optional(
      "relation_type",
      FieldKind::Choice {
        enumeration: RelationType::NAME,
        labels:      RelationType::VARIANTS,
      },
      "Relation to the profiled company.",
    ),
    optional("ownership_ratio", FRACTION, "Shareholding from 0 to 1."),
    optional(
      "is_listed",
      BOOL,
      "true if listed, false if not, null if unknown.",
    ),
    optional(
      "ticker_code",
      TICKER,
      "Four-digit securities code; null unless listed.",
    ),
    optional("market", MARKET, "TSE market segment."),
    optional("corporate_number", CORPORATE_NUMBER, "13-digit corporate number."),
    optional("headquarters_pref", PREFECTURE, "Prefecture of the head office."),
    optional("founded_year", FOUNDED_YEAR, "Year of establishment."),
    optional("capital_yen", COUNT, "Paid-in capital in yen."),
    optional("employees", COUNT, "Non-consolidated number of employees."),
    optional("business_summary", TEXT, "Summary of the business."),
    optional(
      "notes",
      TEXT,
      "Remarks such as shareholder structure, key customers or integration status.",
    ),
    optional(
      "source_url",
      URL,
      "Source URL: company site, brochure or registry.",
    ),
  ],
};

/// Every record reachable from [`COMPANY_PROFILE`], root first.
pub static ALL_RECORDS: &[&Record] = &[
  &COMPANY_PROFILE,
  &COMPANY_BASIC,
  &EXECUTIVE,
  &FINANCIALS,
  &FINANCIAL_RECORD,
  &FISCAL_PERIOD,
  &SEGMENT_RATIO,
  &SEGMENT_AMOUNT,
  &ORG_SIGNAL,
  &COMMUNICATIONS,
  &SOCIAL_ACCOUNT,
  &COMPETITOR,
  &GROUP_COMPANY,
];
