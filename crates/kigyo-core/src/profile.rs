//! Profile records: the typed form of a validated company profile.
//!
//! A profile is a strict tree: every record is owned by exactly one parent and
//! nothing is shared. Values are produced once by the validator and never
//! mutated afterwards. Monetary amounts are yen; ratios are fractions.
//!
//! Optional scalars are `Option`; lists and container records are always
//! present and default to empty. Unknown keys are rejected on decode.

use serde::{Deserialize, Serialize};

use crate::enums::{
  AccountingStandard, Market, OrgEventType, PeriodType, Platform, Prefecture,
  RelationType,
};

fn default_true() -> Option<bool> { Some(true) }

fn default_false() -> Option<bool> { Some(false) }

// ─── Root ────────────────────────────────────────────────────────────────────

/// The root document describing one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyProfile {
  pub basic:            CompanyBasic,
  #[serde(default)]
  pub financials:       Financials,
  #[serde(default)]
  pub org_signals:      Vec<OrgSignal>,
  #[serde(default)]
  pub communications:   Communications,
  #[serde(default)]
  pub competitors:      Vec<Competitor>,
  #[serde(default)]
  pub group_companies:  Vec<GroupCompany>,
  #[serde(default)]
  pub source_url:       Option<String>,
  /// `YYYY-MM-DD`.
  #[serde(default)]
  pub last_verified_at: Option<String>,
  /// Overall confidence in the profile, 0–1.
  #[serde(default)]
  pub confidence:       Option<f64>,
}

impl CompanyProfile {
  /// A profile carrying only a company name, every other field at its
  /// default.
  pub fn named(company_name: impl Into<String>) -> Self {
    Self {
      basic:            CompanyBasic::named(company_name),
      financials:       Financials::default(),
      org_signals:      Vec::new(),
      communications:   Communications::default(),
      competitors:      Vec::new(),
      group_companies:  Vec::new(),
      source_url:       None,
      last_verified_at: None,
      confidence:       None,
    }
  }
}

// ─── Corporate facts ─────────────────────────────────────────────────────────

/// Static corporate facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyBasic {
  /// Registered trade name, without annotations.
  pub company_name:            String,
  /// Four-digit securities code, 1000–9999.
  #[serde(default)]
  pub ticker_code:             Option<u16>,
  #[serde(default)]
  pub market:                  Option<Market>,
  /// 13-digit corporate number.
  #[serde(default)]
  pub corporate_number:        Option<String>,
  #[serde(default)]
  pub headquarters_pref:       Option<Prefecture>,
  #[serde(default)]
  pub founded_year:            Option<u16>,
  #[serde(default)]
  pub capital_yen:             Option<u64>,
  #[serde(default)]
  pub employees_consolidated:  Option<u64>,
  #[serde(default)]
  pub executives:              Vec<Executive>,
  #[serde(default)]
  pub accounting_standard:     Option<AccountingStandard>,
  /// First month of the fiscal year, 1–12.
  #[serde(default)]
  pub fiscal_year_start_month: Option<u8>,
  #[serde(default)]
  pub source_url:              Option<String>,
}

impl CompanyBasic {
  pub fn named(company_name: impl Into<String>) -> Self {
    Self {
      company_name:            company_name.into(),
      ticker_code:             None,
      market:                  None,
      corporate_number:        None,
      headquarters_pref:       None,
      founded_year:            None,
      capital_yen:             None,
      employees_consolidated:  None,
      executives:              Vec::new(),
      accounting_standard:     None,
      fiscal_year_start_month: None,
      source_url:              None,
    }
  }

  /// A company with neither a ticker code nor a market is treated as
  /// non-listed.
  pub fn is_listed(&self) -> bool {
    match self.market {
      Some(Market::NonListed) => false,
      Some(_) => true,
      None => self.ticker_code.is_some(),
    }
  }
}

/// One officer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Executive {
  pub name:           String,
  /// e.g. 代表取締役社長.
  pub title:          String,
  #[serde(default)]
  pub career_summary: Option<String>,
  #[serde(default)]
  pub responsibility: Option<String>,
  #[serde(default)]
  pub start_date:     Option<String>,
  #[serde(default)]
  pub end_date:       Option<String>,
  #[serde(default)]
  pub source_url:     Option<String>,
}

// ─── Financials ──────────────────────────────────────────────────────────────

/// One reporting window.
///
/// `fiscal_year` names the year in which the period ends for March
/// year-ends: FY2025 usually runs 2024-04-01 to 2025-03-31.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiscalPeriod {
  pub period_type:  PeriodType,
  pub fiscal_year:  u16,
  /// 1–4; `None` for annual periods.
  #[serde(default)]
  pub quarter:      Option<u8>,
  #[serde(default)]
  pub period_start: Option<String>,
  #[serde(default)]
  pub period_end:   Option<String>,
}

/// One business segment's share of revenue, as a fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentRatio {
  pub name:  String,
  pub ratio: f64,
}

/// One business segment's revenue in yen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentAmount {
  pub name:       String,
  pub amount_yen: f64,
}

/// Financial facts for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinancialRecord {
  pub period:                    FiscalPeriod,
  #[serde(default = "default_true")]
  pub is_consolidated:           Option<bool>,
  /// Year-to-date rather than single-period figures.
  #[serde(default = "default_true")]
  pub is_cumulative:             Option<bool>,
  #[serde(default = "default_false")]
  pub restated:                  Option<bool>,

  // ── Income statement ─────────────────────────────────────────────────────
  #[serde(default)]
  pub revenue_yen:               Option<f64>,
  #[serde(default)]
  pub op_income_yen:             Option<f64>,
  #[serde(default)]
  pub ordinary_income_yen:       Option<f64>,
  #[serde(default)]
  pub ebitda_yen:                Option<f64>,
  #[serde(default)]
  pub net_income_yen:            Option<f64>,
  #[serde(default)]
  pub eps_yen:                   Option<f64>,

  // ── Balance sheet ────────────────────────────────────────────────────────
  #[serde(default)]
  pub total_assets_yen:          Option<f64>,
  #[serde(default)]
  pub net_assets_yen:            Option<f64>,
  #[serde(default)]
  pub equity_ratio:              Option<f64>,
  #[serde(default)]
  pub interest_bearing_debt_yen: Option<f64>,
  #[serde(default)]
  pub roe:                       Option<f64>,
  #[serde(default)]
  pub roa:                       Option<f64>,

  // ── Segments ─────────────────────────────────────────────────────────────
  #[serde(default)]
  pub segment_revenue_ratio:     Vec<SegmentRatio>,
  #[serde(default)]
  pub segment_revenue_yen:       Vec<SegmentAmount>,

  #[serde(default)]
  pub notes:                     Option<String>,
  #[serde(default)]
  pub source_url:                Option<String>,
}

/// Container for all reported periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Financials {
  #[serde(default)]
  pub records:          Vec<FinancialRecord>,
  #[serde(default)]
  pub source_url:       Option<String>,
  #[serde(default)]
  pub last_verified_at: Option<String>,
}

// ─── Organisation ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrgSignal {
  #[serde(default)]
  pub event_type:     Option<OrgEventType>,
  pub title:          String,
  #[serde(default)]
  pub announced_date: Option<String>,
  #[serde(default)]
  pub source_url:     Option<String>,
}

// ─── Communications ──────────────────────────────────────────────────────────

/// An official social-media account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialAccount {
  pub platform:       Platform,
  pub url:            String,
  #[serde(default)]
  pub handle:         Option<String>,
  #[serde(default)]
  pub followers:      Option<u64>,
  #[serde(default)]
  pub last_post_date: Option<String>,
  /// Whether the account has posted recently.
  #[serde(default)]
  pub active:         Option<bool>,
  #[serde(default)]
  pub source_url:     Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Communications {
  /// Corporate site, IR pages and similar owned channels.
  #[serde(default)]
  pub owned_media_urls: Vec<String>,
  #[serde(default)]
  pub social_accounts:  Vec<SocialAccount>,
  #[serde(default)]
  pub source_url:       Option<String>,
  #[serde(default)]
  pub last_verified_at: Option<String>,
}

// ─── Competitors & group ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Competitor {
  pub name:       String,
  /// Competing areas, e.g. EC, payments, advertising.
  #[serde(default)]
  pub areas:      Vec<String>,
  #[serde(default)]
  pub notes:      Option<String>,
  #[serde(default)]
  pub source_url: Option<String>,
}

/// A subsidiary, affiliate or joint venture, listed or not.
///
/// `ticker_code` and `market` are only meaningful when `is_listed` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupCompany {
  pub name:              String,
  #[serde(default)]
  pub relation_type:     Option<RelationType>,
  /// Share held by the profiled company, 0–1.
  #[serde(default)]
  pub ownership_ratio:   Option<f64>,
  #[serde(default)]
  pub is_listed:         Option<bool>,
  #[serde(default)]
  pub ticker_code:       Option<u16>,
  #[serde(default)]
  pub market:            Option<Market>,
  #[serde(default)]
  pub corporate_number:  Option<String>,
  #[serde(default)]
  pub headquarters_pref: Option<Prefecture>,
  #[serde(default)]
  pub founded_year:      Option<u16>,
  #[serde(default)]
  pub capital_yen:       Option<u64>,
  /// Non-consolidated headcount.
  #[serde(default)]
  pub employees:         Option<u64>,
  #[serde(default)]
  pub business_summary:  Option<String>,
  #[serde(default)]
  pub notes:             Option<String>,
  #[serde(default)]
  pub source_url:        Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn minimal_profile_decodes_with_defaults() {
    let profile: CompanyProfile =
      serde_json::from_value(json!({ "basic": { "company_name": "トヨタ自動車株式会社" } }))
        .unwrap();
    assert_eq!(profile, CompanyProfile::named("トヨタ自動車株式会社"));
    assert!(profile.basic.executives.is_empty());
    assert!(profile.financials.records.is_empty());
  }

  #[test]
  fn record_flags_default_when_absent_but_keep_explicit_null() {
    let record: FinancialRecord = serde_json::from_value(json!({
      "period": { "period_type": "annual", "fiscal_year": 2024 },
      "restated": null,
    }))
    .unwrap();
    assert_eq!(record.is_consolidated, Some(true));
    assert_eq!(record.is_cumulative, Some(true));
    assert_eq!(record.restated, None);
  }

  #[test]
  fn listing_inferred_from_market_and_ticker() {
    let mut basic = CompanyBasic::named("Example");
    assert!(!basic.is_listed());
    basic.ticker_code = Some(7203);
    assert!(basic.is_listed());
    basic.market = Some(Market::NonListed);
    assert!(!basic.is_listed());
  }
}
