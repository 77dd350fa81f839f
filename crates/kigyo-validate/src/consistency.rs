//! Advisory consistency checks on a decoded profile.
//!
//! These expectations are not structural: a profile that trips them is still
//! valid. They are surfaced so that a caller can spot suspicious output from
//! the producer without rejecting it.

use std::{collections::HashSet, fmt};

use chrono::NaiveDate;
use kigyo_core::{
  enums::{Market, PeriodType},
  profile::{CompanyProfile, FinancialRecord, GroupCompany},
};
use serde::Serialize;

use crate::path::FieldPath;

/// Segment ratios may be rounded by the source; allow this much slack.
const RATIO_SUM_TOLERANCE: f64 = 0.01;

const ANNOTATION_MARKS: &[char] = &['(', '（', '[', '［', '【', '〔'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
  /// An annual period carries a quarter number.
  QuarterOnAnnual,
  /// A quarterly period has no quarter number.
  QuarterMissing,
  PeriodReversed,
  TenureReversed,
  /// Ticker or market present on a company marked as not listed.
  ListingMismatch,
  DuplicateSegment,
  AnnotatedName,
  SegmentRatioOverflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
  pub path:    FieldPath,
  pub kind:    WarningKind,
  pub message: String,
}

impl fmt::Display for Warning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.path, self.message)
  }
}

/// Run every consistency check over `profile`.
pub fn check(profile: &CompanyProfile) -> Vec<Warning> {
  let mut warnings = Vec::new();
  let basic = FieldPath::root().key("basic");

  if profile
    .basic
    .company_name
    .contains(ANNOTATION_MARKS)
  {
    warnings.push(Warning {
      path:    basic.key("company_name"),
      kind:    WarningKind::AnnotatedName,
      message: "company name carries a bracketed annotation".into(),
    });
  }

  if profile.basic.market == Some(Market::NonListed)
    && profile.basic.ticker_code.is_some()
  {
    warnings.push(Warning {
      path:    basic.key("ticker_code"),
      kind:    WarningKind::ListingMismatch,
      message: "ticker code present on a Non-listed company".into(),
    });
  }

  for (i, exec) in profile.basic.executives.iter().enumerate() {
    if reversed(exec.start_date.as_deref(), exec.end_date.as_deref()) {
      warnings.push(Warning {
        path:    basic.key("executives").index(i).key("end_date"),
        kind:    WarningKind::TenureReversed,
        message: "end_date is earlier than start_date".into(),
      });
    }
  }

  let records = FieldPath::root().key("financials").key("records");
  for (i, record) in profile.financials.records.iter().enumerate() {
    check_record(record, &records.index(i), &mut warnings);
  }

  let group = FieldPath::root().key("group_companies");
  for (i, company) in profile.group_companies.iter().enumerate() {
    check_group_company(company, &group.index(i), &mut warnings);
  }

  warnings
}

fn check_record(
  record: &FinancialRecord,
  path: &FieldPath,
  warnings: &mut Vec<Warning>,
) {
  let period = &record.period;
  let period_path = path.key("period");
  match (period.period_type, period.quarter) {
    (PeriodType::Annual, Some(q)) => warnings.push(Warning {
      path:    period_path.key("quarter"),
      kind:    WarningKind::QuarterOnAnnual,
      message: format!("annual period carries quarter {q}"),
    }),
    (PeriodType::Quarter, None) => warnings.push(Warning {
      path:    period_path.key("quarter"),
      kind:    WarningKind::QuarterMissing,
      message: "quarterly period does not say which quarter".into(),
    }),
    _ => {}
  }

  if reversed(period.period_start.as_deref(), period.period_end.as_deref()) {
    warnings.push(Warning {
      path:    period_path.key("period_end"),
      kind:    WarningKind::PeriodReversed,
      message: "period_end is earlier than period_start".into(),
    });
  }

  let ratio_path = path.key("segment_revenue_ratio");
  duplicate_names(
    record.segment_revenue_ratio.iter().map(|s| s.name.as_str()),
    &ratio_path,
    warnings,
  );
  duplicate_names(
    record.segment_revenue_yen.iter().map(|s| s.name.as_str()),
    &path.key("segment_revenue_yen"),
    warnings,
  );

  let total: f64 = record.segment_revenue_ratio.iter().map(|s| s.ratio).sum();
  if total > 1.0 + RATIO_SUM_TOLERANCE {
    warnings.push(Warning {
      path:    ratio_path,
      kind:    WarningKind::SegmentRatioOverflow,
      message: format!("segment ratios sum to {total:.3}"),
    });
  }
}

fn check_group_company(
  company: &GroupCompany,
  path: &FieldPath,
  warnings: &mut Vec<Warning>,
) {
  let unlisted = company.is_listed == Some(false);
  if (unlisted || company.market == Some(Market::NonListed))
    && company.ticker_code.is_some()
  {
    warnings.push(Warning {
      path:    path.key("ticker_code"),
      kind:    WarningKind::ListingMismatch,
      message: "ticker code present on an unlisted company".into(),
    });
  }
  if unlisted
    && company
      .market
      .is_some_and(|m| m != Market::NonListed)
  {
    warnings.push(Warning {
      path:    path.key("market"),
      kind:    WarningKind::ListingMismatch,
      message: "listed market segment on an unlisted company".into(),
    });
  }
}

fn duplicate_names<'a>(
  names: impl Iterator<Item = &'a str>,
  path: &FieldPath,
  warnings: &mut Vec<Warning>,
) {
  let mut seen = HashSet::new();
  for (i, name) in names.enumerate() {
    if !seen.insert(name) {
      warnings.push(Warning {
        path:    path.index(i).key("name"),
        kind:    WarningKind::DuplicateSegment,
        message: format!("segment {name:?} listed more than once"),
      });
    }
  }
}

/// True when both dates parse and `end` falls before `start`.
fn reversed(start: Option<&str>, end: Option<&str>) -> bool {
  let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
  match (start.and_then(parse), end.and_then(parse)) {
    (Some(start), Some(end)) => end < start,
    _ => false,
  }
}
