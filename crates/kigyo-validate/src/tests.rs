//! Scenario tests for document validation.

use kigyo_core::{
  enums::{AccountingStandard, Market, PeriodType, Platform, Prefecture, RelationType},
  profile::CompanyProfile,
};
use proptest::prelude::*;
use serde_json::{Value, json};

use crate::{
  Error, Policy, Rule, ViolationKind, WarningKind, validate, validate_str,
  validate_with,
};

fn minimal() -> Value { json!({ "basic": { "company_name": "トヨタ自動車株式会社" } }) }

fn full() -> Value {
  json!({
    "basic": {
      "company_name": "トヨタ自動車株式会社",
      "ticker_code": 7203,
      "market": "Prime",
      "corporate_number": "1180301018771",
      "headquarters_pref": "愛知県",
      "founded_year": 1937,
      "capital_yen": 397_050_000_000u64,
      "employees_consolidated": 380_793,
      "executives": [
        {
          "name": "佐藤恒治",
          "title": "代表取締役社長",
          "start_date": "2023-04-01",
          "source_url": "https://global.toyota/jp/company/profile/executives/"
        }
      ],
      "accounting_standard": "IFRS",
      "fiscal_year_start_month": 4,
      "source_url": "https://global.toyota/jp/company/profile/overview/"
    },
    "financials": {
      "records": [
        {
          "period": {
            "period_type": "annual",
            "fiscal_year": 2024,
            "period_start": "2023-04-01",
            "period_end": "2024-03-31"
          },
          "revenue_yen": 4.5095325e13,
          "op_income_yen": 5.352934e12,
          "net_income_yen": 4.944933e12,
          "eps_yen": 365.94,
          "equity_ratio": 0.38,
          "roe": 0.15,
          "roa": -0.02,
          "segment_revenue_ratio": [
            { "name": "自動車", "ratio": 0.9 },
            { "name": "金融", "ratio": 0.07 }
          ],
          "segment_revenue_yen": [
            { "name": "自動車", "amount_yen": 4.1e13 }
          ],
          "source_url": "https://global.toyota/jp/ir/library/securities-report/"
        },
        {
          "period": { "period_type": "quarter", "fiscal_year": 2025, "quarter": 1 },
          "is_cumulative": false,
          "revenue_yen": 1.1837e13
        }
      ],
      "source_url": "https://global.toyota/jp/ir/",
      "last_verified_at": "2024-09-01"
    },
    "org_signals": [
      { "event_type": "EXECUTIVE_CHANGE", "title": "社長交代", "announced_date": "2023-01-26" }
    ],
    "communications": {
      "owned_media_urls": ["https://global.toyota/jp/", "https://toyotatimes.jp/"],
      "social_accounts": [
        { "platform": "X", "url": "https://x.com/TOYOTA_PR", "handle": "@TOYOTA_PR", "followers": 250000, "active": true }
      ]
    },
    "competitors": [
      { "name": "本田技研工業株式会社", "areas": ["自動車", "二輪"] }
    ],
    "group_companies": [
      {
        "name": "株式会社デンソー",
        "relation_type": "affiliate",
        "ownership_ratio": 0.2,
        "is_listed": true,
        "ticker_code": 6902,
        "market": "Prime",
        "headquarters_pref": "愛知県"
      }
    ],
    "source_url": "https://global.toyota/jp/",
    "last_verified_at": "2024-09-01",
    "confidence": 0.8
  })
}

fn violations(doc: &Value) -> Vec<(String, ViolationKind)> {
  match validate(doc) {
    Ok(_) => Vec::new(),
    Err(e) => e
      .violations()
      .expect("rule failure")
      .iter()
      .map(|v| (v.path.to_string(), v.kind))
      .collect(),
  }
}

// ─── Acceptance ──────────────────────────────────────────────────────────────

#[test]
fn minimal_document_gets_defaults() {
  let report = validate(&minimal()).unwrap();
  let profile = report.profile;
  assert_eq!(profile, CompanyProfile::named("トヨタ自動車株式会社"));
  assert!(profile.basic.executives.is_empty());
  assert!(profile.financials.records.is_empty());
  assert!(profile.communications.social_accounts.is_empty());
  assert_eq!(profile.basic.ticker_code, None);
  assert_eq!(profile.confidence, None);
  assert!(report.warnings.is_empty());
  assert!(report.dropped.is_empty());
}

#[test]
fn full_document_decodes() {
  let report = validate(&full()).unwrap();
  assert!(report.is_clean(), "{:?}", report.warnings);
  let p = report.profile;
  assert_eq!(p.basic.market, Some(Market::Prime));
  assert_eq!(p.basic.headquarters_pref, Some(Prefecture::Aichi));
  assert_eq!(p.basic.accounting_standard, Some(AccountingStandard::Ifrs));
  assert_eq!(p.financials.records.len(), 2);
  assert_eq!(p.financials.records[0].period.period_type, PeriodType::Annual);
  assert_eq!(p.financials.records[0].is_consolidated, Some(true));
  assert_eq!(p.financials.records[1].is_cumulative, Some(false));
  assert_eq!(p.financials.records[0].roa, Some(-0.02));
  assert_eq!(p.communications.social_accounts[0].platform, Platform::X);
  assert_eq!(
    p.group_companies[0].relation_type,
    Some(RelationType::Affiliate)
  );
}

#[test]
fn serialized_profile_revalidates_to_itself() {
  for doc in [minimal(), full()] {
    let first = validate(&doc).unwrap().profile;
    let again = validate(&serde_json::to_value(&first).unwrap())
      .unwrap()
      .profile;
    assert_eq!(first, again);
  }
}

#[test]
fn explicit_nulls_are_unknowns() {
  let doc = json!({
    "basic": { "company_name": "Example", "market": null, "ticker_code": null },
    "source_url": null,
    "confidence": null
  });
  let p = validate(&doc).unwrap().profile;
  assert_eq!(p.basic.market, None);
  assert_eq!(p.source_url, None);
}

// ─── Hard violations ─────────────────────────────────────────────────────────

#[test]
fn roe_out_of_range() {
  let mut doc = full();
  doc["financials"]["records"][1]["roe"] = json!(1.5);
  assert_eq!(
    violations(&doc),
    vec![("financials.records[1].roe".into(), ViolationKind::Range)]
  );
}

#[test]
fn english_prefecture_rejected() {
  let mut doc = minimal();
  doc["basic"]["headquarters_pref"] = json!("Tokyo");
  let err = validate(&doc).unwrap_err();
  let Error::Invalid(e) = err else {
    panic!("expected rule failure")
  };
  let v: Vec<_> = e.at("basic.headquarters_pref").collect();
  assert_eq!(v.len(), 1);
  assert_eq!(v[0].kind, ViolationKind::Enum);
  assert!(matches!(
    v[0].rule,
    Rule::NotInEnum { enumeration: "Prefecture", .. }
  ));
  assert_eq!(v[0].received, Some(json!("Tokyo")));
}

#[test]
fn schemeless_url_is_a_format_error() {
  let mut doc = full();
  doc["financials"]["records"][0]["source_url"] =
    json!("ir.example.com/report.pdf");
  assert_eq!(
    violations(&doc),
    vec![(
      "financials.records[0].source_url".into(),
      ViolationKind::Format
    )]
  );
}

#[test]
fn url_of_wrong_type_is_structural() {
  let mut doc = minimal();
  doc["source_url"] = json!(42);
  assert_eq!(
    violations(&doc),
    vec![("source_url".into(), ViolationKind::Structural)]
  );
}

#[test]
fn owned_media_urls_checked_per_element() {
  let mut doc = minimal();
  doc["communications"] =
    json!({ "owned_media_urls": ["https://example.co.jp/", "example.co.jp/ir"] });
  assert_eq!(
    violations(&doc),
    vec![(
      "communications.owned_media_urls[1]".into(),
      ViolationKind::Format
    )]
  );
}

#[test]
fn missing_required_fields() {
  let doc = json!({
    "basic": { "executives": [ { "name": "山田太郎" } ] },
    "org_signals": [ { "event_type": "OTHER" } ]
  });
  let mut got = violations(&doc);
  got.sort();
  assert_eq!(
    got,
    vec![
      ("basic.company_name".into(), ViolationKind::Structural),
      ("basic.executives[0].title".into(), ViolationKind::Structural),
      ("org_signals[0].title".into(), ViolationKind::Structural),
    ]
  );
}

#[test]
fn missing_basic_and_non_object_root() {
  assert_eq!(
    violations(&json!({})),
    vec![("basic".into(), ViolationKind::Structural)]
  );
  assert_eq!(
    violations(&json!([])),
    vec![("<root>".into(), ViolationKind::Structural)]
  );
}

#[test]
fn unknown_keys_rejected_at_every_level() {
  let mut doc = minimal();
  doc["extra"] = json!(true);
  doc["basic"]["nickname"] = json!("トヨタ");
  let mut got = violations(&doc);
  got.sort();
  assert_eq!(
    got,
    vec![
      ("basic.nickname".into(), ViolationKind::Structural),
      ("extra".into(), ViolationKind::Structural),
    ]
  );
}

#[test]
fn null_collections_rejected() {
  let mut doc = minimal();
  doc["financials"] = Value::Null;
  doc["competitors"] = Value::Null;
  let err = validate(&doc).unwrap_err();
  let rules: Vec<_> = err
    .violations()
    .unwrap()
    .iter()
    .map(|v| v.rule.clone())
    .collect();
  assert_eq!(rules, vec![Rule::NullNotAllowed, Rule::NullNotAllowed]);
}

#[test]
fn integer_fields_reject_floats_and_strings() {
  let mut doc = minimal();
  doc["basic"]["founded_year"] = json!(1937.0);
  doc["basic"]["ticker_code"] = json!("7203");
  let mut got = violations(&doc);
  got.sort();
  assert_eq!(
    got,
    vec![
      ("basic.founded_year".into(), ViolationKind::Structural),
      ("basic.ticker_code".into(), ViolationKind::Structural),
    ]
  );
}

#[test]
fn bad_dates_and_corporate_numbers() {
  let mut doc = minimal();
  doc["last_verified_at"] = json!("2024/09/01");
  doc["basic"]["corporate_number"] = json!("118030101877");
  let mut got = violations(&doc);
  got.sort();
  assert_eq!(
    got,
    vec![
      ("basic.corporate_number".into(), ViolationKind::Format),
      ("last_verified_at".into(), ViolationKind::Format),
    ]
  );
}

#[test]
fn signed_year_and_uppercase_scheme_are_format_errors() {
  let mut doc = minimal();
  doc["last_verified_at"] = json!("+202-01-01");
  doc["source_url"] = json!("HTTPS://global.toyota/jp/ir/");
  let mut got = violations(&doc);
  got.sort();
  assert_eq!(
    got,
    vec![
      ("last_verified_at".into(), ViolationKind::Format),
      ("source_url".into(), ViolationKind::Format),
    ]
  );
}

#[test]
fn every_violation_collected_in_one_pass() {
  let mut doc = full();
  doc["basic"]["market"] = json!("TSE1");
  doc["basic"]["fiscal_year_start_month"] = json!(13);
  doc["financials"]["records"][0]["equity_ratio"] = json!(38.0);
  doc["financials"]["records"][1]["period"]["quarter"] = json!(5);
  doc["communications"]["social_accounts"][0]["platform"] = json!("Twitter");
  doc["group_companies"][0]["ownership_ratio"] = json!(-0.1);
  doc["confidence"] = json!(1.01);

  let err = validate(&doc).unwrap_err();
  assert_eq!(err.violations().unwrap().len(), 7);
  let text = err.to_string();
  assert!(text.starts_with("document has 7 violation(s)"));
  assert!(text.contains("financials.records[1].period.quarter"));
}

#[test]
fn malformed_json_text() {
  assert!(matches!(
    validate_str("{ not json", Policy::Strict),
    Err(Error::Json(_))
  ));
}

// ─── Consistency warnings ────────────────────────────────────────────────────

#[test]
fn annual_period_with_quarter_is_a_warning_not_an_error() {
  let mut doc = minimal();
  doc["financials"] = json!({
    "records": [
      { "period": { "period_type": "annual", "fiscal_year": 2024, "quarter": 2 } },
      { "period": { "period_type": "quarter", "fiscal_year": 2024, "quarter": null } }
    ]
  });
  let report = validate(&doc).unwrap();
  let kinds: Vec<_> = report.warnings.iter().map(|w| w.kind).collect();
  assert_eq!(
    kinds,
    vec![WarningKind::QuarterOnAnnual, WarningKind::QuarterMissing]
  );
  assert_eq!(
    report.warnings[1].path.to_string(),
    "financials.records[1].period.quarter"
  );
}

// ─── Lenient policy ──────────────────────────────────────────────────────────

#[test]
fn lenient_salvages_optional_fields_and_list_elements() {
  let mut doc = full();
  doc["basic"]["headquarters_pref"] = json!("Tokyo");
  doc["financials"]["records"][0]["roe"] = json!(15.0);
  doc["financials"]["records"][0]["is_consolidated"] = json!("yes");
  doc["basic"]["executives"]
    .as_array_mut()
    .unwrap()
    .push(json!({ "name": "役職不明" }));
  doc["competitors"] = json!("Honda");
  doc["unexpected"] = json!(1);

  assert!(validate(&doc).is_err());

  let report = validate_with(&doc, Policy::Lenient).unwrap();
  let p = &report.profile;
  assert_eq!(p.basic.headquarters_pref, None);
  assert_eq!(p.basic.executives.len(), 1);
  assert_eq!(p.financials.records[0].roe, None);
  assert_eq!(p.financials.records[0].is_consolidated, None);
  assert_eq!(p.financials.records[0].roa, Some(-0.02));
  assert!(p.competitors.is_empty());
  assert_eq!(report.dropped.len(), 6);
  assert!(!report.is_clean());
}

#[test]
fn lenient_drops_records_missing_required_children() {
  let mut doc = full();
  doc["financials"]["records"][1]["period"]["period_type"] = json!("half");
  let report = validate_with(&doc, Policy::Lenient).unwrap();
  assert_eq!(report.profile.financials.records.len(), 1);
  assert_eq!(report.dropped.len(), 1);
  assert_eq!(
    report.dropped[0].path.to_string(),
    "financials.records[1].period.period_type"
  );
}

#[test]
fn lenient_still_rejects_unsalvageable_basic() {
  let doc = json!({ "basic": { "ticker_code": 7203 } });
  let err = validate_with(&doc, Policy::Lenient).unwrap_err();
  assert_eq!(err.violations().unwrap().len(), 1);
}

#[test]
fn policy_deserializes_lowercase() {
  let p: Policy = serde_json::from_value(json!("lenient")).unwrap();
  assert_eq!(p, Policy::Lenient);
  assert_eq!(Policy::default(), Policy::Strict);
}

// ─── Properties ──────────────────────────────────────────────────────────────

/// Every closed-enumeration field, as (object path, field, accepted labels).
fn enum_fields() -> Vec<(&'static str, &'static str, &'static [&'static str])> {
  use kigyo_core::enums::OrgEventType;
  vec![
    ("basic", "market", Market::VARIANTS),
    ("basic", "headquarters_pref", Prefecture::VARIANTS),
    ("basic", "accounting_standard", AccountingStandard::VARIANTS),
    ("org_signals[0]", "event_type", OrgEventType::VARIANTS),
    ("communications.social_accounts[0]", "platform", Platform::VARIANTS),
    ("group_companies[0]", "relation_type", RelationType::VARIANTS),
    ("group_companies[0]", "market", Market::VARIANTS),
    ("group_companies[0]", "headquarters_pref", Prefecture::VARIANTS),
  ]
}

/// `full()` with the field at `object.field` replaced by `value`.
fn with_field(object: &str, field: &str, value: Value) -> Value {
  let mut doc = full();
  let target = crate::FieldPath::parse(object);
  let mut node = &mut doc;
  for segment in target.segments() {
    node = match segment {
      crate::path::Segment::Key(k) => &mut node[k.as_str()],
      crate::path::Segment::Index(i) => &mut node[*i],
    };
  }
  node[field] = value;
  doc
}

#[test]
fn every_declared_label_accepted() {
  for (object, field, labels) in enum_fields() {
    for label in labels {
      let doc = with_field(object, field, json!(label));
      assert!(validate(&doc).is_ok(), "{object}.{field} = {label}");
    }
  }
}

#[test]
fn numeric_bounds_are_inclusive() {
  let integers: &[(&str, &str, i64, i64)] = &[
    ("basic", "ticker_code", 1000, 9999),
    ("basic", "founded_year", 1600, 2100),
    ("basic", "fiscal_year_start_month", 1, 12),
    ("financials.records[0].period", "fiscal_year", 1900, 2100),
    ("financials.records[1].period", "quarter", 1, 4),
    ("group_companies[0]", "ticker_code", 1000, 9999),
  ];
  for &(object, field, lo, hi) in integers {
    assert!(validate(&with_field(object, field, json!(lo))).is_ok());
    assert!(validate(&with_field(object, field, json!(hi))).is_ok());
    assert!(validate(&with_field(object, field, json!(lo - 1))).is_err());
    assert!(validate(&with_field(object, field, json!(hi + 1))).is_err());
  }

  let counts: &[(&str, &str)] = &[
    ("basic", "capital_yen"),
    ("basic", "employees_consolidated"),
    ("group_companies[0]", "capital_yen"),
    ("group_companies[0]", "employees"),
    ("communications.social_accounts[0]", "followers"),
  ];
  for &(object, field) in counts {
    assert!(validate(&with_field(object, field, json!(0))).is_ok());
    assert!(validate(&with_field(object, field, json!(u64::MAX))).is_ok());
    assert!(
      validate(&with_field(object, field, json!(-1))).is_err(),
      "{object}.{field}"
    );
  }

  let fractions: &[(&str, &str, f64, f64)] = &[
    ("", "confidence", 0.0, 1.0),
    ("financials.records[0]", "equity_ratio", 0.0, 1.0),
    ("financials.records[0]", "roe", -1.0, 1.0),
    ("financials.records[0]", "roa", -1.0, 1.0),
    ("group_companies[0]", "ownership_ratio", 0.0, 1.0),
    ("financials.records[0].segment_revenue_ratio[0]", "ratio", 0.0, 1.0),
  ];
  let eps = 1e-9;
  for &(object, field, lo, hi) in fractions {
    assert!(validate(&with_field(object, field, json!(lo))).is_ok());
    assert!(validate(&with_field(object, field, json!(hi))).is_ok());
    assert!(validate(&with_field(object, field, json!(lo - eps))).is_err());
    assert!(validate(&with_field(object, field, json!(hi + eps))).is_err());
  }
}

proptest! {
  #[test]
  fn undeclared_labels_rejected(label in "\\PC{0,12}") {
    for (object, field, labels) in enum_fields() {
      prop_assume!(!labels.contains(&label.as_str()));
      let doc = with_field(object, field, json!(label));
      let err = validate(&doc).unwrap_err();
      let vs = err.violations().unwrap();
      prop_assert_eq!(vs.len(), 1);
      prop_assert_eq!(vs[0].kind, ViolationKind::Enum);
    }
  }

  #[test]
  fn negative_amounts_rejected(amount in -1.0e15f64..-1.0e-6) {
    let doc = with_field("financials.records[0]", "revenue_yen", json!(amount));
    let err = validate(&doc).unwrap_err();
    prop_assert_eq!(err.violations().unwrap()[0].kind, ViolationKind::Range);
  }
}
