//! JSON Schema rendering of the field table.
//!
//! Emits the strict structured-output dialect: every object closes with
//! `additionalProperties: false` and lists all of its properties as
//! required, with optional properties admitting `null` instead. Nested records
//! are hoisted into `$defs` and referenced by name.

use serde_json::{Map, Value, json};

use crate::fields::{
  COMPANY_PROFILE, Field, FieldKind, Format, Presence, Record,
};

const DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Render the JSON Schema of a complete [`crate::CompanyProfile`].
pub fn company_profile() -> Value { render(&COMPANY_PROFILE) }

/// Render `root` and every record reachable from it.
pub fn render(root: &'static Record) -> Value {
  let mut defs = Map::new();
  for field in root.fields {
    collect_defs(&field.kind, &mut defs);
  }

  let mut schema = record_schema(root);
  if let Value::Object(obj) = &mut schema {
    obj.insert("$schema".into(), json!(DIALECT));
    obj.insert("title".into(), json!(root.name));
    if !defs.is_empty() {
      obj.insert("$defs".into(), Value::Object(defs));
    }
  }
  schema
}

fn collect_defs(kind: &FieldKind, defs: &mut Map<String, Value>) {
  match kind {
    FieldKind::Record(record) => {
      if defs.contains_key(record.name) {
        return;
      }
      defs.insert(record.name.to_string(), record_schema(record));
      for field in record.fields {
        collect_defs(&field.kind, defs);
      }
    }
    FieldKind::List(item) => collect_defs(item, defs),
    _ => {}
  }
}

fn record_schema(record: &Record) -> Value {
  let properties: Map<String, Value> = record
    .fields
    .iter()
    .map(|f| (f.name.to_string(), field_schema(f)))
    .collect();
  let required: Vec<&str> = record.fields.iter().map(|f| f.name).collect();

  json!({
    "type": "object",
    "properties": properties,
    "required": required,
    "additionalProperties": false,
  })
}

fn field_schema(field: &Field) -> Value {
  let mut schema = kind_schema(&field.kind);
  if field.presence == Presence::Optional {
    schema = nullable(schema);
  }
  if let Value::Object(obj) = &mut schema {
    obj.insert("description".into(), json!(field.description));
  }
  schema
}

fn kind_schema(kind: &FieldKind) -> Value {
  match kind {
    FieldKind::Text => json!({ "type": "string" }),
    FieldKind::Formatted(Format::Url) => {
      json!({ "type": "string", "pattern": "^https?://" })
    }
    FieldKind::Formatted(Format::Date) => {
      json!({ "type": "string", "format": "date" })
    }
    FieldKind::Formatted(Format::CorporateNumber) => {
      json!({ "type": "string", "pattern": "^[0-9]{13}$" })
    }
    FieldKind::Bool => json!({ "type": "boolean" }),
    FieldKind::Integer { min, max } => {
      let mut obj = Map::new();
      obj.insert("type".into(), json!("integer"));
      if let Some(min) = min {
        obj.insert("minimum".into(), json!(min));
      }
      if let Some(max) = max {
        obj.insert("maximum".into(), json!(max));
      }
      Value::Object(obj)
    }
    FieldKind::Number { min, max } => {
      let mut obj = Map::new();
      obj.insert("type".into(), json!("number"));
      if let Some(min) = min {
        obj.insert("minimum".into(), json!(min));
      }
      if let Some(max) = max {
        obj.insert("maximum".into(), json!(max));
      }
      Value::Object(obj)
    }
    FieldKind::Choice { labels, .. } => {
      json!({ "type": "string", "enum": labels })
    }
    FieldKind::Record(record) => {
      json!({ "$ref": format!("#/$defs/{}", record.name) })
    }
    FieldKind::List(item) => {
      json!({ "type": "array", "items": kind_schema(item) })
    }
  }
}

/// Widen a schema so that it also accepts `null`.
fn nullable(schema: Value) -> Value {
  let mut obj = match schema {
    Value::Object(obj) => obj,
    other => return other,
  };
  if obj.contains_key("$ref") {
    return json!({ "anyOf": [Value::Object(obj), { "type": "null" }] });
  }
  if let Some(Value::String(ty)) = obj.get("type").cloned() {
    obj.insert("type".into(), json!([ty, "null"]));
  }
  if let Some(Value::Array(labels)) = obj.get_mut("enum") {
    labels.push(Value::Null);
  }
  Value::Object(obj)
}
