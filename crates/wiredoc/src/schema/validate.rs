//! Schema integrity validator.

use std::collections::HashSet;

use serde_json::Value;

use super::schema::{EnumDef, FieldKind, Schema};

/// Validate a schema for structural integrity.
///
/// Returns `Ok(())` if the schema is valid, or `Err(code)` with a short
/// description code.
pub fn validate_schema(schema: &Schema) -> Result<(), String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(schema.fields.len());
    for field in &schema.fields {
        if field.key.is_empty() {
            return Err("KEY_EMPTY".into());
        }
        if !seen.insert(field.key.as_str()) {
            return Err("KEY_DUP".into());
        }
        validate_kind(&field.kind)?;
    }
    Ok(())
}

fn validate_kind(kind: &FieldKind) -> Result<(), String> {
    match kind {
        FieldKind::Enum(def) => validate_enum(def),
        FieldKind::Doc(schema) => validate_schema(schema),
        FieldKind::Seq(inner) | FieldKind::Map(inner) => validate_kind(inner),
        _ => Ok(()),
    }
}

fn validate_enum(def: &EnumDef) -> Result<(), String> {
    let allowed = def.allowed();
    if allowed.is_empty() {
        return Err("ENUM_EMPTY".into());
    }
    for value in allowed {
        if matches!(value, Value::Null | Value::Array(_) | Value::Object(_)) {
            return Err("ENUM_COMPOSITE".into());
        }
    }
    let first = json_kind(&allowed[0]);
    if allowed.iter().any(|v| json_kind(v) != first) {
        return Err("ENUM_MIXED".into());
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
