//! Schema-directed decoding of wire bytes.
//!
//! Decoding is strict-or-opaque: the only hard failures are malformed input
//! and an absent required key. Every other divergence from the schema
//! (wrong JSON kind, out-of-set enum value, malformed nested document)
//! keeps the whole wire object verbatim and returns a document in the
//! unparsed state, so data from a newer peer is never lost or rejected.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::schema::{FieldKind, Schema};

use super::document::{Document, Presence};

/// Decoder for one resource shape.
pub struct Decoder {
    schema: Arc<Schema>,
}

/// Result of one object-level decode attempt.
enum Outcome {
    Typed {
        slots: IndexMap<String, Presence>,
        additional: IndexMap<String, Value>,
    },
    /// Schema mismatch somewhere in the object; keep it raw.
    Degraded,
    MissingRequired(String),
}

impl Decoder {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Decode a JSON object from wire bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<Document, DecodeError> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.decode_value(value)
    }

    /// Decode an already-parsed wire object.
    pub fn decode_value(&self, value: Value) -> Result<Document, DecodeError> {
        let Value::Object(map) = value else {
            return Err(DecodeError::NotAnObject);
        };
        match decode_object(&self.schema, &map) {
            Outcome::Typed { slots, additional } => Ok(Document::typed(
                Arc::clone(&self.schema),
                slots,
                additional,
            )),
            Outcome::Degraded => Ok(Document::unparsed(Arc::clone(&self.schema), map)),
            Outcome::MissingRequired(key) => Err(DecodeError::MissingRequiredField(key)),
        }
    }
}

fn decode_object(schema: &Schema, map: &Map<String, Value>) -> Outcome {
    // Required keys first; their absence is the one hard failure. Presence
    // is key presence: an explicit null on a required field passes here and
    // is handled as a shape mismatch below.
    for field in &schema.fields {
        if field.is_required() && !map.contains_key(&field.key) {
            return Outcome::MissingRequired(field.key.clone());
        }
    }

    let mut slots: IndexMap<String, Presence> = IndexMap::with_capacity(schema.fields.len());
    for field in &schema.fields {
        let presence = match map.get(&field.key) {
            None => Presence::Absent,
            Some(Value::Null) if field.is_nullable() => Presence::Null,
            Some(value) => {
                if !conforms(&field.kind, value) {
                    return Outcome::Degraded;
                }
                Presence::Value(value.clone())
            }
        };
        slots.insert(field.key.clone(), presence);
    }

    let mut additional: IndexMap<String, Value> = IndexMap::new();
    for (key, value) in map {
        if schema.field(key).is_none() {
            additional.insert(key.clone(), value.clone());
        }
    }

    Outcome::Typed { slots, additional }
}

/// Shape and membership check for one wire value against a field kind.
///
/// A nested document that ends unparsed (or misses one of its own required
/// keys) reports `false`, which degrades the enclosing object as a whole:
/// fallback is all-or-nothing per top-level decode.
fn conforms(kind: &FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::Bool => value.is_boolean(),
        FieldKind::Int => value.is_i64() || value.is_u64(),
        FieldKind::Num => value.is_number(),
        FieldKind::Str => value.is_string(),
        FieldKind::Enum(def) => def.is_valid(value),
        FieldKind::Doc(schema) => match value {
            Value::Object(map) => matches!(decode_object(schema, map), Outcome::Typed { .. }),
            _ => false,
        },
        FieldKind::Seq(inner) => match value {
            Value::Array(items) => items.iter().all(|item| conforms(inner, item)),
            _ => false,
        },
        FieldKind::Map(inner) => match value {
            Value::Object(map) => map.values().all(|item| conforms(inner, item)),
            _ => false,
        },
        FieldKind::Any => true,
    }
}
