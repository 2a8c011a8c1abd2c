//! Schema-directed encoding of documents to wire bytes.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::EncodeError;
use crate::schema::Schema;

use super::document::{Document, Presence};

/// Encoder for one resource shape.
///
/// Known fields are emitted in schema order; captured unknown fields are
/// appended afterwards in their original order. A document in the unparsed
/// state serializes its stored wire object verbatim, with no field-by-field
/// logic applied.
pub struct Encoder {
    schema: Arc<Schema>,
}

impl Encoder {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Encode a document to compact JSON bytes.
    pub fn encode(&self, doc: &Document) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.encode_value(doc))?)
    }

    /// Build the wire object for a document.
    pub fn encode_value(&self, doc: &Document) -> Value {
        if let Some(raw) = doc.unparsed_object() {
            return Value::Object(raw.clone());
        }
        let mut out = Map::new();
        for field in &self.schema.fields {
            match doc.presence(&field.key) {
                Presence::Absent => {}
                Presence::Null => {
                    out.insert(field.key.clone(), Value::Null);
                }
                Presence::Value(value) => {
                    out.insert(field.key.clone(), value.clone());
                }
            }
        }
        if let Some(additional) = doc.additional() {
            for (key, value) in additional {
                out.insert(key.clone(), value.clone());
            }
        }
        Value::Object(out)
    }
}
