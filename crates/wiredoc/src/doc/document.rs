use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::schema::Schema;

static ABSENT: Presence = Presence::Absent;

/// Observable state of a single known field.
///
/// Nullable fields have three states that survive a decode/encode cycle
/// unchanged; non-nullable fields only ever use `Absent` and `Value`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Presence {
    /// Key not present on the wire.
    #[default]
    Absent,
    /// Key present with an explicit JSON null.
    Null,
    /// Key present with a value.
    Value(Value),
}

impl Presence {
    /// True iff the field is present (with a value or an explicit null).
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// The value, when present with one.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Repr {
    Typed {
        /// Known-field slots in schema order.
        slots: IndexMap<String, Presence>,
        /// Unknown wire fields, in capture order.
        additional: IndexMap<String, Value>,
    },
    /// The whole wire object, kept verbatim after a schema mismatch.
    Unparsed(Map<String, Value>),
}

/// One decoded or application-constructed instance of a resource shape.
///
/// A document is either *typed* (field-by-field view plus captured unknown
/// fields) or *unparsed* (the raw wire object held opaquely after failing
/// strict validation, preserved for lossless re-encoding). An unparsed
/// document never transitions back to the typed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    schema: Arc<Schema>,
    pub(crate) repr: Repr,
}

impl Document {
    /// New typed document with every known field absent.
    pub fn new(schema: Arc<Schema>) -> Self {
        let slots = schema
            .fields
            .iter()
            .map(|f| (f.key.clone(), Presence::Absent))
            .collect();
        Self {
            schema,
            repr: Repr::Typed {
                slots,
                additional: IndexMap::new(),
            },
        }
    }

    /// New document in the unparsed state, holding `raw` verbatim.
    pub fn unparsed(schema: Arc<Schema>, raw: Map<String, Value>) -> Self {
        Self {
            schema,
            repr: Repr::Unparsed(raw),
        }
    }

    pub(crate) fn typed(
        schema: Arc<Schema>,
        slots: IndexMap<String, Presence>,
        additional: IndexMap<String, Value>,
    ) -> Self {
        Self {
            schema,
            repr: Repr::Typed { slots, additional },
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// True iff the document degraded to the opaque raw representation.
    pub fn is_unparsed(&self) -> bool {
        matches!(self.repr, Repr::Unparsed(_))
    }

    /// The raw wire object, when the document is unparsed.
    pub fn unparsed_object(&self) -> Option<&Map<String, Value>> {
        match &self.repr {
            Repr::Unparsed(raw) => Some(raw),
            Repr::Typed { .. } => None,
        }
    }

    /// Presence state of a known field.
    ///
    /// `Absent` for unknown keys and for unparsed documents.
    pub fn presence(&self, key: &str) -> &Presence {
        match &self.repr {
            Repr::Typed { slots, .. } => slots.get(key).unwrap_or(&ABSENT),
            Repr::Unparsed(_) => &ABSENT,
        }
    }

    /// Value of `key` when present with one.
    ///
    /// `None` for absent fields, explicit nulls, and unparsed documents.
    /// Unknown keys read from the additional mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match &self.repr {
            Repr::Typed { slots, additional } => match slots.get(key) {
                Some(slot) => slot.value(),
                None => additional.get(key),
            },
            Repr::Unparsed(_) => None,
        }
    }

    /// Value and presence flag: `(None, true)` for an explicit null.
    pub fn get_ok(&self, key: &str) -> (Option<&Value>, bool) {
        match &self.repr {
            Repr::Typed { slots, additional } => match slots.get(key) {
                Some(Presence::Absent) => (None, false),
                Some(Presence::Null) => (None, true),
                Some(Presence::Value(v)) => (Some(v), true),
                None => match additional.get(key) {
                    Some(v) => (Some(v), true),
                    None => (None, false),
                },
            },
            Repr::Unparsed(_) => (None, false),
        }
    }

    /// True iff `key` is present on the document (with a value or null).
    pub fn has(&self, key: &str) -> bool {
        self.get_ok(key).1
    }

    /// Set a field value. Unknown keys are stored in the additional mapping.
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), DocumentError> {
        match &mut self.repr {
            Repr::Typed { slots, additional } => {
                if let Some(slot) = slots.get_mut(key) {
                    *slot = Presence::Value(value);
                } else {
                    additional.insert(key.to_string(), value);
                }
                Ok(())
            }
            Repr::Unparsed(_) => Err(DocumentError::Unparsed),
        }
    }

    /// Set an explicit null on a field declared nullable.
    pub fn set_null(&mut self, key: &str) -> Result<(), DocumentError> {
        if self.is_unparsed() {
            return Err(DocumentError::Unparsed);
        }
        if !self.schema.field(key).is_some_and(|f| f.is_nullable()) {
            return Err(DocumentError::NotNullable(key.to_string()));
        }
        if let Repr::Typed { slots, .. } = &mut self.repr {
            if let Some(slot) = slots.get_mut(key) {
                *slot = Presence::Null;
            }
        }
        Ok(())
    }

    /// Return a field to the absent state. Unknown keys are removed from the
    /// additional mapping.
    pub fn unset(&mut self, key: &str) -> Result<(), DocumentError> {
        match &mut self.repr {
            Repr::Typed { slots, additional } => {
                if let Some(slot) = slots.get_mut(key) {
                    *slot = Presence::Absent;
                } else {
                    additional.shift_remove(key);
                }
                Ok(())
            }
            Repr::Unparsed(_) => Err(DocumentError::Unparsed),
        }
    }

    /// The captured unknown-field mapping. `None` for unparsed documents.
    pub fn additional(&self) -> Option<&IndexMap<String, Value>> {
        match &self.repr {
            Repr::Typed { additional, .. } => Some(additional),
            Repr::Unparsed(_) => None,
        }
    }
}
