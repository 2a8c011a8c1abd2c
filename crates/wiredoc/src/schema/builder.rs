//! Fluent construction of schema values.

use super::schema::{FieldDescriptor, FieldKind, Optionality, Schema};

/// Builder for [`Schema`] values.
///
/// Fields are emitted in declaration order, which is also the wire order
/// used by the encoder.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn required(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(key, Optionality::Required, kind));
        self
    }

    pub fn optional(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(key, Optionality::Optional, kind));
        self
    }

    pub fn nullable(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.fields
            .push(FieldDescriptor::new(key, Optionality::Nullable, kind));
        self
    }

    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    pub fn build(self) -> Schema {
        Schema::new(self.name, self.fields)
    }
}
