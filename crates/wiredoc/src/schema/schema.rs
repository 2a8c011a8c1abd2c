use serde_json::Value;

/// Presence contract of a field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optionality {
    /// The key must be present; its absence aborts the decode.
    Required,
    /// The key may be absent; an explicit null is a shape mismatch.
    Optional,
    /// The key may be absent, explicitly null, or carry a value, and the
    /// three states stay distinguishable through a decode/encode cycle.
    Nullable,
}

impl Optionality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Nullable => "nullable",
        }
    }
}

/// A fixed set of allowed primitive literals for an enum field.
///
/// Enum values live on the wire as their underlying primitive, so an
/// unrecognized literal from a newer peer is carried as data rather than
/// rejected at parse time; membership is only checked by [`is_valid`]
/// (and by the decoder's validation pass).
///
/// [`is_valid`]: EnumDef::is_valid
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    allowed: Vec<Value>,
}

impl EnumDef {
    pub fn new(allowed: Vec<Value>) -> Self {
        Self { allowed }
    }

    /// Allowed set of string literals.
    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: values
                .into_iter()
                .map(|s| Value::String(s.into()))
                .collect(),
        }
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }

    /// True iff `value` is a member of the allowed set.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.allowed.iter().any(|v| v == value)
    }
}

/// Value kind of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Bool,
    /// Integer-valued JSON number.
    Int,
    /// Any JSON number.
    Num,
    Str,
    /// Primitive restricted to a fixed literal set.
    Enum(EnumDef),
    /// Nested document with its own schema.
    Doc(Box<Schema>),
    /// Homogeneous array of the inner kind.
    Seq(Box<FieldKind>),
    /// Open string-keyed map with values of the inner kind.
    Map(Box<FieldKind>),
    /// Any JSON value, including null.
    Any,
}

impl FieldKind {
    /// Returns the "kind" string identifier for this field kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Num => "num",
            Self::Str => "str",
            Self::Enum(_) => "enum",
            Self::Doc(_) => "doc",
            Self::Seq(_) => "seq",
            Self::Map(_) => "map",
            Self::Any => "any",
        }
    }
}

/// Describes one field of a document: wire key, presence contract, and
/// value kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub key: String,
    pub optionality: Optionality,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, optionality: Optionality, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            optionality,
            kind,
        }
    }

    pub fn is_required(&self) -> bool {
        self.optionality == Optionality::Required
    }

    pub fn is_nullable(&self) -> bool {
        self.optionality == Optionality::Nullable
    }
}

/// The declarative field-shape definition for one resource kind.
///
/// A schema is plain data; the decoder and encoder are fully generic over
/// it, so one schema value per resource shape is the only per-shape
/// artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn builder(name: impl Into<String>) -> super::builder::SchemaBuilder {
        super::builder::SchemaBuilder::new(name)
    }

    /// Looks up the descriptor for a wire key.
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }
}
