//! Schema AST: the declarative field-shape definition for one resource kind.

pub mod builder;
pub mod schema;
pub mod validate;

pub use builder::SchemaBuilder;
pub use schema::{EnumDef, FieldDescriptor, FieldKind, Optionality, Schema};
pub use validate::validate_schema;
