//! Schema-driven JSON document model with lossless fallback decoding.
//!
//! One generic engine replaces the per-resource decode/encode/enum
//! boilerplate of generated API-client models. A [`Schema`] declares the
//! field shape of one resource kind; [`Decoder`] and [`Encoder`] are fully
//! generic over it. Decoding is strict-or-opaque: absent required keys are a
//! hard error, while any other schema mismatch (wrong JSON kind, enum value
//! outside its allowed set, malformed nested document) silently degrades the
//! whole document to an opaque unparsed state that re-encodes verbatim, so
//! data from a newer schema version is carried, not lost.
//!
//! ```
//! use std::sync::Arc;
//! use wiredoc::{Decoder, Encoder, FieldKind, Schema};
//!
//! let schema = Arc::new(
//!     Schema::builder("series_query")
//!         .required("metric", FieldKind::Str)
//!         .nullable("interval", FieldKind::Int)
//!         .build(),
//! );
//! let decoder = Decoder::new(Arc::clone(&schema));
//! let encoder = Encoder::new(Arc::clone(&schema));
//!
//! let doc = decoder.decode(br#"{"metric":"cpu","interval":null,"tag":"x"}"#).unwrap();
//! assert!(doc.has("interval")); // explicit null, not absent
//! assert_eq!(
//!     encoder.encode(&doc).unwrap(),
//!     br#"{"metric":"cpu","interval":null,"tag":"x"}"#.to_vec(),
//! );
//! ```

pub mod doc;
pub mod error;
pub mod schema;

pub use doc::{Decoder, Document, Encoder, Presence};
pub use error::{DecodeError, DocumentError, EncodeError};
pub use schema::{
    validate_schema, EnumDef, FieldDescriptor, FieldKind, Optionality, Schema, SchemaBuilder,
};
