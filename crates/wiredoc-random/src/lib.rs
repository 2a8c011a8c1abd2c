//! Random schema-conforming document generation.
//!
//! Produces wire objects that decode into the typed state for any given
//! [`Schema`], for use in randomized round-trip tests. All randomness comes
//! from the caller's [`Rng`], so seeded generators give reproducible runs.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{Map, Number, Value};
use wiredoc::{FieldKind, Optionality, Schema};

/// Generates random wire objects conforming to a [`Schema`].
pub struct RandomDoc;

impl RandomDoc {
    /// Generate one conforming wire object.
    ///
    /// Required fields are always present; optional fields appear with
    /// probability 1/2; nullable fields split evenly between absent,
    /// explicit null, and a value; enum fields pick uniformly from their
    /// allowed set.
    pub fn generate<R: Rng>(schema: &Schema, rng: &mut R) -> Value {
        let mut map = Map::new();
        for field in &schema.fields {
            match field.optionality {
                Optionality::Required => {
                    map.insert(field.key.clone(), Self::gen_kind(&field.kind, rng));
                }
                Optionality::Optional => {
                    if rng.gen_bool(0.5) {
                        map.insert(field.key.clone(), Self::gen_kind(&field.kind, rng));
                    }
                }
                Optionality::Nullable => match rng.gen_range(0..3) {
                    0 => {}
                    1 => {
                        map.insert(field.key.clone(), Value::Null);
                    }
                    _ => {
                        map.insert(field.key.clone(), Self::gen_kind(&field.kind, rng));
                    }
                },
            }
        }
        Value::Object(map)
    }

    fn gen_kind<R: Rng>(kind: &FieldKind, rng: &mut R) -> Value {
        match kind {
            FieldKind::Bool => Value::Bool(rng.gen_bool(0.5)),
            FieldKind::Int => Value::Number(Number::from(rng.gen_range(-1_000_000i64..=1_000_000))),
            FieldKind::Num => {
                let v = rng.gen_range(-1_000_000.0..1_000_000.0_f64);
                Number::from_f64(v)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::Number(0.into()))
            }
            FieldKind::Str => Value::String(Self::gen_string(rng)),
            FieldKind::Enum(def) => {
                let allowed = def.allowed();
                allowed[rng.gen_range(0..allowed.len())].clone()
            }
            FieldKind::Doc(schema) => Self::generate(schema, rng),
            FieldKind::Seq(inner) => {
                let len = rng.gen_range(0..=4);
                Value::Array((0..len).map(|_| Self::gen_kind(inner, rng)).collect())
            }
            FieldKind::Map(inner) => {
                let len = rng.gen_range(0..=4);
                let mut map = Map::new();
                for _ in 0..len {
                    map.insert(Self::gen_string(rng), Self::gen_kind(inner, rng));
                }
                Value::Object(map)
            }
            FieldKind::Any => Self::gen_any(rng),
        }
    }

    fn gen_any<R: Rng>(rng: &mut R) -> Value {
        match rng.gen_range(0..5) {
            0 => Value::Null,
            1 => Value::Bool(rng.gen_bool(0.5)),
            2 => Value::Number(Number::from(rng.gen_range(-1000i64..=1000))),
            3 => Value::String(Self::gen_string(rng)),
            _ => Value::Array(
                (0..rng.gen_range(0..=3))
                    .map(|_| Value::Number(Number::from(rng.gen_range(0i64..=9))))
                    .collect(),
            ),
        }
    }

    fn gen_string<R: Rng>(rng: &mut R) -> String {
        let len = rng.gen_range(1..=12);
        (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
    }
}
