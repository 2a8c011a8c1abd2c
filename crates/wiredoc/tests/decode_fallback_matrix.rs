use std::sync::Arc;

use serde_json::json;
use wiredoc::{DecodeError, Decoder, Encoder, EnumDef, FieldKind, Schema};

fn series_schema() -> Arc<Schema> {
    Arc::new(
        Schema::builder("series_query")
            .required("metric", FieldKind::Str)
            .required("points", FieldKind::Seq(Box::new(FieldKind::Num)))
            .optional("sort", FieldKind::Enum(EnumDef::strings(["asc", "desc"])))
            .nullable("interval", FieldKind::Int)
            .build(),
    )
}

#[test]
fn missing_required_matrix() {
    let dec = Decoder::new(series_schema());
    for (body, missing) in [
        (br#"{}"#.as_slice(), "metric"),
        (br#"{"metric":"m"}"#.as_slice(), "points"),
        (br#"{"points":[1]}"#.as_slice(), "metric"),
        (br#"{"sort":"asc","interval":5}"#.as_slice(), "metric"),
    ] {
        match dec.decode(body) {
            Err(DecodeError::MissingRequiredField(key)) => assert_eq!(key, missing),
            other => panic!("expected MissingRequiredField for {body:?}, got {other:?}"),
        }
    }
}

#[test]
fn fallback_trigger_matrix() {
    let dec = Decoder::new(series_schema());
    let degraded = [
        // wrong kind for a required field
        br#"{"metric":1,"points":[1]}"#.as_slice(),
        // wrong kind for an optional field
        br#"{"metric":"m","points":[1],"sort":["asc"]}"#.as_slice(),
        // enum literal outside the allowed set
        br#"{"metric":"m","points":[1],"sort":"unexpected_value"}"#.as_slice(),
        // explicit null on a required field
        br#"{"metric":"m","points":null}"#.as_slice(),
        // explicit null on an optional non-nullable field
        br#"{"metric":"m","points":[1],"sort":null}"#.as_slice(),
        // non-integer where an integer is declared
        br#"{"metric":"m","points":[1],"interval":2.5}"#.as_slice(),
        // sequence element of the wrong kind
        br#"{"metric":"m","points":[1,"two"]}"#.as_slice(),
    ];
    for body in degraded {
        let doc = dec.decode(body).unwrap();
        assert!(doc.is_unparsed(), "expected fallback for {body:?}");
    }
}

#[test]
fn fallback_preserves_wire_object_verbatim() {
    let schema = series_schema();
    let dec = Decoder::new(Arc::clone(&schema));
    let enc = Encoder::new(schema);

    let wire = br#"{"metric":"m","points":[1],"sort":"unexpected_value","extra":true}"#;
    let doc = dec.decode(wire).unwrap();
    assert!(doc.is_unparsed());
    assert_eq!(
        doc.unparsed_object().unwrap().get("sort"),
        Some(&json!("unexpected_value"))
    );
    assert_eq!(enc.encode(&doc).unwrap(), wire.to_vec());
}

#[test]
fn fallback_repeated_cycles_are_idempotent() {
    let schema = series_schema();
    let dec = Decoder::new(Arc::clone(&schema));
    let enc = Encoder::new(schema);

    // Whitespace normalizes on the first encode; afterwards the bytes are
    // stable across any number of decode/encode cycles.
    let wire = br#"{ "metric": "m", "points": [1], "sort": "unexpected_value" }"#;
    let first = enc.encode(&dec.decode(wire).unwrap()).unwrap();
    let mut bytes = first.clone();
    for _ in 0..3 {
        let doc = dec.decode(&bytes).unwrap();
        assert!(doc.is_unparsed());
        bytes = enc.encode(&doc).unwrap();
    }
    assert_eq!(bytes, first);
}

#[test]
fn fallback_accessors_degrade_gracefully() {
    let dec = Decoder::new(series_schema());
    let doc = dec
        .decode(br#"{"metric":"m","points":[1],"sort":"unexpected_value"}"#)
        .unwrap();
    assert_eq!(doc.get("metric"), None);
    assert_eq!(doc.get_ok("metric"), (None, false));
    assert!(!doc.has("metric"));
    assert!(doc.additional().is_none());
}

#[test]
fn nested_fallback_is_all_or_nothing() {
    let inner = Schema::builder("compute")
        .required("aggregation", FieldKind::Enum(EnumDef::strings(["avg", "sum", "max"])))
        .build();
    let schema = Arc::new(
        Schema::builder("scalar_query")
            .required("data_source", FieldKind::Str)
            .required("compute", FieldKind::Doc(Box::new(inner)))
            .build(),
    );
    let dec = Decoder::new(Arc::clone(&schema));
    let enc = Encoder::new(schema);

    let wire = br#"{"data_source":"metrics","compute":{"aggregation":"p99"}}"#;
    let doc = dec.decode(wire).unwrap();
    assert!(doc.is_unparsed());
    // The valid outer field is not individually accessible.
    assert_eq!(doc.get("data_source"), None);
    // The whole enclosing object round-trips untouched.
    assert_eq!(enc.encode(&doc).unwrap(), wire.to_vec());
}

#[test]
fn deep_nested_violation_degrades_top_level() {
    let leaf = Schema::builder("leaf")
        .required("unit", FieldKind::Enum(EnumDef::strings(["ms", "s"])))
        .build();
    let mid = Schema::builder("mid")
        .required("leaf", FieldKind::Doc(Box::new(leaf)))
        .build();
    let schema = Arc::new(
        Schema::builder("root")
            .required("mid", FieldKind::Doc(Box::new(mid)))
            .optional("note", FieldKind::Str)
            .build(),
    );
    let dec = Decoder::new(schema);

    let ok = dec
        .decode(br#"{"mid":{"leaf":{"unit":"ms"}},"note":"n"}"#)
        .unwrap();
    assert!(!ok.is_unparsed());

    let bad = dec
        .decode(br#"{"mid":{"leaf":{"unit":"minutes"}},"note":"n"}"#)
        .unwrap();
    assert!(bad.is_unparsed());
}
