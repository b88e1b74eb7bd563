//! Integration tests for codec configuration
//!
//! Tests list encodings and number formats through `Codec`.

use variant_foundation::{Environment, ErrorKind, Variant};
use variant_json::{Codec, JsonConfig, ListEncoding, NumberFormat};

#[test]
fn default_codec_matches_free_functions() {
    let codec = Codec::default();
    let v = Variant::list([Variant::symbol("a"), Variant::number("1")]);
    assert_eq!(codec.encode(&v).unwrap(), variant_json::to_json(&v));
    assert_eq!(codec.decode_or_sentinel("[\"a\"]"), variant_json::parse_text("[\"a\"]"));
}

#[test]
fn fixed_number_format() {
    let codec = Codec::new(JsonConfig::default().with_number_format(NumberFormat::Fixed));
    assert_eq!(codec.decode("42").unwrap(), Variant::number("42.000000"));
    assert_eq!(codec.decode("0.25").unwrap(), Variant::number("0.250000"));
}

#[test]
fn legacy_preset() {
    let codec = Codec::new(JsonConfig::legacy());
    assert_eq!(codec.decode("1").unwrap(), Variant::number("1.000000"));
    let list = Variant::list([Variant::symbol("x")]);
    assert_eq!(codec.encode(&list).unwrap(), r#"["\"x\""]"#);
}

#[test]
fn nested_encoding() {
    let codec = Codec::new(JsonConfig::nested());
    let v = Variant::list([
        Variant::symbol("x"),
        Variant::list([Variant::number("2"), Variant::empty_list()]),
    ]);
    assert_eq!(codec.encode(&v).unwrap(), r#"["x",["2",[]]]"#);
}

#[test]
fn nested_round_trip_keeps_list_shape() {
    let codec = Codec::new(JsonConfig::nested());
    let v = Variant::list([
        Variant::string("a"),
        Variant::list([Variant::string("b"), Variant::empty_list()]),
    ]);
    let json = codec.encode(&v).unwrap();
    assert_eq!(codec.decode(&json).unwrap(), v);
}

#[test]
fn nested_round_trip_turns_members_into_strings() {
    let codec = Codec::new(JsonConfig::nested());
    let v = Variant::list([
        Variant::symbol("a"),
        Variant::list([Variant::number("1")]),
    ]);
    let json = codec.encode(&v).unwrap();
    assert_eq!(
        codec.decode(&json).unwrap(),
        Variant::list([
            Variant::string("a"),
            Variant::list([Variant::string("1")]),
        ])
    );
}

#[test]
fn max_depth_is_configurable() {
    let codec = Codec::new(JsonConfig::default().with_max_depth(2));
    assert_eq!(
        codec.decode("[[]]").unwrap(),
        Variant::list([Variant::default()])
    );
    let err = codec.decode("[[[]]]").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TooDeep { depth: 3, limit: 2 }));
}

#[test]
fn nested_lossy_encoding_writes_null() {
    let codec = Codec::new(JsonConfig::default().with_list_encoding(ListEncoding::Nested));
    let v = Variant::list([
        Variant::symbol("f"),
        Variant::lambda(Vec::new(), Environment::new(())),
    ]);
    assert_eq!(codec.encode_lossy(&v), r#"["f",null]"#);
    assert!(codec.encode(&v).is_err());
}

#[test]
fn nested_element_rule() {
    let codec = Codec::new(JsonConfig::nested());
    assert_eq!(
        codec.decode_element(&serde_json::json!(7)),
        Variant::number("7")
    );
    assert!(codec.decode_element(&serde_json::json!(true)).is_sentinel());
}
