//! Integration tests for JSON decoding
//!
//! Tests the document rule, the array member rule, and sentinel fallback.

use proptest::prelude::*;
use serde_json::json;
use variant_foundation::{ErrorKind, JsonShape, Variant};
use variant_json::{parse_element, parse_text, try_parse_text};

// =============================================================================
// Document rule
// =============================================================================

#[test]
fn string_document_is_symbol() {
    assert_eq!(parse_text("\"hello\""), Variant::symbol("hello"));
}

#[test]
fn escaped_string_document() {
    assert_eq!(parse_text(r#""a\"b\n""#), Variant::symbol("a\"b\n"));
}

#[test]
fn number_document() {
    assert_eq!(parse_text("42"), Variant::number("42"));
    assert_eq!(parse_text("-3"), Variant::number("-3"));
    assert_eq!(parse_text("2.5"), Variant::number("2.5"));
}

#[test]
fn number_document_outside_f64_range() {
    assert_eq!(parse_text("1e400"), Variant::number("1e400"));
    assert_eq!(parse_text("-1e400"), Variant::number("-1e400"));
    assert_eq!(try_parse_text("1e400").unwrap(), Variant::number("1e400"));
}

#[test]
fn array_document() {
    assert_eq!(
        parse_text(r#"["a","b"]"#),
        Variant::list([Variant::string("a"), Variant::string("b")])
    );
    assert_eq!(parse_text("[]"), Variant::empty_list());
}

#[test]
fn top_level_and_member_strings_differ() {
    // A string is a symbol at the top level but a string inside an array
    let top = parse_text(r#""a""#);
    let member = parse_text(r#"["a"]"#);
    assert_eq!(top, Variant::symbol("a"));
    assert_eq!(member.as_list().unwrap()[0], Variant::string("a"));
    assert_ne!(top, member.as_list().unwrap()[0]);
}

#[test]
fn array_members_other_than_strings_are_sentinels() {
    let v = parse_text(r#"[1, "x", [], {"k": "v"}]"#);
    let items = v.as_list().unwrap();
    assert_eq!(items.len(), 4);
    assert!(items[0].is_sentinel());
    assert_eq!(items[1], Variant::string("x"));
    assert!(items[2].is_sentinel());
    assert!(items[3].is_sentinel());
}

fn nested_arrays(depth: usize) -> String {
    format!("{}{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn deeply_nested_document() {
    // Inner arrays are members, so they decode to the sentinel
    for depth in [127, 128, 150, 200, 1024] {
        assert_eq!(
            parse_text(&nested_arrays(depth)),
            Variant::list([Variant::default()]),
            "depth {depth}"
        );
    }
}

#[test]
fn nesting_past_limit_is_reported() {
    let err = try_parse_text(&nested_arrays(1025)).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TooDeep {
            depth: 1025,
            limit: 1024
        }
    ));
    assert!(parse_text(&nested_arrays(1025)).is_sentinel());
}

// =============================================================================
// Sentinel fallback
// =============================================================================

#[test]
fn malformed_is_sentinel() {
    for text in ["not json", "", "[1,", "\"unterminated", "{\"a\":}"] {
        assert_eq!(parse_text(text), Variant::default(), "{text:?}");
    }
}

#[test]
fn unsupported_shapes_are_sentinels() {
    for text in ["{}", "true", "false", "null", r#"{"a": [1]}"#] {
        assert_eq!(parse_text(text), Variant::symbol(""), "{text:?}");
    }
}

// =============================================================================
// Strict decoding
// =============================================================================

#[test]
fn strict_reports_syntax_error() {
    let err = try_parse_text("not json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Syntax { line: 1, .. }));
}

#[test]
fn strict_reports_shape() {
    let err = try_parse_text("true").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedShape(JsonShape::Bool)));
    let err = try_parse_text("null").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedShape(JsonShape::Null)));
}

#[test]
fn strict_distinguishes_empty_symbol_from_failure() {
    assert_eq!(try_parse_text(r#""""#).unwrap(), Variant::symbol(""));
    assert!(try_parse_text("{}").is_err());
}

// =============================================================================
// Member rule
// =============================================================================

#[test]
fn element_rule() {
    assert_eq!(parse_element(&json!("s")), Variant::string("s"));
    assert_eq!(parse_element(&json!(1)), Variant::default());
    assert_eq!(parse_element(&json!(["s"])), Variant::default());
    assert_eq!(parse_element(&json!(null)), Variant::default());
}

proptest! {
    #[test]
    fn integers_decode_to_their_text(n in any::<i64>()) {
        prop_assert_eq!(parse_text(&n.to_string()), Variant::number(n.to_string()));
    }

    #[test]
    fn string_documents_decode_to_symbols(s in ".*") {
        let text = serde_json::to_string(&s).unwrap();
        prop_assert_eq!(parse_text(&text), Variant::symbol(s));
    }
}
