//! JSON to variant conversion.
//!
//! A document and the members of a top-level array follow different
//! rules: a top-level JSON string decodes to a symbol, while a string
//! inside an array decodes to a string.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;
use variant_foundation::{Error, JsonShape, Result, Variant};

use crate::config::{JsonConfig, ListEncoding};
use crate::number::format_number;

/// Parses JSON text into a generic JSON value.
///
/// serde_json's own recursion limit is replaced by `max_depth`, checked
/// before parsing; the parse itself runs on a stack grown on demand.
/// Numbers keep their source text, so values outside the `f64` range
/// still parse.
///
/// # Errors
///
/// Returns [`ErrorKind::TooDeep`](variant_foundation::ErrorKind::TooDeep)
/// if arrays or objects nest deeper than `max_depth`, and a syntax error
/// carrying the parser's line and column otherwise.
pub fn parse_json(text: &str, max_depth: usize) -> Result<Value> {
    let depth = nesting_depth(text);
    if depth > max_depth {
        return Err(Error::too_deep(depth, max_depth));
    }

    let syntax = |e: serde_json::Error| Error::syntax(e.to_string(), e.line(), e.column());
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(syntax)?;
    de.end().map_err(syntax)?;
    Ok(value)
}

/// Returns the deepest array/object nesting in `text`.
///
/// Brackets inside string literals are skipped. Malformed input still
/// gets a depth; the parser reports its syntax errors.
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Returns the shape of a JSON value.
#[must_use]
pub fn shape_of(value: &Value) -> JsonShape {
    match value {
        Value::Null => JsonShape::Null,
        Value::Bool(_) => JsonShape::Bool,
        Value::Number(_) => JsonShape::Number,
        Value::String(_) => JsonShape::String,
        Value::Array(_) => JsonShape::Array,
        Value::Object(_) => JsonShape::Object,
    }
}

/// Converts a whole JSON document into a variant.
///
/// Strings become symbols, numbers become numbers, and arrays become
/// lists whose members go through [`decode_element`].
///
/// # Errors
///
/// Returns an error for objects, booleans and `null`.
pub fn decode_document(value: &Value, config: &JsonConfig) -> Result<Variant> {
    match value {
        Value::String(s) => Ok(Variant::Symbol(s.clone())),
        Value::Number(n) => Ok(Variant::Number(format_number(n, config.number_format))),
        Value::Array(items) => Ok(decode_array(items, config)),
        other => Err(Error::unsupported_shape(shape_of(other))),
    }
}

/// Converts one array member into a variant.
///
/// Strings become [`Variant::String`]. Under [`ListEncoding::Nested`],
/// numbers and nested arrays are also decoded. Every other shape yields
/// the empty-symbol sentinel.
#[must_use]
pub fn decode_element(value: &Value, config: &JsonConfig) -> Variant {
    match (value, config.list_encoding) {
        (Value::String(s), _) => Variant::String(s.clone()),
        (Value::Number(n), ListEncoding::Nested) => {
            Variant::Number(format_number(n, config.number_format))
        }
        (Value::Array(items), ListEncoding::Nested) => decode_array(items, config),
        (other, _) => {
            trace!(shape = %shape_of(other), "array member has no variant form");
            Variant::default()
        }
    }
}

fn decode_array(items: &[Value], config: &JsonConfig) -> Variant {
    items.iter().map(|item| decode_element(item, config)).collect()
}
