//! Variant to JSON conversion.

use serde_json::Value;
use tracing::warn;
use variant_foundation::{Error, ErrorKind, Result, Tag, Variant};

use crate::config::ListEncoding;

/// Converts a variant into a JSON value.
///
/// Text is written as a JSON string, numbers included. List members are
/// written according to `encoding`. `on_callable` decides what a
/// procedure or lambda turns into, anywhere in the tree.
///
/// # Errors
///
/// Propagates errors returned by `on_callable`.
pub fn to_value<F>(variant: &Variant, encoding: ListEncoding, on_callable: &mut F) -> Result<Value>
where
    F: FnMut(Tag) -> Result<Value>,
{
    match variant {
        Variant::Symbol(s) | Variant::Number(s) | Variant::String(s) => Ok(Value::String(s.clone())),
        Variant::List(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                let member = to_value(item, encoding, on_callable)?;
                array.push(match encoding {
                    ListEncoding::Stringified => Value::String(member.to_string()),
                    ListEncoding::Nested => member,
                });
            }
            Ok(Value::Array(array))
        }
        Variant::Procedure(_) | Variant::Lambda(_) => on_callable(variant.tag()),
    }
}

/// Encodes a variant as JSON text, failing on callables.
///
/// # Errors
///
/// Returns [`ErrorKind::NotSerializable`] if the variant is, or contains,
/// a procedure or lambda.
pub fn encode_strict(variant: &Variant, encoding: ListEncoding) -> Result<String> {
    match encoding {
        ListEncoding::Nested => serde_json::to_string(variant).map_err(|e| {
            first_callable(variant).map_or_else(
                || Error::new(ErrorKind::Serialization(e.to_string())),
                Error::not_serializable,
            )
        }),
        ListEncoding::Stringified => {
            let mut reject = |tag: Tag| -> Result<Value> { Err(Error::not_serializable(tag)) };
            to_value(variant, encoding, &mut reject).map(|value| value.to_string())
        }
    }
}

/// Encodes a variant as JSON text, writing callables as `null`.
#[must_use]
pub fn encode_lossy(variant: &Variant, encoding: ListEncoding) -> String {
    let mut drop_callable = |tag: Tag| -> Result<Value> {
        warn!(%tag, "value has no JSON form; writing null");
        Ok(Value::Null)
    };
    to_value(variant, encoding, &mut drop_callable)
        .unwrap_or(Value::Null)
        .to_string()
}

fn first_callable(variant: &Variant) -> Option<Tag> {
    match variant {
        Variant::Procedure(_) | Variant::Lambda(_) => Some(variant.tag()),
        Variant::List(items) => items.iter().find_map(first_callable),
        _ => None,
    }
}
