//! JSON encoding and decoding for [`Variant`] values.
//!
//! This crate provides:
//! - [`parse_text`], [`parse_element`], [`JsonExt::to_json`] - Lossy conversions
//!   that fall back to the empty-symbol sentinel or `null`
//! - [`try_parse_text`], [`JsonExt::try_to_json`] - Conversions that report errors
//! - [`Codec`] - The same conversions under a [`JsonConfig`]
//!
//! By default list members are written as JSON strings holding their own
//! JSON text, and numbers are written as JSON strings. See
//! [`ListEncoding`] for the nested alternative.
//!
//! ```
//! use variant_foundation::Variant;
//! use variant_json::{JsonExt, parse_text};
//!
//! assert_eq!(parse_text("\"hello\""), Variant::symbol("hello"));
//! assert_eq!(Variant::list([Variant::symbol("x")]).to_json(), r#"["\"x\""]"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod config;
pub mod decode;
pub mod encode;
pub mod number;

pub use codec::{Codec, JsonExt};
pub use config::{JsonConfig, ListEncoding, NumberFormat};

use serde_json::Value;
use variant_foundation::{Result, Variant};

/// Decodes a JSON document, returning the empty-symbol sentinel if it is
/// malformed or has no variant form.
///
/// A top-level string becomes a [`Variant::Symbol`]; strings inside a
/// top-level array become [`Variant::String`].
#[must_use]
pub fn parse_text(text: &str) -> Variant {
    Codec::default().decode_or_sentinel(text)
}

/// Decodes a JSON document.
///
/// # Errors
///
/// Returns an error if `text` is not valid JSON, or if the document is an
/// object, a boolean or `null`.
pub fn try_parse_text(text: &str) -> Result<Variant> {
    Codec::default().decode(text)
}

/// Applies the array member rule: strings become [`Variant::String`],
/// everything else the sentinel.
#[must_use]
pub fn parse_element(value: &Value) -> Variant {
    Codec::default().decode_element(value)
}

/// Encodes a variant as JSON text. Callables become `null`.
#[must_use]
pub fn to_json(variant: &Variant) -> String {
    variant.to_json()
}

/// Encodes a variant as JSON text.
///
/// # Errors
///
/// Returns an error if the variant is, or contains, a callable.
pub fn try_to_json(variant: &Variant) -> Result<String> {
    variant.try_to_json()
}
