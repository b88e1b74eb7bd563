//! Configured entry points for JSON conversion.

use serde_json::Value;
use tracing::{debug, trace};
use variant_foundation::{Result, Variant};

use crate::config::JsonConfig;
use crate::{decode, encode};

/// Converts variants to and from JSON text under a [`JsonConfig`].
///
/// The `try_` style methods ([`Codec::decode`], [`Codec::encode`]) report
/// failures. The lossy methods never fail: decoding falls back to the
/// empty-symbol sentinel and encoding writes callables as `null`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    config: JsonConfig,
}

impl Codec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this codec.
    #[must_use]
    pub const fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Decodes a JSON document into a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not valid JSON, nests deeper than
    /// [`JsonConfig::max_depth`], or is an object, a boolean or `null`.
    pub fn decode(&self, text: &str) -> Result<Variant> {
        trace!(len = text.len(), "decoding variant");
        let value = decode::parse_json(text, self.config.max_depth)?;
        decode::decode_document(&value, &self.config)
    }

    /// Decodes a JSON document, returning the sentinel on failure.
    #[must_use]
    pub fn decode_or_sentinel(&self, text: &str) -> Variant {
        self.decode(text).unwrap_or_else(|err| {
            debug!(error = %err, "JSON document has no variant form; returning sentinel");
            Variant::default()
        })
    }

    /// Applies the array member rule to a single JSON value.
    #[must_use]
    pub fn decode_element(&self, value: &Value) -> Variant {
        decode::decode_element(value, &self.config)
    }

    /// Encodes a variant as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant is, or contains, a callable.
    pub fn encode(&self, variant: &Variant) -> Result<String> {
        trace!(tag = %variant.tag(), "encoding variant");
        encode::encode_strict(variant, self.config.list_encoding)
    }

    /// Encodes a variant as JSON text, writing callables as `null`.
    #[must_use]
    pub fn encode_lossy(&self, variant: &Variant) -> String {
        encode::encode_lossy(variant, self.config.list_encoding)
    }
}

/// JSON conversion methods on [`Variant`], using the default codec.
pub trait JsonExt {
    /// Encodes this value as JSON text. Callables become `null`.
    fn to_json(&self) -> String;

    /// Encodes this value as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is, or contains, a callable.
    fn try_to_json(&self) -> Result<String>;
}

impl JsonExt for Variant {
    fn to_json(&self) -> String {
        Codec::default().encode_lossy(self)
    }

    fn try_to_json(&self) -> Result<String> {
        Codec::default().encode(self)
    }
}
