//! Configuration for JSON encoding and decoding.

/// How list elements are written to JSON.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ListEncoding {
    /// Each element is written as a JSON string holding that element's
    /// own JSON text, so `[x]` becomes `["\"x\""]`.
    #[default]
    Stringified,
    /// Elements are written as nested JSON values, so `[x]` becomes
    /// `["x"]`. Decoding in this mode also turns nested arrays and
    /// numbers inside arrays back into lists and numbers.
    ///
    /// Only the list shape survives a round trip. Symbols and numbers are
    /// written as JSON strings, so they come back as [`Variant::String`].
    ///
    /// [`Variant::String`]: variant_foundation::Variant::String
    Nested,
}

/// How decoded JSON numbers are turned into text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NumberFormat {
    /// Integers as integers, floats in their shortest round-trip form
    /// (`42`, `1.5`).
    #[default]
    Shortest,
    /// Fixed notation with six decimal places (`42.000000`).
    Fixed,
}

/// Default limit on array and object nesting in decoded documents.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Configuration for a [`Codec`](crate::Codec).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JsonConfig {
    /// Encoding used for list elements.
    pub list_encoding: ListEncoding,
    /// Text format for decoded numbers.
    pub number_format: NumberFormat,
    /// Deepest array/object nesting accepted when decoding.
    pub max_depth: usize,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            list_encoding: ListEncoding::Stringified,
            number_format: NumberFormat::Shortest,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl JsonConfig {
    /// Creates a configuration matching older stores: stringified list
    /// elements and fixed six-decimal numbers.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            list_encoding: ListEncoding::Stringified,
            number_format: NumberFormat::Fixed,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a configuration that writes lists as nested JSON.
    #[must_use]
    pub const fn nested() -> Self {
        Self {
            list_encoding: ListEncoding::Nested,
            number_format: NumberFormat::Shortest,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Builder method to set the list encoding.
    #[must_use]
    pub const fn with_list_encoding(mut self, encoding: ListEncoding) -> Self {
        self.list_encoding = encoding;
        self
    }

    /// Builder method to set the number format.
    #[must_use]
    pub const fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Builder method to set the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
