//! Error types for variant construction and conversion.
//!
//! Uses `thiserror` for ergonomic error definition.

use std::fmt;

use thiserror::Error;

use crate::tag::Tag;

/// The main error type for variant operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a JSON syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates an error for a document nested deeper than `limit`.
    #[must_use]
    pub fn too_deep(depth: usize, limit: usize) -> Self {
        Self::new(ErrorKind::TooDeep { depth, limit })
    }

    /// Creates an unsupported JSON shape error.
    #[must_use]
    pub fn unsupported_shape(shape: JsonShape) -> Self {
        Self::new(ErrorKind::UnsupportedShape(shape))
    }

    /// Creates an error for a variant that has no JSON form.
    #[must_use]
    pub fn not_serializable(tag: Tag) -> Self {
        Self::new(ErrorKind::NotSerializable(tag))
    }

    /// Creates an error for a tag that cannot be built without a payload.
    #[must_use]
    pub fn missing_payload(tag: Tag) -> Self {
        Self::new(ErrorKind::MissingPayload(tag))
    }

    /// Creates an error for a tag that does not carry text.
    #[must_use]
    pub fn not_textual(tag: Tag) -> Self {
        Self::new(ErrorKind::NotTextual(tag))
    }

    /// Creates an error for a list operation on a non-list.
    #[must_use]
    pub fn not_a_list(tag: Tag) -> Self {
        Self::new(ErrorKind::NotAList(tag))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The input was not syntactically valid JSON.
    #[error("JSON syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Description of the syntax error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// The document nests arrays or objects deeper than allowed.
    #[error("JSON nesting depth {depth} exceeds limit {limit}")]
    TooDeep {
        /// Deepest nesting found.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },

    /// The JSON document was valid but has no variant counterpart.
    #[error("unsupported JSON shape: {0}")]
    UnsupportedShape(JsonShape),

    /// The variant has no JSON form.
    #[error("{0} values cannot be serialized to JSON")]
    NotSerializable(Tag),

    /// The tag needs a payload that was not supplied.
    #[error("cannot construct a {0} from its tag alone")]
    MissingPayload(Tag),

    /// Text was supplied for a tag that does not carry text.
    #[error("{0} values do not carry text")]
    NotTextual(Tag),

    /// A list operation was applied to a non-list.
    #[error("expected a list, got {0}")]
    NotAList(Tag),

    /// Serialization failed inside the JSON library.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Shapes a JSON value can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JsonShape {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// A number.
    Number,
    /// A string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}
