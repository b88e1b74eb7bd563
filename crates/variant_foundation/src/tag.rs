//! Discriminants for [`Variant`](crate::Variant).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The tag selecting which case of a [`Variant`](crate::Variant) is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tag {
    /// An identifier.
    Symbol,
    /// A numeric literal kept in textual form.
    Number,
    /// A textual literal.
    String,
    /// An ordered, heterogeneous sequence of variants.
    List,
    /// A host-provided native callable.
    Procedure,
    /// A user-defined callable with a captured environment.
    Lambda,
}

impl Tag {
    /// All tags, in declaration order.
    pub const ALL: [Tag; 6] = [
        Self::Symbol,
        Self::Number,
        Self::String,
        Self::List,
        Self::Procedure,
        Self::Lambda,
    ];

    /// Returns true if variants with this tag carry raw text.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Symbol | Self::Number | Self::String)
    }

    /// Returns true if variants with this tag are callables.
    ///
    /// Callables have no display or JSON form.
    #[must_use]
    pub const fn is_callable(self) -> bool {
        matches!(self, Self::Procedure | Self::Lambda)
    }

    /// Returns the lowercase name of this tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
            Self::Procedure => "procedure",
            Self::Lambda => "lambda",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
