//! Core value type for interpreter data.

use std::fmt;

use crate::callable::{Environment, Lambda, NativeProc, Procedure};
use crate::error::Error;
use crate::tag::Tag;

/// Display form of values that have no textual representation.
pub const NOT_IMPLEMENTED: &str = "Not Implemented";

/// Core value type for interpreter data.
///
/// Exactly one case is active at a time. Lists own their elements, so a
/// value is always a tree. Conversions never mutate a value; they build a
/// new one.
///
/// The default value is an empty [`Variant::Symbol`], which the legacy
/// conversions also return when input cannot be represented.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    /// An identifier.
    Symbol(String),
    /// A numeric literal in its textual form.
    Number(String),
    /// A textual literal. Rendered without quotes.
    String(String),
    /// An ordered, heterogeneous sequence.
    List(Vec<Variant>),
    /// A host-provided native callable.
    Procedure(Procedure),
    /// A user-defined callable with a captured environment.
    Lambda(Lambda),
}

impl Default for Variant {
    fn default() -> Self {
        Self::Symbol(String::new())
    }
}

impl Variant {
    /// Creates a symbol.
    #[must_use]
    pub fn symbol(text: impl Into<String>) -> Self {
        Self::Symbol(text.into())
    }

    /// Creates a number from its textual form.
    ///
    /// The text is not validated.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::Number(text.into())
    }

    /// Creates a string.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// Creates an empty list.
    #[must_use]
    pub const fn empty_list() -> Self {
        Self::List(Vec::new())
    }

    /// Creates a list from elements, preserving their order.
    #[must_use]
    pub fn list(elements: impl IntoIterator<Item = Variant>) -> Self {
        Self::List(elements.into_iter().collect())
    }

    /// Wraps a native function pointer as a procedure.
    #[must_use]
    pub const fn procedure(func: NativeProc) -> Self {
        Self::Procedure(Procedure::new(func))
    }

    /// Creates a lambda from its form and captured environment.
    #[must_use]
    pub fn lambda(form: Vec<Variant>, env: Environment) -> Self {
        Self::Lambda(Lambda::new(form, env))
    }

    /// Creates an empty value of the given tag.
    ///
    /// Textual tags get empty text and `List` gets an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error for `Procedure` and `Lambda`, which cannot exist
    /// without a callable.
    pub fn from_tag(tag: Tag) -> Result<Self, Error> {
        match tag {
            Tag::List => Ok(Self::empty_list()),
            Tag::Procedure | Tag::Lambda => Err(Error::missing_payload(tag)),
            textual => Self::with_text(textual, String::new()),
        }
    }

    /// Creates a textual value of the given tag.
    ///
    /// # Errors
    ///
    /// Returns an error unless `tag` is `Symbol`, `Number` or `String`.
    pub fn with_text(tag: Tag, text: impl Into<String>) -> Result<Self, Error> {
        match tag {
            Tag::Symbol => Ok(Self::Symbol(text.into())),
            Tag::Number => Ok(Self::Number(text.into())),
            Tag::String => Ok(Self::String(text.into())),
            other => Err(Error::not_textual(other)),
        }
    }

    /// Returns the tag of the active case.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Symbol(_) => Tag::Symbol,
            Self::Number(_) => Tag::Number,
            Self::String(_) => Tag::String,
            Self::List(_) => Tag::List,
            Self::Procedure(_) => Tag::Procedure,
            Self::Lambda(_) => Tag::Lambda,
        }
    }

    /// Returns the raw text of a symbol, number or string.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) | Self::Number(s) | Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract the elements of a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Variant]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true if this is the empty symbol returned by failed
    /// conversions.
    ///
    /// A legitimately empty symbol is indistinguishable from a failure;
    /// use the `try_` conversions when the difference matters.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Symbol(s) if s.is_empty())
    }

    /// Returns true for procedures and lambdas.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        self.tag().is_callable()
    }

    /// Appends an element to a list.
    ///
    /// # Errors
    ///
    /// Returns an error if this value is not a list.
    pub fn push(&mut self, element: Variant) -> Result<(), Error> {
        match self {
            Self::List(items) => {
                items.push(element);
                Ok(())
            }
            other => Err(Error::not_a_list(other.tag())),
        }
    }

    /// Returns the display form of this value.
    ///
    /// Text is returned verbatim, lists as `[a, b]`, and callables as
    /// [`NOT_IMPLEMENTED`].
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => write!(f, "Symbol({s:?})"),
            Self::Number(s) => write!(f, "Number({s:?})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Procedure(p) => write!(f, "{p:?}"),
            Self::Lambda(l) => write!(f, "<lambda {:?}>", l.env),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) | Self::Number(s) | Self::String(s) => f.write_str(s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Procedure(_) | Self::Lambda(_) => f.write_str(NOT_IMPLEMENTED),
        }
    }
}

// Convenience From implementations

impl From<NativeProc> for Variant {
    fn from(func: NativeProc) -> Self {
        Self::procedure(func)
    }
}

impl From<Procedure> for Variant {
    fn from(p: Procedure) -> Self {
        Self::Procedure(p)
    }
}

impl From<Lambda> for Variant {
    fn from(l: Lambda) -> Self {
        Self::Lambda(l)
    }
}

impl From<Vec<Variant>> for Variant {
    fn from(items: Vec<Variant>) -> Self {
        Self::List(items)
    }
}

impl FromIterator<Variant> for Variant {
    fn from_iter<I: IntoIterator<Item = Variant>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::{Error as _, Serialize, SerializeSeq, Serializer};

    use super::Variant;

    /// Serializes text as strings and lists as nested sequences.
    ///
    /// Callables fail with a serializer error.
    impl Serialize for Variant {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Symbol(s) | Self::Number(s) | Self::String(s) => serializer.serialize_str(s),
                Self::List(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
                Self::Procedure(_) | Self::Lambda(_) => Err(S::Error::custom(format!(
                    "{} values cannot be serialized",
                    self.tag()
                ))),
            }
        }
    }
}
