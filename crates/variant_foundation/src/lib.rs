//! Core value type for a small LISP-like interpreter.
//!
//! This crate provides:
//! - [`Variant`] - The tagged value type (symbols, numbers, strings, lists, callables)
//! - [`Tag`] - The discriminant of a [`Variant`]
//! - [`Procedure`], [`Lambda`], [`Environment`] - Callable payloads
//! - [`Error`] - Error types shared by construction and conversion
//!
//! With the `serde` feature, [`Variant`] implements `serde::Serialize`,
//! writing lists as nested sequences.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod callable;
pub mod error;
pub mod tag;
pub mod value;

pub use callable::{Environment, Lambda, NativeProc, Procedure};
pub use error::{Error, ErrorKind, JsonShape};
pub use tag::Tag;
pub use value::{NOT_IMPLEMENTED, Variant};

/// Result type for variant operations.
pub type Result<T> = std::result::Result<T, Error>;
