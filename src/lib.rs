//! Variant - Tagged values for a small LISP-like interpreter
//!
//! This crate re-exports both layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: variant_json        — JSON encode/decode, codec configuration
//! Layer 0: variant_foundation  — Core types (Variant, Tag, Error)
//! ```

pub use variant_foundation as foundation;
pub use variant_json as json;
