//! Integration tests for Layer 1: JSON
//!
//! Tests for decoding, encoding, and codec configuration.

mod config;
mod decode;
