//! Storage abstractions for service layer
//!
//! Whole-document JSON files: every read parses the full file and every
//! mutation rewrites it.

pub mod json_document;

pub use json_document::{load_or_default, save, JsonDocument};
