//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod validated_json;

pub use validated_json::{is_json_content_type, ValidatedJson};
