#![deny(missing_docs)]

//! # Document Edges
//!
//! Parse and render helpers for the generated specification files. Documents
//! are held as raw `serde_json::Value` trees (with `preserve_order` enabled)
//! so that keys the transform never looks at round-trip untouched and path
//! iteration keeps the order the file was written in.

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Parses YAML text into the in-memory document tree.
///
/// The document root must be a mapping; anything else (a bare scalar, a
/// sequence) is rejected before the walker ever sees it.
pub fn parse_document(yaml_content: &str) -> AppResult<Value> {
    let doc: Value = serde_yaml::from_str(yaml_content)?;

    if !doc.is_object() {
        return Err(AppError::General(
            "Specification root must be a mapping".into(),
        ));
    }

    Ok(doc)
}

/// Renders the document tree back to YAML text.
///
/// `serde_yaml` emits block-style mappings and plain scalars, which is the
/// on-disk shape the generated specifications use.
pub fn render_document(doc: &Value) -> AppResult<String> {
    let rendered = serde_yaml::to_string(doc)?;
    Ok(rendered)
}
