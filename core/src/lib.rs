#![deny(missing_docs)]

//! # CDE Core
//!
//! Core library for the Clinical Decision Engine OpenAPI tooling.

/// Shared error types.
pub mod error;

/// YAML document parse/render edges.
pub mod document;

/// Response-envelope normalization.
pub mod envelope;

pub use document::{parse_document, render_document};
pub use envelope::{
    classify, missing_envelope_schemas, wrap_document, wrap_response_schema, DomainRegistry,
    EnvelopeNames, SchemaShape, SUCCESS_STATUS_CODES,
};
pub use error::{AppError, AppResult};
