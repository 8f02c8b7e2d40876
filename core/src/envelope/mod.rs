#![deny(missing_docs)]

//! # Envelope Normalization Module
//!
//! - **config**: domain registry of envelope schema names.
//! - **schema**: response schema classification and wrapping.
//! - **walker**: whole-document traversal applying the wrapper.

pub mod config;
pub mod schema;
pub mod walker;

pub use config::{DomainRegistry, EnvelopeNames};
pub use schema::{classify, wrap_response_schema, SchemaShape};
pub use walker::{missing_envelope_schemas, wrap_document, SUCCESS_STATUS_CODES};
