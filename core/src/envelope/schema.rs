#![deny(missing_docs)]

//! # Response Schema Wrapping
//!
//! Classifies raw response schema nodes and wraps them in the domain
//! envelope composition. These functions are intentionally conservative:
//! they only rewrite the shapes they recognize and operate on raw
//! `serde_json::Value` trees so every other key round-trips untouched.

use crate::envelope::config::EnvelopeNames;
use serde_json::{json, Map, Value};

/// Shape of a success-response schema node, decided once before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaShape {
    /// Node already carries an `allOf` composition; wrapping is a no-op.
    Wrapped,
    /// Collection payload: `type: array`, or an `items` entry holding a `$ref`.
    List,
    /// Direct `$ref` to a component schema.
    Single,
    /// Anything else (inline objects, primitives, enums); left untouched.
    Other,
}

/// Classifies a response schema node.
///
/// The `allOf` check runs first so previously wrapped schemas short-circuit.
/// A node with `items.$ref` counts as a list even without `type: array`;
/// hand-written collection schemas frequently omit the `type` field.
pub fn classify(schema: &Value) -> SchemaShape {
    let Some(map) = schema.as_object() else {
        return SchemaShape::Other;
    };

    if map.contains_key("allOf") {
        return SchemaShape::Wrapped;
    }

    let typed_array = map.get("type").and_then(Value::as_str) == Some("array");
    let ref_items = map
        .get("items")
        .map_or(false, |items| items.get("$ref").is_some());
    if typed_array || ref_items {
        return SchemaShape::List;
    }

    if map.contains_key("$ref") {
        return SchemaShape::Single;
    }

    SchemaShape::Other
}

/// Wraps a response schema in the domain envelope.
///
/// Returns `None` when the input must stay as it is: already-wrapped nodes
/// (safe re-runs) and unrecognized shapes. The original `$ref`/`items`
/// payload is nested whole under the `data` property; wrapping only adds
/// structure around it.
pub fn wrap_response_schema(schema: &Value, names: &EnvelopeNames) -> Option<Value> {
    match classify(schema) {
        SchemaShape::Wrapped | SchemaShape::Other => None,
        SchemaShape::List => Some(envelope(names.list_response_ref(), list_data_schema(schema))),
        SchemaShape::Single => Some(envelope(names.response_ref(), schema.clone())),
    }
}

/// Builds the `data` schema for a list payload.
///
/// A typed array collapses to `{type, items}`; an items-only node is carried
/// verbatim.
fn list_data_schema(schema: &Value) -> Value {
    if schema.get("type").and_then(Value::as_str) != Some("array") {
        return schema.clone();
    }

    let mut data = Map::new();
    data.insert("type".to_string(), Value::String("array".to_string()));
    if let Some(items) = schema.get("items") {
        data.insert("items".to_string(), items.clone());
    }
    Value::Object(data)
}

fn envelope(envelope_ref: String, data: Value) -> Value {
    json!({
        "allOf": [
            { "$ref": envelope_ref },
            {
                "type": "object",
                "properties": { "data": data }
            }
        ]
    })
}
