#![deny(missing_docs)]

//! # Document Walker
//!
//! Applies the envelope wrapper to every eligible success response of an
//! OpenAPI document, in place.

use crate::envelope::config::EnvelopeNames;
use crate::envelope::schema::wrap_response_schema;
use serde_json::Value;

/// Success status codes whose JSON response schemas get wrapped.
pub const SUCCESS_STATUS_CODES: [&str; 3] = ["200", "201", "204"];

/// Wraps every eligible success-response schema in `doc`, returning the
/// number of schemas replaced.
///
/// Path items are visited in document order. Path-item entries keyed
/// `parameters` or `x-*` (vendor extensions) are skipped, as are malformed
/// entries whose value is not a mapping. A document without a `paths`
/// mapping yields zero.
pub fn wrap_document(doc: &mut Value, names: &EnvelopeNames) -> usize {
    let Some(paths) = doc.get_mut("paths").and_then(Value::as_object_mut) else {
        return 0;
    };

    let mut wrapped = 0;
    for path_item in paths.values_mut() {
        let Some(entries) = path_item.as_object_mut() else {
            continue;
        };

        for (key, operation) in entries.iter_mut() {
            if key == "parameters" || key.starts_with("x-") {
                continue;
            }
            if !operation.is_object() {
                continue;
            }

            for status in SUCCESS_STATUS_CODES {
                let Some(slot) = response_schema_slot(operation, status) else {
                    continue;
                };
                if let Some(replacement) = wrap_response_schema(slot, names) {
                    *slot = replacement;
                    wrapped += 1;
                }
            }
        }
    }

    wrapped
}

/// Mutable handle on `responses.<status>.content."application/json".schema`.
fn response_schema_slot<'a>(operation: &'a mut Value, status: &str) -> Option<&'a mut Value> {
    operation
        .get_mut("responses")?
        .get_mut(status)?
        .get_mut("content")?
        .get_mut("application/json")?
        .get_mut("schema")
}

/// Envelope schema names that the document does not define under
/// `components.schemas`.
///
/// Wrapped responses reference these schemas, so a missing definition leaves
/// dangling `$ref`s in the rewritten file. Reported as a warning by the
/// driver, never a failure.
pub fn missing_envelope_schemas(doc: &Value, names: &EnvelopeNames) -> Vec<String> {
    let defined = doc
        .get("components")
        .and_then(|components| components.get("schemas"))
        .and_then(Value::as_object);

    let mut missing = Vec::new();
    for name in [&names.response, &names.list_response] {
        let present = defined.map_or(false, |schemas| schemas.contains_key(name.as_str()));
        if !present && !missing.contains(name) {
            missing.push(name.clone());
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn names() -> EnvelopeNames {
        EnvelopeNames::new("ApiResponse", "ApiListResponse")
    }

    fn json_response(schema: Value) -> Value {
        json!({
            "description": "ok",
            "content": {"application/json": {"schema": schema}}
        })
    }

    #[test]
    fn test_wrap_document_widgets() {
        let mut doc = json!({
            "openapi": "3.0.3",
            "paths": {
                "/widgets": {
                    "get": {
                        "responses": {
                            "200": json_response(json!({
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/Widget"}
                            }))
                        }
                    }
                }
            }
        });

        let count = wrap_document(&mut doc, &names());
        assert_eq!(count, 1);

        let schema =
            &doc["paths"]["/widgets"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"];
        assert_eq!(
            schema,
            &json!({
                "allOf": [
                    {"$ref": "#/components/schemas/ApiListResponse"},
                    {
                        "type": "object",
                        "properties": {
                            "data": {
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/Widget"}
                            }
                        }
                    }
                ]
            })
        );
    }

    #[test]
    fn test_wrap_document_all_success_codes() {
        let mut doc = json!({
            "paths": {
                "/widgets": {
                    "post": {
                        "responses": {
                            "201": json_response(json!({"$ref": "#/components/schemas/Widget"})),
                            "204": json_response(json!({"$ref": "#/components/schemas/Widget"}))
                        }
                    }
                }
            }
        });

        assert_eq!(wrap_document(&mut doc, &names()), 2);
    }

    #[test]
    fn test_wrap_document_ignores_error_statuses() {
        let mut doc = json!({
            "paths": {
                "/widgets": {
                    "get": {
                        "responses": {
                            "404": json_response(json!({"$ref": "#/components/schemas/Problem"}))
                        }
                    }
                }
            }
        });

        let before = doc.clone();
        assert_eq!(wrap_document(&mut doc, &names()), 0);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_wrap_document_skips_extensions_and_parameters() {
        let mut doc = json!({
            "paths": {
                "/widgets": {
                    "parameters": [{"name": "id", "in": "query"}],
                    "x-internal": {
                        "responses": {
                            "200": json_response(json!({"$ref": "#/components/schemas/Widget"}))
                        }
                    }
                }
            }
        });

        let before = doc.clone();
        assert_eq!(wrap_document(&mut doc, &names()), 0);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_wrap_document_skips_non_mapping_entries() {
        // Malformed documents may carry primitive values under verbs.
        let mut doc = json!({
            "paths": {
                "/widgets": {"get": "broken"},
                "/gadgets": "also broken"
            }
        });

        assert_eq!(wrap_document(&mut doc, &names()), 0);
    }

    #[test]
    fn test_wrap_document_missing_pieces() {
        assert_eq!(wrap_document(&mut json!({}), &names()), 0);
        assert_eq!(wrap_document(&mut json!({"paths": {}}), &names()), 0);

        // Response without a JSON schema is skipped.
        let mut doc = json!({
            "paths": {
                "/widgets": {
                    "get": {
                        "responses": {"200": {"description": "ok"}}
                    }
                }
            }
        });
        assert_eq!(wrap_document(&mut doc, &names()), 0);
    }

    #[test]
    fn test_wrap_document_unrecognized_schema_not_counted() {
        let mut doc = json!({
            "paths": {
                "/widgets": {
                    "get": {
                        "responses": {
                            "200": json_response(json!({"type": "string"}))
                        }
                    }
                }
            }
        });

        let before = doc.clone();
        assert_eq!(wrap_document(&mut doc, &names()), 0);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_wrap_document_second_pass_is_noop() {
        let mut doc = json!({
            "paths": {
                "/widgets": {
                    "get": {
                        "responses": {
                            "200": json_response(json!({"$ref": "#/components/schemas/Widget"}))
                        }
                    },
                    "post": {
                        "responses": {
                            "201": json_response(json!({
                                "type": "array",
                                "items": {"$ref": "#/components/schemas/Widget"}
                            }))
                        }
                    }
                }
            }
        });

        assert_eq!(wrap_document(&mut doc, &names()), 2);
        let after_first = doc.clone();
        assert_eq!(wrap_document(&mut doc, &names()), 0);
        assert_eq!(doc, after_first);
    }

    #[test]
    fn test_missing_envelope_schemas() {
        let doc = json!({
            "components": {
                "schemas": {"ApiResponse": {"type": "object"}}
            }
        });
        assert_eq!(
            missing_envelope_schemas(&doc, &names()),
            vec!["ApiListResponse".to_string()]
        );

        let empty = json!({});
        assert_eq!(
            missing_envelope_schemas(&empty, &names()),
            vec!["ApiResponse".to_string(), "ApiListResponse".to_string()]
        );

        let complete = json!({
            "components": {
                "schemas": {
                    "ApiResponse": {"type": "object"},
                    "ApiListResponse": {"type": "object"}
                }
            }
        });
        assert!(missing_envelope_schemas(&complete, &names()).is_empty());
    }
}
