#![deny(missing_docs)]

//! # Domain Registry
//!
//! Maps each generated specification filename to the pair of envelope schema
//! names its success responses are wrapped with. The builtin table covers the
//! five platform domains; deployments can override it with a YAML file of the
//! same shape.

use crate::error::AppResult;
use indexmap::IndexMap;
use serde::Deserialize;

/// Prefix for local component schema references.
const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Filename -> envelope names for the five platform domains.
const BUILTIN_DOMAINS: [(&str, &str, &str); 5] = [
    (
        "decision-intelligence.yaml",
        "DecisionIntelligenceResponse",
        "DecisionIntelligenceListResponse",
    ),
    (
        "integration-interoperability.yaml",
        "IntegrationInteroperabilityResponse",
        "IntegrationInteroperabilityListResponse",
    ),
    (
        "knowledge-evidence.yaml",
        "KnowledgeEvidenceResponse",
        "KnowledgeEvidenceListResponse",
    ),
    (
        "patient-clinical-data.yaml",
        "PatientClinicalDataResponse",
        "PatientClinicalDataListResponse",
    ),
    (
        "workflow-care-pathways.yaml",
        "WorkflowCarePathwaysResponse",
        "WorkflowCarePathwaysListResponse",
    ),
];

/// Envelope schema names for one domain specification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeNames {
    /// Schema wrapping a single-entity payload.
    pub response: String,
    /// Schema wrapping a collection payload.
    pub list_response: String,
}

impl EnvelopeNames {
    /// Creates a names pair.
    pub fn new(response: &str, list_response: &str) -> Self {
        EnvelopeNames {
            response: response.to_string(),
            list_response: list_response.to_string(),
        }
    }

    /// Local `$ref` to the single-entity envelope schema.
    pub fn response_ref(&self) -> String {
        format!("{}{}", SCHEMA_REF_PREFIX, self.response)
    }

    /// Local `$ref` to the collection envelope schema.
    pub fn list_response_ref(&self) -> String {
        format!("{}{}", SCHEMA_REF_PREFIX, self.list_response)
    }
}

/// Ordered mapping from specification filename to envelope names.
///
/// Iteration order is the declaration order of the table (or the key order
/// of the override file), which fixes the batch processing order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DomainRegistry {
    entries: IndexMap<String, EnvelopeNames>,
}

impl DomainRegistry {
    /// The compiled-in table for the five platform domains.
    pub fn builtin() -> Self {
        let entries = BUILTIN_DOMAINS
            .iter()
            .map(|(filename, response, list_response)| {
                (
                    (*filename).to_string(),
                    EnvelopeNames::new(response, list_response),
                )
            })
            .collect();
        DomainRegistry { entries }
    }

    /// Loads a registry override from YAML text.
    ///
    /// The format mirrors the builtin table:
    ///
    /// ```yaml
    /// decision-intelligence.yaml:
    ///   response: DecisionIntelligenceResponse
    ///   listResponse: DecisionIntelligenceListResponse
    /// ```
    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        let registry = serde_yaml::from_str(yaml)?;
        Ok(registry)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvelopeNames)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up the envelope names for a filename.
    pub fn get(&self, filename: &str) -> Option<&EnvelopeNames> {
        self.entries.get(filename)
    }

    /// Whether a filename is registered.
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    /// Number of registered specifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
