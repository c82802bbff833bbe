//! Request and response shapes for the bulk person match endpoint.

use serde::{Deserialize, Serialize};

use super::PersonID;

/// Body of a `people/bulk_match` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BulkMatchRequest {
    pub details: Vec<MatchDetail>,
}

/// A single person to resolve, identified by Apollo id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub id: PersonID,
}

impl BulkMatchRequest {
    /// Builds a request listing every id, preserving input order.
    pub fn from_ids<S: AsRef<str>>(person_ids: &[S]) -> Self {
        Self {
            details: person_ids
                .iter()
                .map(|id| MatchDetail {
                    id: id.as_ref().to_string(),
                })
                .collect(),
        }
    }
}

/// One entry of the `matches` list in a bulk match response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmailMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonID>,

    /// Absent or `null` when the provider has no email for this person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
