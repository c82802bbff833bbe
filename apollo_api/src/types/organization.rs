//! Organization records returned by the company search endpoint.

use serde::{Deserialize, Serialize};

/// Apollo organization identifier (24-char hex string).
pub type OrganizationID = String;

/// One entry of the `organizations` list in a company search response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Organization {
    /// Organization identifier, used to scope people searches.
    pub id: OrganizationID,

    /// Display name of the organization.
    pub name: String,

    /// Every other field the API returned, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Organization {
    /// Case-insensitive exact comparison against a caller-supplied name.
    ///
    /// "Acme" matches "ACME" but not "Acme Corp" or "Acme, Inc.".
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
