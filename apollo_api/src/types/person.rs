//! Person records returned by the people search endpoint.

use serde::{Deserialize, Serialize};

/// Apollo person identifier.
pub type PersonID = String;

/// One entry of the `people` list in a people search response.
///
/// Only the fields this crate looks at are typed; the rest of the record is
/// preserved in [`Person::other`] so callers see the raw response. Every
/// typed field is optional so no record the API returns is rejected.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonID>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Coarse career level, e.g. "senior" or "entry".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
