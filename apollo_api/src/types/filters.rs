//! Fixed people search filters.
//!
//! Every people search is narrowed to ground-level talent acquisition roles.

use serde::{Deserialize, Serialize};

/// Recruiting job titles sent as `person_titles[]` on every people search.
pub const TALENT_ACQUISITION_TITLES: [&str; 19] = [
    "Recruiter",
    "Technical Recruiter",
    "Corporate Recruiter",
    "Contract Recruiter",
    "University Recruiter",
    "Campus Recruiter",
    "Talent Acquisition Specialist",
    "Talent Acquisition Partner",
    "Talent Acquisition Recruiter",
    "Technical Sourcer",
    "Sourcer",
    "Recruiting Coordinator",
    "Staffing Recruiter",
    "HR Recruiter",
    "IT Recruiter",
    "Engineering Recruiter",
    "Healthcare Recruiter",
    "Sales Recruiter",
    "Full-Cycle Recruiter",
];

/// Provider-defined career level attached to a person record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    #[serde(rename = "entry")]
    Entry,

    #[serde(rename = "senior")]
    Senior,

    #[serde(rename = "associate")]
    Associate,

    #[serde(rename = "partner")]
    Partner,

    /// Some individual recruiters own small agencies.
    #[serde(rename = "owner")]
    Owner,
}

impl Seniority {
    /// Levels sent as `seniorities[]` on every people search, in wire order.
    pub const ALL: [Seniority; 5] = [
        Seniority::Entry,
        Seniority::Senior,
        Seniority::Associate,
        Seniority::Partner,
        Seniority::Owner,
    ];
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Seniority::Entry => "entry",
                Seniority::Senior => "senior",
                Seniority::Associate => "associate",
                Seniority::Partner => "partner",
                Seniority::Owner => "owner",
            }
        )
    }
}
