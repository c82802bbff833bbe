use url::Url;

use super::Query;

/// Parameters for `mixed_companies/search`.
#[derive(Clone, Debug)]
pub struct CompanySearchQuery {
    pub organization_name: String,
}

impl CompanySearchQuery {
    pub fn new(organization_name: &str) -> Self {
        Self {
            organization_name: organization_name.to_string(),
        }
    }
}

impl Query for CompanySearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("q_organization_name", &self.organization_name);
        url
    }
}
