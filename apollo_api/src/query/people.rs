use url::Url;

use crate::types::{OrganizationID, Seniority, TALENT_ACQUISITION_TITLES};

use super::Query;

/// Parameters for `mixed_people/search`.
///
/// The title and seniority filters are not configurable: every query carries
/// the full [`TALENT_ACQUISITION_TITLES`] and [`Seniority::ALL`] lists.
#[derive(Clone, Debug)]
pub struct PeopleSearchQuery {
    pub organization_ids: Vec<OrganizationID>,
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
}

impl Default for PeopleSearchQuery {
    fn default() -> Self {
        Self {
            organization_ids: Vec::new(),
            page: 1,
        }
    }
}

impl PeopleSearchQuery {
    pub fn with_organization_id(mut self, organization_id: &str) -> Self {
        self.organization_ids.push(organization_id.to_string());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Query for PeopleSearchQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for organization_id in self.organization_ids.iter() {
                pairs.append_pair("organization_ids[]", organization_id);
            }
            pairs.append_pair("page", &self.page.to_string());
            for title in TALENT_ACQUISITION_TITLES.iter() {
                pairs.append_pair("person_titles[]", title);
            }
            for seniority in Seniority::ALL.iter() {
                pairs.append_pair("seniorities[]", &seniority.to_string());
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{PeopleSearchQuery, Query};

    fn pairs(query: &PeopleSearchQuery) -> Vec<(String, String)> {
        let url = Url::parse("https://example.com").unwrap();
        query
            .add_to_url(&url)
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn values(pairs: &[(String, String)], key: &str) -> Vec<String> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    #[test]
    fn defaults_to_first_page() {
        let pairs = pairs(&PeopleSearchQuery::default().with_organization_id("abc"));
        assert_eq!(values(&pairs, "page"), vec!["1"]);
        assert_eq!(values(&pairs, "organization_ids[]"), vec!["abc"]);
    }

    #[test]
    fn always_sends_fixed_filters() {
        let pairs = pairs(&PeopleSearchQuery::default().with_page(4));
        let titles = values(&pairs, "person_titles[]");
        assert_eq!(titles.len(), 19);
        assert_eq!(titles[6], "Talent Acquisition Specialist");
        assert_eq!(
            values(&pairs, "seniorities[]"),
            vec!["entry", "senior", "associate", "partner", "owner"]
        );
        assert_eq!(values(&pairs, "page"), vec!["4"]);
    }

    #[test]
    fn test_people_query_prefix() {
        let url = Url::parse("https://example.com").unwrap();
        let rendered = PeopleSearchQuery::default()
            .with_organization_id("5e66b6381e05b4008c8331b8")
            .with_page(2)
            .add_to_url(&url)
            .to_string();
        let prefix = rendered.split("&person_titles").next().unwrap().to_string();

        insta::assert_snapshot!(
            prefix,
            @"https://example.com/?organization_ids%5B%5D=5e66b6381e05b4008c8331b8&page=2"
        );
        assert!(rendered.contains("person_titles%5B%5D=Full-Cycle+Recruiter"));
        assert!(rendered.ends_with("seniorities%5B%5D=owner"));
    }
}
