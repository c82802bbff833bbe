//! HTTP client for the Apollo v1 REST API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::{
    config::{resolve_api_key, validate_api_key},
    query::{CompanySearchQuery, PeopleSearchQuery, Query},
    types::{BulkMatchRequest, EmailMatch, Organization, Person},
    Error,
};

const DEFAULT_BASE_URL: &str = "https://api.apollo.io/v1";

/// Decoded JSON object returned by every endpoint.
type ResponseBody = Map<String, Value>;

/// HTTP client for the Apollo v1 REST API.
///
/// Holds one `reqwest::Client` for its whole lifetime with the
/// `Cache-Control`, `Content-Type` and `x-api-key` headers installed as
/// defaults, so every request carries them. Each public method performs a
/// single request and never retries.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to `https://api.apollo.io/v1`.
    base_url: String,
}

impl Client {
    /// Creates a client pointing at the production Apollo API.
    ///
    /// Fails with [`Error::Configuration`] when `api_key` is empty or
    /// whitespace only, or is not a valid HTTP header value.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        validate_api_key(&api_key)?;
        Url::parse(base_url).map_err(|e| {
            Error::Configuration(format!("Invalid base URL {}: {}", base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .default_headers(default_headers(&api_key)?)
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client with the key from `APOLLO_API_KEY` (or a `.env` file).
    pub fn from_env() -> Result<Self, Error> {
        Self::new(resolve_api_key(None)?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Configuration(format!("Invalid request URL {}: {}", raw, e))
        })
    }

    async fn get<Q: Query>(&self, path: &str, query: &Q) -> Result<ResponseBody, Error> {
        let url = query.add_to_url(&self.get_url(path)?);
        tracing::debug!("GET {}", url);
        self.execute(self.http.get(url)).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ResponseBody, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("POST {}", url);
        self.execute(self.http.post(url).json(body)).await
    }

    /// Sends the request and decodes a JSON object from a 2xx response.
    ///
    /// A non-success status is logged with its body before being returned as
    /// [`Error::ApiRequest`].
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ResponseBody, Error> {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "API request failed. Code: {}, Response: {}",
                status.as_u16(),
                truncate_body(&body)
            );
            return Err(Error::ApiRequest {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<ResponseBody>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Schema(format!("response is not a JSON object: {}", e))
        })
    }

    /// Returns the id of the first organization whose name equals `name`,
    /// ignoring case.
    ///
    /// Matching is exact after lowercasing: "Acme Corp" does not match "Acme".
    pub async fn get_company_id(&self, name: &str) -> Result<String, Error> {
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "company name must not be empty".to_string(),
            ));
        }

        let mut resp = self
            .get("mixed_companies/search", &CompanySearchQuery::new(name))
            .await?;
        let organizations: Vec<Organization> =
            take_field(&mut resp, "organizations")?.unwrap_or_default();

        organizations
            .into_iter()
            .find(|org| org.name_matches(name))
            .map(|org| org.id)
            .ok_or_else(|| Error::NotFound(format!("No company found for name: {}", name)))
    }

    /// Searches one organization for people holding talent acquisition roles.
    ///
    /// The title and seniority filters are fixed; see
    /// [`crate::types::TALENT_ACQUISITION_TITLES`] and
    /// [`crate::types::Seniority::ALL`]. `page` is 1-indexed (the first page
    /// is 1). `title_filter` is accepted but not applied to the request yet.
    pub async fn search_people_by_company_id(
        &self,
        company_id: &str,
        page: u32,
        title_filter: Option<&str>,
    ) -> Result<Vec<Person>, Error> {
        if page == 0 {
            return Err(Error::InvalidInput("page starts at 1".to_string()));
        }
        if let Some(filter) = title_filter {
            tracing::debug!("Ignoring title filter {:?}", filter);
        }

        let query = PeopleSearchQuery::default()
            .with_organization_id(company_id)
            .with_page(page);
        let mut resp = self.get("mixed_people/search", &query).await?;

        take_field(&mut resp, "people")?
            .ok_or_else(|| Error::Schema("response has no `people` field".to_string()))
    }

    /// Resolves person ids to email addresses in one bulk match request.
    ///
    /// Matches without an email are skipped, as are `null` entries the
    /// provider returns for ids it could not resolve, so the result can be
    /// shorter than `person_ids` and is not aligned with it by position. A
    /// `matches` list holding only `null` entries counts as empty.
    pub async fn get_emails<S: AsRef<str>>(&self, person_ids: &[S]) -> Result<Vec<String>, Error> {
        let body = BulkMatchRequest::from_ids(person_ids);
        let mut resp = self.post("people/bulk_match", &body).await?;

        let matches: Vec<EmailMatch> =
            take_field::<Vec<Option<EmailMatch>>>(&mut resp, "matches")?
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect();
        if matches.is_empty() {
            return Err(Error::NotFound("No emails found".to_string()));
        }

        Ok(matches.into_iter().filter_map(|m| m.email).collect())
    }
}

fn default_headers(api_key: &str) -> Result<HeaderMap, Error> {
    let mut api_key_value = HeaderValue::from_str(api_key).map_err(|e| {
        Error::Configuration(format!("API key is not a valid header value: {}", e))
    })?;
    api_key_value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("x-api-key"), api_key_value);
    Ok(headers)
}

/// Removes `field` from the response and decodes it. Absent and `null` both
/// yield `None`.
fn take_field<T: DeserializeOwned>(resp: &mut ResponseBody, field: &str) -> Result<Option<T>, Error> {
    match resp.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| Error::Schema(format!("malformed `{}` field: {}", field, e))),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
