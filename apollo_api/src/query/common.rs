//! Shared query infrastructure.

use url::Url;

/// Trait implemented by the GET query builders. Serializes the builder's
/// parameters onto a request URL.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}
