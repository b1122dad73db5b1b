//! REST API client for the marketplace Admin API.
//!
//! This module provides a client for making REST API calls to the
//! marketplace, wrapping the lower-level HTTP client with path
//! normalization and convenience methods for the common verbs.

use crate::clients::rest::errors::RestError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::MarketplaceConfig;
use serde_json::Value;

/// A client for interacting with the marketplace REST API.
///
/// This client provides methods for making REST API calls with automatic
/// path normalization, raw query string support, and retry behavior
/// inherited from the configuration.
///
/// # Example
///
/// ```rust,no_run
/// use marketplace_sdk::{ApiKey, Endpoint, MarketplaceConfig};
/// use marketplace_sdk::clients::rest::RestClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MarketplaceConfig::builder()
///     .api_key(ApiKey::new("my-api-key")?)
///     .endpoint(Endpoint::new("https://api.example.com/public/v1")?)
///     .build()?;
/// let client = RestClient::new(&config);
///
/// // Get a collection, with an RQL query string
/// let response = client.get("products", Some("eq(status,published)")).await?;
/// println!("Products: {}", response.body);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    http_client: HttpClient,
    tries: u32,
    default_limit: u32,
}

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// The client inherits the retry count from
    /// [`MarketplaceConfig::max_retries`] and the page size from
    /// [`MarketplaceConfig::default_limit`].
    #[must_use]
    pub fn new(config: &MarketplaceConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            tries: config.max_retries(),
            default_limit: config.default_limit(),
        }
    }

    /// Returns the page size used when a list request sets no limit.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Makes a GET request to the specified REST API path.
    ///
    /// The optional `query` is appended verbatim as the request query
    /// string, so an RQL expression renders without percent-mangling
    /// its parentheses.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn get(&self, path: &str, query: Option<&str>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, self.tries)
            .await
    }

    /// Makes a POST request to the specified REST API path.
    ///
    /// A body is optional: action endpoints such as
    /// `purchases/{id}/approve` are invoked with an empty POST.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn post(
        &self,
        path: &str,
        body: Option<Value>,
        query: Option<&str>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, body, query, self.tries)
            .await
    }

    /// Makes a PUT request to the specified REST API path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level failures (including a
    /// missing body, which PUT requires).
    pub async fn put(
        &self,
        path: &str,
        body: Option<Value>,
        query: Option<&str>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, body, query, self.tries)
            .await
    }

    /// Makes a DELETE request to the specified REST API path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn delete(&self, path: &str, query: Option<&str>) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query, self.tries)
            .await
    }

    /// Makes a GET request with an explicit retry count.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty, or
    /// [`RestError::Http`] for HTTP-level failures.
    pub async fn get_with_tries(
        &self,
        path: &str,
        query: Option<&str>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query, tries)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<&str>,
        tries: u32,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = Self::normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).tries(tries);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build().map_err(HttpError::from)?;

        Ok(self.http_client.request(request).await?)
    }

    /// Normalizes a REST API path by stripping leading and trailing
    /// slashes. An empty path is rejected since every marketplace
    /// endpoint lives under a named collection.
    fn normalize_path(path: &str) -> Result<String, RestError> {
        let normalized = path.trim_matches('/');

        if normalized.is_empty() {
            return Err(RestError::InvalidPath {
                path: path.to_string(),
            });
        }

        Ok(normalized.to_string())
    }
}
