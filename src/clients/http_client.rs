//! HTTP client for marketplace API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the marketplace API with automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::MarketplaceConfig;

/// Fixed retry wait time in seconds when the API sends no `Retry-After`.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the marketplace API.
///
/// The client handles:
/// - URL construction from the configured endpoint
/// - Default headers including User-Agent and the `Authorization` API key
/// - Automatic retry logic for 429 and 5xx responses
/// - `Content-Range` and `Retry-After` header parsing
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
/// use marketplace_sdk::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = MarketplaceConfig::builder()
///     .api_key(ApiKey::new("ApiKey SU-000-000:abcdef").unwrap())
///     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI including any path prefix (e.g., `https://api.example.com/public/v1`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
    /// use marketplace_sdk::clients::HttpClient;
    ///
    /// let config = MarketplaceConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &MarketplaceConfig) -> Self {
        let base_uri = config.endpoint().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Marketplace API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.api_key().as_ref().to_string(),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the marketplace API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction, appending the raw query string as-is
    /// - Header merging
    /// - Response parsing
    /// - Retry logic for 429 and 5xx responses
    ///
    /// Non-2xx responses that are not retried come back as `Ok`; callers
    /// inspect [`HttpResponse::is_ok`] and map the status and body to their
    /// own error types.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Max retries exceeded (`MaxRetries`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "products")
    ///     .query("limit=10&offset=0&eq(status,active)")
    ///     .tries(3) // Enable retries
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL. The query string is pre-rendered because RQL
        // filter tokens must pass through unencoded.
        let mut url = format!("{}/{}", self.base_uri, request.path);
        if let Some(query) = &request.query {
            url.push('?');
            url.push_str(query);
        }

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Retry loop
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            // Build the reqwest request
            let mut req_builder = match request.http_method {
                crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
                crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
                crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
                crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
            };

            // Add headers
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Add body
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // Send request
            let res = req_builder.send().await?;

            // Parse response
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            // Parse body as JSON
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // For 5xx errors, return raw body as string value
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if let Some(reason) = response.headers.get("deprecation").and_then(|v| v.first()) {
                tracing::warn!(path = %request.path, %reason, "endpoint is deprecated");
            }

            // Check if response is OK
            if response.is_ok() {
                return Ok(response);
            }

            // Non-retryable failures are returned to the caller, which maps
            // them to domain errors with the full response body in hand.
            let should_retry = code == 429 || code >= 500;
            if !should_retry {
                return Ok(response);
            }

            // Check if we've exhausted retries
            if tries >= request.tries {
                if request.tries == 1 {
                    return Ok(response);
                }
                tracing::warn!(
                    code,
                    tries,
                    path = %request.path,
                    "giving up after exhausting retries"
                );
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: Self::serialize_error(&response),
                    error_reference: response.request_id().map(String::from),
                }));
            }

            tracing::debug!(
                code,
                tries,
                path = %request.path,
                "retrying request after non-successful response"
            );

            // Calculate retry delay
            let delay = Self::calculate_retry_delay(&response, code);
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 5xx: always use fixed delay (ignore Retry-After)
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes an error response body to a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(error_code) = response.body.get("error_code") {
            error_body.insert("error_code".to_string(), error_code.clone());
        }
        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(raw_body) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw_body.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
