//! HTTP client types for marketplace API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the marketplace API. It handles request and
//! response processing, retry logic, and `Content-Range` header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`ContentRange`]: Parsed `Content-Range` pagination header
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_sdk::{ApiKey, Endpoint, MarketplaceConfig};
//! use marketplace_sdk::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("ApiKey SU-000:secret").unwrap())
//!     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Create an HTTP client
//! let client = HttpClient::new(&config);
//!
//! // Build and send a request
//! let request = HttpRequest::builder(HttpMethod::Get, "products")
//!     .query("limit=10&offset=0")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using the `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with a fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`HttpRequest::builder`] with `.tries(n)` to enable retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ContentRange, HttpResponse};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
