//! REST API client for the marketplace API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers convenient methods
//! for interacting with marketplace collections.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_sdk::{ApiKey, Endpoint, MarketplaceConfig};
//! use marketplace_sdk::clients::rest::RestClient;
//!
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("ApiKey SU-000:secret").unwrap())
//!     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//!
//! // Make requests; the query string is passed through verbatim so RQL
//! // filter expressions keep their parentheses.
//! let response = client.get("products", Some("eq(status,published)&limit=10")).await?;
//! println!("Products: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading and trailing slashes are stripped (`/products/` -> `products`)
//! and an empty path is rejected with [`RestError::InvalidPath`].
//!
//! # Retry Behavior
//!
//! Requests use the retry count from
//! [`MarketplaceConfig::max_retries`](crate::MarketplaceConfig::max_retries),
//! retrying 429 and 5xx responses. Use [`RestClient::get_with_tries`] to
//! override the count per call.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
