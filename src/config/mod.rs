//! Configuration types for the marketplace SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with the marketplace.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MarketplaceConfig`]: The main configuration struct holding all SDK settings
//! - [`MarketplaceConfigBuilder`]: A builder for constructing [`MarketplaceConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Endpoint`]: A validated API endpoint URL
//!
//! # Example
//!
//! ```rust
//! use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
//!
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("ApiKey SU-000-000:abcdef").unwrap())
//!     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, Endpoint};

use crate::error::ConfigError;

/// Default page size used by list operations when none is given.
pub const DEFAULT_LIMIT: u32 = 100;

/// Configuration for the marketplace SDK.
///
/// This struct holds all configuration needed for SDK operations, including
/// the API key, endpoint and client behavior settings.
///
/// # Thread Safety
///
/// `MarketplaceConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
///
/// let config = MarketplaceConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
///     .default_limit(25)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.default_limit(), 25);
/// ```
#[derive(Clone, Debug)]
pub struct MarketplaceConfig {
    api_key: ApiKey,
    endpoint: Endpoint,
    default_limit: u32,
    max_retries: u32,
    user_agent_prefix: Option<String>,
}

impl MarketplaceConfig {
    /// Creates a new builder for constructing a `MarketplaceConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
    ///
    /// let config = MarketplaceConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> MarketplaceConfigBuilder {
        MarketplaceConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default page size for list operations.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Returns the number of attempts made for retryable responses.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MarketplaceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MarketplaceConfig>();
};

/// Builder for constructing [`MarketplaceConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `api_key` and `endpoint`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `default_limit`: [`DEFAULT_LIMIT`] (100)
/// - `max_retries`: 3
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
///
/// let config = MarketplaceConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
///     .max_retries(5)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MarketplaceConfigBuilder {
    api_key: Option<ApiKey>,
    endpoint: Option<Endpoint>,
    default_limit: Option<u32>,
    max_retries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl MarketplaceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the default page size for list operations.
    #[must_use]
    pub const fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Sets the number of attempts made for retryable (429 and 5xx)
    /// responses.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MarketplaceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `endpoint` are not set.
    pub fn build(self) -> Result<MarketplaceConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(MarketplaceConfig {
            api_key,
            endpoint,
            default_limit: self.default_limit.unwrap_or(DEFAULT_LIMIT),
            max_retries: self.max_retries.unwrap_or(3),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
