//! Resource-specific error types for REST API operations.
//!
//! This module contains error types for REST resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound` and `BadRequest`.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **400/422**: [`ResourceError::BadRequest`] - The API rejected the request
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_sdk::rest::{RestResource, ResourceError};
//!
//! match Product::get(&client, "PRD-123").await {
//!     Ok(product) => println!("Found: {}", product.name),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(ResourceError::BadRequest { error_code, errors, .. }) => {
//!         println!("Rejected ({:?}): {:?}", error_code, errors);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// This enum provides semantic error types for resource operations,
/// mapping HTTP error codes to meaningful variants while preserving
/// the request ID for debugging.
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::rest::ResourceError;
///
/// // Not found error
/// let error = ResourceError::NotFound {
///     resource: "Product",
///     id: "PRD-123".to_string(),
/// };
/// assert!(error.to_string().contains("Product"));
/// assert!(error.to_string().contains("PRD-123"));
///
/// // Bad request error
/// let error = ResourceError::BadRequest {
///     error_code: Some("VAL_001".to_string()),
///     errors: vec!["name is required".to_string()],
///     request_id: Some("abc-123".to_string()),
/// };
/// assert!(error.to_string().contains("rejected"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    ///
    /// This error is returned when attempting to get, update, or delete
    /// a resource that doesn't exist.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Product", "Subscription").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// The API rejected the request (HTTP 400 or 422).
    ///
    /// Marketplace error payloads carry a machine-readable `error_code`
    /// and a list of human-readable messages.
    #[error("Request rejected ({}): {errors:?}", error_code.as_deref().unwrap_or("unknown"))]
    BadRequest {
        /// Machine-readable error code from the payload, e.g. `VAL_001`.
        error_code: Option<String>,
        /// Human-readable error messages from the payload.
        errors: Vec<String>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// An operation that requires an ID was invoked on a resource
    /// without one, such as updating a not-yet-created resource.
    #[error("{resource} has no id; it must be created before this operation")]
    MissingId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for errors that don't map to
    /// a specific resource error type.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    ///
    /// This variant wraps [`RestError`] for REST client errors.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Creates a `ResourceError` from an HTTP response status code.
    ///
    /// Maps HTTP status codes to semantic error variants:
    /// - 404 -> `NotFound`
    /// - 400 or 422 -> `BadRequest` (parsing `error_code`/`errors` from the body)
    /// - Other -> `Http`
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketplace_sdk::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = ResourceError::from_http_response(
    ///     404,
    ///     &json!({"error_code": "OBJ_001", "errors": ["Object not found."]}),
    ///     "Product",
    ///     Some("PRD-123"),
    ///     Some("req-123"),
    /// );
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            400 | 422 => {
                let (error_code, errors) = parse_error_payload(body);
                Self::BadRequest {
                    error_code,
                    errors,
                    request_id: request_id.map(ToString::to_string),
                }
            }
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::BadRequest { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            Self::Http(HttpError::MaxRetries(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Parses a marketplace error payload.
///
/// The API reports failures as:
/// ```json
/// {
///   "error_code": "VAL_001",
///   "errors": ["name is required", "status is not a valid choice"]
/// }
/// ```
///
/// Either field may be absent; a bare string under `errors` is also
/// accepted.
fn parse_error_payload(body: &serde_json::Value) -> (Option<String>, Vec<String>) {
    let error_code = body
        .get("error_code")
        .and_then(|v| v.as_str())
        .map(ToString::to_string);

    let errors = match body.get("errors") {
        Some(serde_json::Value::Array(arr)) => arr
            .iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect(),
        Some(serde_json::Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    };

    (error_code, errors)
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
