//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with metadata like the `Content-Range` pagination window
//! and the request ID. The wrapper implements `Deref` for ergonomic access
//! to the inner data.
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, which means you can
//! use it like the inner type directly:
//!
//! ```rust,ignore
//! let response: ResourceResponse<Vec<Product>> = Product::list(&client, params).await?;
//!
//! // Iterate directly (Vec method via Deref)
//! for product in response.iter() {
//!     println!("{}", product.name);
//! }
//!
//! // Access length (Vec method via Deref)
//! println!("Count: {}", response.len());
//!
//! // Check for more pages
//! if let Some(offset) = response.content_range().and_then(|r| r.next_offset()) {
//!     // Fetch the next page starting at `offset`...
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ContentRange, HttpError, HttpResponse, HttpResponseError};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// This wrapper combines the resource data with metadata from the HTTP
/// response: the `Content-Range` pagination window and the request ID.
///
/// The struct implements `Deref<Target = T>` for transparent access to
/// the inner data. This allows calling methods on `T` directly through
/// the response wrapper.
///
/// # Type Parameters
///
/// * `T` - The type of data contained in the response. For single resources
///   this is the resource type (e.g., `Product`). For collections, this is
///   `Vec<ResourceType>` (e.g., `Vec<Product>`).
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::rest::ResourceResponse;
/// use marketplace_sdk::clients::ContentRange;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     ContentRange::parse("items 0-2/57"),
///     Some("req-123".to_string()),
/// );
///
/// // Access items via Deref
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
///
/// // Access metadata
/// assert_eq!(response.total_count(), Some(57));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The resource data.
    data: T,
    /// Pagination window from the `Content-Range` header.
    content_range: Option<ContentRange>,
    /// Request ID from the X-Request-Id header.
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        content_range: Option<ContentRange>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            content_range,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    ///
    /// Use this when you need ownership of the data and no longer
    /// need the response metadata.
    ///
    /// # Example
    ///
    /// ```rust
    /// use marketplace_sdk::rest::ResourceResponse;
    ///
    /// let response = ResourceResponse::new(vec![1, 2, 3], None, None);
    /// let data: Vec<i32> = response.into_inner();
    /// assert_eq!(data, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    ///
    /// Note: In most cases, you can use Deref coercion instead of
    /// calling this method explicitly.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    ///
    /// Note: In most cases, you can use `DerefMut` coercion instead of
    /// calling this method explicitly.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the pagination window, if the API sent one.
    #[must_use]
    pub const fn content_range(&self) -> Option<&ContentRange> {
        self.content_range.as_ref()
    }

    /// Returns the total number of items matching the request, if the
    /// API reported one in the `Content-Range` header.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.content_range.map(|r| r.count)
    }

    /// Returns `true` if there are more items beyond this page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.content_range
            .is_some_and(|r| r.next_offset().is_some())
    }

    /// Returns the request ID from the response headers.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type.
    ///
    /// Useful for transforming the response data while preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            content_range: self.content_range,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` from an HTTP response.
    ///
    /// Marketplace responses carry the resource as the top-level JSON
    /// document (an object for single resources, an array for
    /// collections), so the body is deserialized directly.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the body cannot be deserialized.
    pub fn from_http_response(response: HttpResponse) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let data: T = serde_json::from_value(response.body).map_err(|e| {
            ResourceError::Http(HttpError::Response(HttpResponseError {
                code: response.code,
                message: format!("Failed to deserialize response body: {e}"),
                error_reference: request_id.clone(),
            }))
        })?;

        Ok(Self {
            data,
            content_range: response.content_range,
            request_id,
        })
    }
}

/// Provides transparent access to the inner data.
///
/// This allows methods of `T` to be called directly on `ResourceResponse<T>`.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestProduct {
        id: String,
        name: String,
    }

    #[test]
    fn test_resource_response_stores_data_and_metadata() {
        let response = ResourceResponse::new(
            vec!["item1", "item2"],
            ContentRange::parse("items 0-1/42"),
            Some("req-123".to_string()),
        );

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.total_count(), Some(42));
        assert_eq!(response.request_id(), Some("req-123"));
    }

    #[test]
    fn test_deref_allows_direct_access_to_inner_data() {
        let response = ResourceResponse::new(vec!["item1", "item2", "item3"], None, None);

        // Vec methods via Deref
        assert_eq!(response.len(), 3);
        assert!(!response.is_empty());
        assert_eq!(response.first(), Some(&"item1"));
    }

    #[test]
    fn test_deref_mut_allows_mutable_access() {
        let mut response = ResourceResponse::new(vec!["item1", "item2"], None, None);

        response.push("item3");
        assert_eq!(response.len(), 3);

        response[0] = "modified";
        assert_eq!(response[0], "modified");
    }

    #[test]
    fn test_into_inner_returns_owned_data() {
        let response = ResourceResponse::new(vec![1, 2, 3], None, None);

        let data: Vec<i32> = response.into_inner();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_has_next_page_follows_content_range() {
        let first_page =
            ResourceResponse::new("data", ContentRange::parse("items 0-9/100"), None);
        assert!(first_page.has_next_page());

        let last_page =
            ResourceResponse::new("data", ContentRange::parse("items 90-99/100"), None);
        assert!(!last_page.has_next_page());

        let no_range: ResourceResponse<&str> = ResourceResponse::new("data", None, None);
        assert!(!no_range.has_next_page());
    }

    #[test]
    fn test_from_http_response_deserializes_single_resource() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-456".to_string()]);

        let body = json!({
            "id": "PRD-123",
            "name": "Test Product"
        });

        let http_response = HttpResponse::new(200, headers, body);

        let response: ResourceResponse<TestProduct> =
            ResourceResponse::from_http_response(http_response).unwrap();

        assert_eq!(response.id, "PRD-123");
        assert_eq!(response.name, "Test Product");
        assert_eq!(response.request_id(), Some("req-456"));
    }

    #[test]
    fn test_from_http_response_deserializes_collection_with_range() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-range".to_string(),
            vec!["items 0-1/17".to_string()],
        );

        let body = json!([
            {"id": "PRD-1", "name": "Product 1"},
            {"id": "PRD-2", "name": "Product 2"}
        ]);

        let http_response = HttpResponse::new(200, headers, body);

        let response: ResourceResponse<Vec<TestProduct>> =
            ResourceResponse::from_http_response(http_response).unwrap();

        assert_eq!(response.len(), 2);
        assert_eq!(response.total_count(), Some(17));
        assert!(response.has_next_page());
    }

    #[test]
    fn test_from_http_response_rejects_mismatched_body() {
        let body = json!({"unexpected": true});
        let http_response = HttpResponse::new(200, HashMap::new(), body);

        let result: Result<ResourceResponse<TestProduct>, _> =
            ResourceResponse::from_http_response(http_response);

        assert!(matches!(result, Err(ResourceError::Http(_))));
    }

    #[test]
    fn test_map_transforms_data_preserving_metadata() {
        let response = ResourceResponse::new(
            vec![1, 2, 3],
            ContentRange::parse("items 0-2/10"),
            Some("req-123".to_string()),
        );

        let mapped: ResourceResponse<Vec<String>> =
            response.map(|v| v.iter().map(|n| n.to_string()).collect());

        assert_eq!(*mapped, vec!["1", "2", "3"]);
        assert_eq!(mapped.total_count(), Some(10));
        assert_eq!(mapped.request_id(), Some("req-123"));
    }
}
