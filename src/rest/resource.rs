//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a
//! standardized interface for interacting with marketplace REST API
//! resources. Resources that implement this trait gain `get()`, `list()`,
//! `list_all()`, `create()`, `update()`, `delete()`, and `count()` methods.
//!
//! # Implementing a Resource
//!
//! To implement a REST resource:
//!
//! 1. Define a struct with serde derives
//! 2. Implement the `RestResource` trait with the ID type and name constants
//! 3. The trait provides default implementations for all operations
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_sdk::rest::{RestResource, ResourceResponse, ResourceError};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Product {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<String>,
//!     pub name: String,
//! }
//!
//! impl RestResource for Product {
//!     type Id = String;
//!
//!     const NAME: &'static str = "Product";
//!     const COLLECTION: &'static str = "products";
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id.clone()
//!     }
//! }
//!
//! // Usage:
//! let product = Product::get(&client, "PRD-123".to_string()).await?;
//! let products = Product::list(&client, ListParams::new().limit(10)).await?;
//! ```

use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, HttpResponseError, RestClient};
use crate::rest::{ListParams, ResourceError, ResourceResponse};

/// A REST resource that can be fetched, created, updated, and deleted.
///
/// This trait provides a standardized interface for CRUD operations on
/// marketplace REST API resources. Implementors define the resource's
/// names and ID accessor, and get default implementations for all
/// operations.
///
/// Marketplace URLs are flat: a collection lives at `{COLLECTION}` and a
/// single resource at `{COLLECTION}/{id}`. Resources nested one level
/// under a parent (such as product items) are listed with
/// [`RestResource::list_with_parent`].
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier (usually `String`)
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name used in error messages (e.g., "Product")
/// - `COLLECTION`: The collection segment used in URLs (e.g., "products")
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The singular name of the resource (e.g., "Product").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// The collection segment used in URL paths (e.g., "products").
    const COLLECTION: &'static str;

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for new resources that haven't been created yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::get(&client, "PRD-123".to_string()).await?;
    /// println!("Found: {}", product.name);
    /// ```
    async fn get(
        client: &RestClient,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = format!("{}/{}", Self::COLLECTION, id);
        let response = client.get(&path, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        ResourceResponse::from_http_response(response)
    }

    /// Lists one page of resources matching the given parameters.
    ///
    /// When the parameters set no limit, the client's configured default
    /// page size is applied.
    /// The response metadata carries the `Content-Range` window; use
    /// [`ResourceResponse::has_next_page`] to check for more pages or
    /// [`RestResource::list_all`] to exhaust them.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadRequest`] if the API rejects the
    /// query, or [`ResourceError::Http`] for other failures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = ListParams::new()
    ///     .limit(25)
    ///     .filter(RqlQuery::field("status").eq("active")?);
    /// let response = Product::list(&client, params).await?;
    /// for product in response.iter() {
    ///     println!("Product: {}", product.name);
    /// }
    /// ```
    async fn list(
        client: &RestClient,
        params: ListParams,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_at(client, Self::COLLECTION, &params).await
    }

    /// Lists every resource matching the given parameters, following the
    /// `Content-Range` window across pages.
    ///
    /// The `limit` of `params` is used as the page size; the offset
    /// advances until the reported total is reached. A response without
    /// a `Content-Range` header, or one whose window does not advance
    /// past the current offset, ends the loop after its page.
    ///
    /// # Errors
    ///
    /// Propagates the first error from any page request.
    async fn list_all(client: &RestClient, params: ListParams) -> Result<Vec<Self>, ResourceError> {
        let mut all = Vec::new();
        let mut offset = params.offset_value().unwrap_or(0);

        loop {
            let page_params = params.clone().offset(offset);
            let response = Self::list_at(client, Self::COLLECTION, &page_params).await?;
            let next = response.content_range().and_then(|r| r.next_offset());

            all.extend(response.into_inner());

            match next {
                // A window that does not move past the current offset
                // would fetch the same page again; stop instead.
                Some(next_offset) if next_offset > offset => offset = next_offset,
                _ => break,
            }
        }

        Ok(all)
    }

    /// Lists resources nested under a parent resource, e.g. the items of
    /// a product at `products/{product_id}/items`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadRequest`] if the API rejects the
    /// query, or [`ResourceError::Http`] for other failures.
    async fn list_with_parent<ParentId: Display + Send + Sync>(
        client: &RestClient,
        parent_collection: &str,
        parent_id: ParentId,
        params: ListParams,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let path = format!("{parent_collection}/{parent_id}/{}", Self::COLLECTION);
        Self::list_at(client, &path, &params).await
    }

    /// Creates the resource (POST).
    ///
    /// The resource is serialized as a bare JSON object; server-generated
    /// fields (such as the ID) are populated in the returned value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadRequest`] if the API rejects the
    /// payload.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product { id: None, name: "New Product".to_string() };
    /// let created = product.create(&client).await?;
    /// println!("Created with id {:?}", created.id);
    /// ```
    async fn create(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let body = serialize_body(self)?;
        let response = client.post(Self::COLLECTION, Some(body), None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        let result: ResourceResponse<Self> = ResourceResponse::from_http_response(response)?;
        Ok(result.into_inner())
    }

    /// Updates the resource (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no ID,
    /// [`ResourceError::NotFound`] if it no longer exists, or
    /// [`ResourceError::BadRequest`] if the API rejects the payload.
    async fn update(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self
            .get_id()
            .ok_or(ResourceError::MissingId { resource: Self::NAME })?;

        let path = format!("{}/{}", Self::COLLECTION, id);
        let body = serialize_body(self)?;
        let response = client.put(&path, Some(body), None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        let result: ResourceResponse<Self> = ResourceResponse::from_http_response(response)?;
        Ok(result.into_inner())
    }

    /// Deletes the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the resource has no ID,
    /// or [`ResourceError::NotFound`] if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::get(&client, "PRD-123".to_string()).await?.into_inner();
    /// product.delete(&client).await?;
    /// ```
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self
            .get_id()
            .ok_or(ResourceError::MissingId { resource: Self::NAME })?;

        let path = format!("{}/{}", Self::COLLECTION, id);
        let response = client.delete(&path, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        Ok(())
    }

    /// Counts resources matching the given parameters.
    ///
    /// Implemented as a zero-item page request: the API reports the
    /// total in the `Content-Range` header without shipping any items.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the response carries no
    /// `Content-Range` header.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let active = RqlQuery::field("status").eq("active")?;
    /// let count = Product::count(&client, ListParams::new().filter(active)).await?;
    /// println!("Active products: {}", count);
    /// ```
    async fn count(client: &RestClient, params: ListParams) -> Result<u64, ResourceError> {
        let query = params.limit(0).offset(0).to_query_string();
        let response = client.get(Self::COLLECTION, Some(query.as_str())).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        let range = response.content_range.ok_or_else(|| {
            ResourceError::Http(HttpError::Response(HttpResponseError {
                code: response.code,
                message: "Missing Content-Range header in count response".to_string(),
                error_reference: response.request_id().map(ToString::to_string),
            }))
        })?;

        Ok(range.count)
    }

    /// Fetches one page of a collection at an explicit path.
    ///
    /// Applies the client's configured page size when the parameters
    /// carry no limit.
    async fn list_at(
        client: &RestClient,
        path: &str,
        params: &ListParams,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let params = if params.limit_value().is_none() {
            params.clone().limit(client.default_limit())
        } else {
            params.clone()
        };
        let query = params.to_query_string();
        let query = if query.is_empty() {
            None
        } else {
            Some(query.as_str())
        };

        let response = client.get(path, query).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        ResourceResponse::from_http_response(response)
    }
}

/// Marker trait for resources the API never mutates through the SDK,
/// such as audit records. The marker documents intent; read-only
/// resources simply never call the write operations.
pub trait ReadOnlyResource: RestResource {}

/// Serializes a resource to a bare JSON body.
fn serialize_body<T: Serialize>(resource: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(resource).map_err(|e| {
        ResourceError::Http(HttpError::Response(HttpResponseError {
            code: 400,
            message: format!("Failed to serialize resource: {e}"),
            error_reference: None,
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockProduct {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<String>,
    }

    impl RestResource for MockProduct {
        type Id = String;

        const NAME: &'static str = "Product";
        const COLLECTION: &'static str = "products";

        fn get_id(&self) -> Option<Self::Id> {
            self.id.clone()
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockAuditRecord {
        id: String,
        summary: String,
    }

    impl RestResource for MockAuditRecord {
        type Id = String;

        const NAME: &'static str = "AuditRecord";
        const COLLECTION: &'static str = "audit/records";

        fn get_id(&self) -> Option<Self::Id> {
            Some(self.id.clone())
        }
    }

    impl ReadOnlyResource for MockAuditRecord {}

    #[test]
    fn test_resource_defines_name_and_collection() {
        assert_eq!(MockProduct::NAME, "Product");
        assert_eq!(MockProduct::COLLECTION, "products");
    }

    #[test]
    fn test_get_id_returns_none_for_new_resource() {
        let product = MockProduct {
            id: None,
            name: "New".to_string(),
            status: None,
        };
        assert!(product.get_id().is_none());
    }

    #[test]
    fn test_get_id_returns_some_for_existing_resource() {
        let product = MockProduct {
            id: Some("PRD-123".to_string()),
            name: "Existing".to_string(),
            status: None,
        };
        assert_eq!(product.get_id(), Some("PRD-123".to_string()));
    }

    #[test]
    fn test_serialize_body_produces_bare_json() {
        let product = MockProduct {
            id: None,
            name: "Test".to_string(),
            status: Some("draft".to_string()),
        };

        let body = serialize_body(&product).unwrap();
        assert_eq!(body, json!({"name": "Test", "status": "draft"}));
    }

    #[test]
    fn test_serialize_body_skips_none_fields() {
        let product = MockProduct {
            id: None,
            name: "Test".to_string(),
            status: None,
        };

        let body = serialize_body(&product).unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("status").is_none());
    }

    #[test]
    fn test_read_only_marker_applies() {
        fn assert_read_only<T: ReadOnlyResource>() {}
        assert_read_only::<MockAuditRecord>();
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockProduct>();
        assert_trait_bounds::<MockAuditRecord>();
    }
}
