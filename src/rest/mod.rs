//! REST resource infrastructure for the marketplace API.
//!
//! This module provides the foundational infrastructure for REST resources:
//!
//! - **[`RestResource`] trait**: A standardized interface for CRUD operations
//! - **[`ReadOnlyResource`] marker trait**: Indicates resources that only support read operations
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper for ergonomic response handling
//! - **[`ListParams`]**: Paging, ordering, selection and RQL filtering for collections
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Overview
//!
//! This module is the foundation for REST resource implementations.
//! Individual resources (Product, Subscription, etc.) are implemented in
//! the [`resources`] submodule.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use marketplace_sdk::{ApiKey, Endpoint, MarketplaceConfig};
//! use marketplace_sdk::clients::RestClient;
//! use marketplace_sdk::rest::{ListParams, RestResource};
//! use marketplace_sdk::rest::resources::catalog::Product;
//! use marketplace_sdk::rql::RqlQuery;
//!
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("ApiKey SU-000:secret").unwrap())
//!     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
//!     .build()?;
//! let client = RestClient::new(&config);
//!
//! // Fetch a single product
//! let response = Product::get(&client, "PRD-123".to_string()).await?;
//! println!("Product: {}", response.name);  // Deref to Product
//!
//! // List products with an RQL filter
//! let params = ListParams::new()
//!     .limit(25)
//!     .filter(RqlQuery::field("status").eq("published")?);
//! let response = Product::list(&client, params.clone()).await?;
//! for product in response.iter() {
//!     println!("- {}", product.name);
//! }
//!
//! // Exhaust all pages
//! let everything = Product::list_all(&client, params.clone()).await?;
//!
//! // Count without fetching items
//! let total = Product::count(&client, params).await?;
//! println!("Total products: {}", total);
//! ```
//!
//! # Key Types
//!
//! - [`ResourceError`]: Error types for resource operations
//! - [`ResourceResponse`]: Response wrapper with Deref for transparent data access
//! - [`ListParams`]: Query parameters for list operations
//! - [`RestResource`]: Trait defining CRUD operations for resources
//! - [`ReadOnlyResource`]: Marker trait for read-only resources
//! - [`resources`]: Resource model implementations (e.g., Product, Subscription)

mod errors;
mod params;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use params::ListParams;
pub use resource::{ReadOnlyResource, RestResource};
pub use response::ResourceResponse;
