//! # Marketplace API Rust SDK
//!
//! A Rust SDK for a marketplace/commerce REST API, providing type-safe
//! configuration, an RQL filter-expression builder, and typed resource
//! operations over an async HTTP client.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MarketplaceConfig`] and [`MarketplaceConfigBuilder`]
//! - Validated newtypes for the API key and endpoint
//! - An RQL query builder ([`rql::RqlQuery`]) for server-side filtering
//! - A [`rest::RestResource`] trait giving every typed resource
//!   `get`/`list`/`list_all`/`create`/`update`/`delete`/`count`
//! - Async HTTP client with retry logic and `Content-Range` pagination
//! - A [`seed::Seeder`] for building chained end-to-end test fixtures
//!
//! ## Quick Start
//!
//! ```rust
//! use marketplace_sdk::{MarketplaceConfig, ApiKey, Endpoint};
//!
//! // Create configuration using the builder pattern
//! let config = MarketplaceConfig::builder()
//!     .api_key(ApiKey::new("ApiKey SU-000-000:abcdef").unwrap())
//!     .endpoint(Endpoint::new("https://api.example.com/public/v1").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Building RQL Filters
//!
//! Filters are composed as expression trees and rendered to the wire
//! format on demand:
//!
//! ```rust
//! use marketplace_sdk::rql::RqlQuery;
//!
//! # fn main() -> Result<(), marketplace_sdk::rql::RqlError> {
//! let filter = RqlQuery::field("status").eq("active")?
//!     & RqlQuery::field("product.id").one_of(vec!["PRD-1", "PRD-2"])?;
//!
//! assert_eq!(
//!     filter.to_string(),
//!     "and(eq(status,active),in(product.id,(PRD-1,PRD-2)))"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use marketplace_sdk::clients::RestClient;
//! use marketplace_sdk::rest::{ListParams, RestResource};
//! use marketplace_sdk::rest::resources::catalog::Product;
//! use marketplace_sdk::rql::RqlQuery;
//!
//! let client = RestClient::new(&config);
//!
//! // Fetch one product
//! let product = Product::get(&client, "PRD-123-456".to_string()).await?;
//! println!("{}", product.name.as_deref().unwrap_or(""));
//!
//! // List published products, 25 per page
//! let params = ListParams::new()
//!     .limit(25)
//!     .order("-created")
//!     .filter(RqlQuery::field("status").eq("published")?);
//! let page = Product::list(&client, params.clone()).await?;
//!
//! // Or exhaust every page
//! let all = Product::list_all(&client, params).await?;
//! ```
//!
//! ## Seeding Test Fixtures
//!
//! ```rust,ignore
//! use marketplace_sdk::seed::Seeder;
//! use marketplace_sdk::rest::resources::catalog::Product;
//!
//! let mut seeder = Seeder::new(client);
//! let product = Product { name: Some("Fixture".to_string()), ..Default::default() };
//! seeder.create("product", &product).await?;
//! let product_id = seeder.context().require("product")?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod rql;
pub mod seed;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, Endpoint, MarketplaceConfig, MarketplaceConfigBuilder, DEFAULT_LIMIT};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ContentRange, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient, RestError,
};

// Re-export the query builder and resource layer entry points
pub use rest::{ListParams, ResourceError, ResourceResponse, RestResource};
pub use rql::{RqlError, RqlQuery};
