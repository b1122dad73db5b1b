//! Data-seeding support for end-to-end test fixtures.
//!
//! This module provides a small orchestration layer for creating chains
//! of dependent resources through the API: a [`Seeder`] creates resources
//! and records their server-assigned IDs in a [`SeedContext`], so later
//! steps can reference earlier ones by key.
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_sdk::rest::resources::catalog::Product;
//! use marketplace_sdk::seed::Seeder;
//!
//! let mut seeder = Seeder::new(client);
//!
//! let product = Product { name: Some("Fixture Product".to_string()), ..Default::default() };
//! seeder.create("product", &product).await?;
//!
//! // Later steps reference the recorded ID
//! let product_id = seeder.context().require("product")?;
//! ```

use thiserror::Error;

use crate::clients::RestClient;
use crate::rest::{ResourceError, RestResource};

/// Error type for seeding operations.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A step referenced a key that no earlier step recorded.
    #[error("No seeded id recorded under key '{key}'")]
    MissingKey {
        /// The key that was requested.
        key: String,
    },

    /// The API did not return an ID for a created resource.
    #[error("Created {resource} came back without an id")]
    MissingCreatedId {
        /// The type name of the resource.
        resource: &'static str,
    },

    /// A resource operation failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// An ordered key-to-ID store populated while seeding.
///
/// Keys keep their insertion order, so a fixture can be reported or torn
/// down in the order it was built.
#[derive(Debug, Clone, Default)]
pub struct SeedContext {
    entries: Vec<(String, String)>,
}

impl SeedContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an ID under the given key. A repeated key overwrites the
    /// earlier ID but keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, id: impl Into<String>) {
        let key = key.into();
        let id = id.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = id;
        } else {
            self.entries.push((key, id));
        }
    }

    /// Returns the ID recorded under the key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, id)| id.as_str())
    }

    /// Returns the ID recorded under the key.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::MissingKey`] if no step recorded the key.
    pub fn require(&self, key: &str) -> Result<&str, SeedError> {
        self.get(key).ok_or_else(|| SeedError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Returns the recorded entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Creates resources through the API and records their IDs.
#[derive(Debug)]
pub struct Seeder {
    client: RestClient,
    context: SeedContext,
}

impl Seeder {
    /// Creates a seeder with an empty context.
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            context: SeedContext::new(),
        }
    }

    /// Creates the resource through the API and records its
    /// server-assigned ID under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Resource`] if creation fails, or
    /// [`SeedError::MissingCreatedId`] if the API response carries no ID.
    pub async fn create<R: RestResource>(
        &mut self,
        key: impl Into<String>,
        resource: &R,
    ) -> Result<R, SeedError> {
        let key = key.into();
        let created = resource.create(&self.client).await?;

        let id = created
            .get_id()
            .ok_or(SeedError::MissingCreatedId { resource: R::NAME })?;

        tracing::debug!(key = %key, id = %id, resource = R::NAME, "seeded resource");
        self.context.insert(key, id.to_string());

        Ok(created)
    }

    /// Returns the context of recorded IDs.
    #[must_use]
    pub const fn context(&self) -> &SeedContext {
        &self.context
    }

    /// Returns a mutable reference to the context, for pre-populating
    /// IDs of resources that already exist.
    pub fn context_mut(&mut self) -> &mut SeedContext {
        &mut self.context
    }

    /// Consumes the seeder and returns its context.
    #[must_use]
    pub fn into_context(self) -> SeedContext {
        self.context
    }

    /// Returns the client the seeder creates resources with.
    #[must_use]
    pub const fn client(&self) -> &RestClient {
        &self.client
    }
}
