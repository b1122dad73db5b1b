//! Query parameters for list operations.
//!
//! This module provides [`ListParams`], a builder for the query string of
//! collection requests: paging window, ordering, nested-object selection
//! and an RQL filter expression.

use crate::rql::RqlQuery;

/// Query parameters for listing a resource collection.
///
/// Rendered as `limit=<n>&offset=<n>&order=<csv>&select=<csv>&<rql>`,
/// omitting every part that was not set. The RQL filter is appended as
/// bare tokens, the way the marketplace API expects it.
///
/// # Example
///
/// ```rust
/// use marketplace_sdk::rest::ListParams;
/// use marketplace_sdk::rql::RqlQuery;
///
/// let filter = RqlQuery::field("status").eq("active").unwrap();
/// let params = ListParams::new()
///     .limit(25)
///     .offset(50)
///     .order("-created")
///     .filter(filter);
///
/// assert_eq!(
///     params.to_query_string(),
///     "limit=25&offset=50&order=-created&eq(status,active)"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListParams {
    limit: Option<u32>,
    offset: Option<u64>,
    order: Vec<String>,
    select: Vec<String>,
    filter: RqlQuery,
}

impl ListParams {
    /// Creates empty parameters; renders as an empty query string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the zero-based offset of the first item to return.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds an ordering field. Prefix with `-` for descending, e.g.
    /// `-created`. Repeated calls accumulate into a comma-separated list.
    #[must_use]
    pub fn order(mut self, field: impl Into<String>) -> Self {
        self.order.push(field.into());
        self
    }

    /// Adds a nested object to include in the response, e.g. `parameters`.
    /// Repeated calls accumulate into a comma-separated list.
    #[must_use]
    pub fn select(mut self, object: impl Into<String>) -> Self {
        self.select.push(object.into());
        self
    }

    /// Sets the RQL filter expression. An empty query is omitted from
    /// the rendered string.
    #[must_use]
    pub fn filter(mut self, filter: RqlQuery) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the configured page size, if any.
    #[must_use]
    pub const fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the configured offset, if any.
    #[must_use]
    pub const fn offset_value(&self) -> Option<u64> {
        self.offset
    }

    /// Renders the parameters as a query string without the leading `?`.
    ///
    /// Returns an empty string when nothing was set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();

        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        if !self.order.is_empty() {
            parts.push(format!("order={}", self.order.join(",")));
        }
        if !self.select.is_empty() {
            parts.push(format!("select={}", self.select.join(",")));
        }
        if !self.filter.is_empty() {
            parts.push(self.filter.to_string());
        }

        parts.join("&")
    }
}
