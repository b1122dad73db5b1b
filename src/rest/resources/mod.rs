//! Typed resource models for the marketplace API.
//!
//! This module contains one submodule per API domain. Each resource is a
//! serde-derived struct implementing
//! [`RestResource`](crate::rest::RestResource), which gives it the full
//! set of operations (`get`, `list`, `list_all`, `create`, `update`,
//! `delete`, `count`).
//!
//! # Domains
//!
//! - [`accounts`]: partner accounts and their users
//! - [`catalog`]: products and their sellable items
//! - [`billing`]: billing requests
//! - [`commerce`]: subscriptions and purchase requests
//! - [`notifications`]: messages sent to accounts
//! - [`audit`]: the read-only platform audit trail
//! - [`helpdesk`]: support cases
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_sdk::rest::resources::catalog::Product;
//! use marketplace_sdk::rest::{ListParams, RestResource};
//! use marketplace_sdk::rql::RqlQuery;
//!
//! let published = RqlQuery::field("status").eq("published")?;
//! let products = Product::list(&client, ListParams::new().filter(published)).await?;
//! ```

pub mod accounts;
pub mod audit;
pub mod billing;
pub mod catalog;
pub mod commerce;
pub mod helpdesk;
pub mod notifications;
