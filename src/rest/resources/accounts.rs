//! Account and user resources.
//!
//! This module provides the resources of the accounts domain: the
//! [`Account`] a partner operates under and the [`User`] members that
//! belong to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// The type of a marketplace account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// A vendor account that publishes products.
    #[default]
    Vendor,
    /// A provider account that sells products to customers.
    Provider,
}

/// A partner account in the marketplace.
///
/// Accounts are the top-level tenant: products, subscriptions and
/// requests all belong to one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Account {
    /// The unique identifier, e.g. `VA-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The display name of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether this is a vendor or provider account.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,

    /// The ISO 3166 country code of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Contact e-mail for the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the account was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for Account {
    type Id = String;

    const NAME: &'static str = "Account";
    const COLLECTION: &'static str = "accounts";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

/// A user belonging to an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    /// The unique identifier, e.g. `UR-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The user's full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The user's e-mail address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the user is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// The ID of the account this user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl RestResource for User {
    type Id = String;

    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "users";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}
