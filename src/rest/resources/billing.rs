//! Billing resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// What a billing request charges for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    /// A single charge.
    Onetime,
    /// A monthly recurring charge.
    #[default]
    Monthly,
    /// A yearly recurring charge.
    Yearly,
}

/// A request to bill a subscription for a period of service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BillingRequest {
    /// The unique identifier, e.g. `BRV-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the subscription being billed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// The billing period this request covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BillingPeriod>,

    /// Amount to bill, as a decimal string such as `"19.99"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Start of the billed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_from: Option<DateTime<Utc>>,

    /// End of the billed period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_to: Option<DateTime<Utc>>,

    /// When the request was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for BillingRequest {
    type Id = String;

    const NAME: &'static str = "BillingRequest";
    const COLLECTION: &'static str = "billing/requests";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}
