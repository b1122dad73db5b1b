//! Commerce resources: subscriptions and purchase requests.
//!
//! A [`Subscription`] is a customer's entitlement to a product; a
//! [`PurchaseRequest`] is the workflow object that creates or changes
//! one. Purchase requests carry two workflow actions, [`PurchaseRequest::approve`]
//! and [`PurchaseRequest::purchase`], invoked as empty POSTs on action
//! endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{ResourceError, ResourceResponse, RestResource};

/// The lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Provisioning has not completed yet.
    #[default]
    Processing,
    /// The subscription is active and billable.
    Active,
    /// The subscription is suspended.
    Suspended,
    /// The subscription has been terminated.
    Terminated,
}

/// A quantity of a product item within a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubscriptionItem {
    /// The product item ID, e.g. `PRD-123-456-0001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,

    /// The purchased quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
}

/// A customer's subscription to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Subscription {
    /// The unique identifier, e.g. `AS-111-222`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the subscribed product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// The ID of the customer account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// The lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,

    /// The purchased item quantities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SubscriptionItem>>,

    /// When the subscription was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for Subscription {
    type Id = String;

    const NAME: &'static str = "Subscription";
    const COLLECTION: &'static str = "subscriptions";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

/// The type of change a purchase request makes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Create a new subscription.
    #[default]
    Purchase,
    /// Change quantities on an existing subscription.
    Change,
    /// Terminate a subscription.
    Cancel,
}

/// The workflow status of a purchase request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Waiting for approval.
    #[default]
    Pending,
    /// Approved and being provisioned.
    Approved,
    /// Completed successfully.
    Done,
    /// Rejected or failed.
    Failed,
}

/// A purchase request: the workflow object that creates or changes a
/// subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PurchaseRequest {
    /// The unique identifier, e.g. `PR-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// What this request does.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,

    /// The workflow status.
    /// Read-only field, advanced through the action endpoints.
    #[serde(skip_serializing)]
    pub status: Option<RequestStatus>,

    /// The ID of the subscription this request targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// The requested item quantities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SubscriptionItem>>,

    /// When the request was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for PurchaseRequest {
    type Id = String;

    const NAME: &'static str = "PurchaseRequest";
    const COLLECTION: &'static str = "requests";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl PurchaseRequest {
    /// Approves a pending request via `requests/{id}/approve`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the request has no ID,
    /// or [`ResourceError::BadRequest`] if the request is not in a
    /// state that can be approved.
    pub async fn approve(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.action(client, "approve").await
    }

    /// Completes the purchase via `requests/{id}/purchase`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if the request has no ID,
    /// or [`ResourceError::BadRequest`] if the request has not been
    /// approved.
    pub async fn purchase(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.action(client, "purchase").await
    }

    /// Invokes a workflow action endpoint with an empty POST.
    async fn action(&self, client: &RestClient, action: &str) -> Result<Self, ResourceError> {
        let id = self
            .get_id()
            .ok_or(ResourceError::MissingId { resource: Self::NAME })?;

        let path = format!("{}/{}/{}", Self::COLLECTION, id, action);
        let response = client.post(&path, None, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id),
                response.request_id(),
            ));
        }

        let result: ResourceResponse<Self> = ResourceResponse::from_http_response(response)?;
        Ok(result.into_inner())
    }
}
