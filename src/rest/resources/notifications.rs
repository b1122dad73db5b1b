//! Notification resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// A notification message sent to an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Message {
    /// The unique identifier, e.g. `NM-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the account the message is addressed to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// The subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The message body, plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Whether the message has been read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,

    /// When the message was sent.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for Message {
    type Id = String;

    const NAME: &'static str = "Message";
    const COLLECTION: &'static str = "notifications/messages";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}
