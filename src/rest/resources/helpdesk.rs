//! Helpdesk resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::RestResource;

/// The priority of a helpdesk case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CasePriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// The lifecycle state of a helpdesk case.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseState {
    #[default]
    Pending,
    Inquiring,
    Resolved,
    Closed,
}

/// A support case raised against the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HelpdeskCase {
    /// The unique identifier, e.g. `CA-123-456`.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The subject line of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// The full description of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The case priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CasePriority>,

    /// The lifecycle state.
    /// Read-only field, managed by the helpdesk workflow.
    #[serde(skip_serializing)]
    pub state: Option<CaseState>,

    /// The ID of the account that raised the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// When the case was opened.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for HelpdeskCase {
    type Id = String;

    const NAME: &'static str = "HelpdeskCase";
    const COLLECTION: &'static str = "helpdesk/cases";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}
