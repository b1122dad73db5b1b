//! Audit resources.
//!
//! Audit records are produced by the platform and never written through
//! the SDK, so [`AuditRecord`] carries the [`ReadOnlyResource`] marker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{ReadOnlyResource, RestResource};

/// An entry in the platform audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AuditRecord {
    /// The unique identifier, e.g. `AU-123-456`.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The kind of event recorded, e.g. `subscription.activated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// The ID of the object the event concerns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    /// The ID of the user that triggered the event, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,

    /// A human-readable description of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// When the event happened.
    #[serde(skip_serializing)]
    pub created: Option<DateTime<Utc>>,
}

impl RestResource for AuditRecord {
    type Id = String;

    const NAME: &'static str = "AuditRecord";
    const COLLECTION: &'static str = "audit/records";

    fn get_id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl ReadOnlyResource for AuditRecord {}
