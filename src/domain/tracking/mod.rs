use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::catalog::{CatalogService, CatalogServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The resource was shown to the user
    Impression,
    /// The user opened the resource's link
    Activation,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Impression => write!(f, "impression"),
            EventKind::Activation => write!(f, "activation"),
        }
    }
}

/// Request body for POST /api/resources/:id/events
#[derive(Debug, Serialize, Deserialize)]
pub struct EventRequest {
    pub kind: EventKind,
}

/// Hook for interaction events on a result. Implementations decide where the
/// event goes; the query engine never depends on them.
pub trait EventRecorder: Send + Sync {
    fn record_event(&self, resource_id: &str, kind: EventKind) -> Result<(), CatalogServiceError>;
}

/// Logs each event and bumps the matching in-memory counter
/// (impressions count as visits, activations as clicks).
pub struct CatalogEventRecorder {
    catalog: Arc<CatalogService>,
}

impl CatalogEventRecorder {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }
}

impl EventRecorder for CatalogEventRecorder {
    fn record_event(&self, resource_id: &str, kind: EventKind) -> Result<(), CatalogServiceError> {
        let total = match kind {
            EventKind::Impression => self.catalog.increment_visits(resource_id)?,
            EventKind::Activation => self.catalog.increment_clicks(resource_id)?,
        };

        tracing::info!(
            resource_id = %resource_id,
            event_kind = %kind,
            total,
            "Resource event recorded"
        );
        Ok(())
    }
}
