pub mod error;
pub mod service;
pub mod session;

pub use error::BrowseServiceError;
pub use service::{BrowseService, BrowseServiceApi};
pub use session::{BrowseSession, BrowseView};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::access::{AnnotatedResource, Visibility};
use crate::domain::query::QueryState;

/// Receives the composed result of a session whenever it changes
pub trait VisibleObserver: Send + Sync {
    fn on_visible_changed(&self, session_id: Uuid, visible: &[AnnotatedResource<'_>]);
}

/// Observer that writes a debug line per published change
pub struct TracingVisibleObserver;

impl VisibleObserver for TracingVisibleObserver {
    fn on_visible_changed(&self, session_id: Uuid, visible: &[AnnotatedResource<'_>]) {
        let gated = visible
            .iter()
            .filter(|a| a.visibility != Visibility::Visible)
            .count();
        tracing::debug!(
            session_id = %session_id,
            visible_count = visible.len(),
            gated_count = gated,
            "Visible results changed"
        );
    }
}

/// Partial query update; absent fields are left untouched.
/// `selected_category: null` clears the category filter, and
/// `toggle_sort_direction` flips whatever direction results from the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryUpdate {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default, deserialize_with = "present_field")]
    pub selected_category: Option<Option<String>>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<String>,
    #[serde(default)]
    pub view_mode: Option<String>,
    #[serde(default)]
    pub toggle_sort_direction: bool,
}

// Distinguishes an explicit `null` from a missing field
fn present_field<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Request body for POST /api/sessions/:id/search-input
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchInputRequest {
    pub text: String,
}

/// A resource as the consumer should render it
#[derive(Debug, Serialize)]
pub struct ResourceCardResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub tags: Vec<String>,
    /// Withheld while the resource is gated
    pub link: Option<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub date_added: DateTime<Utc>,
    pub visits: u64,
    pub clicks: u64,
    pub is_sponsored: bool,
    pub visibility: Visibility,
}

impl From<&AnnotatedResource<'_>> for ResourceCardResponse {
    fn from(annotated: &AnnotatedResource<'_>) -> Self {
        let resource = annotated.resource;
        Self {
            id: resource.id.clone(),
            title: resource.title.clone(),
            description: resource.description.clone(),
            source: resource.source.clone(),
            tags: resource.tags.clone(),
            link: annotated.link_for_consumer().map(str::to_string),
            category: resource.category.clone(),
            image_url: resource.image_url.clone(),
            rating: resource.rating,
            date_added: resource.date_added,
            visits: resource.visits.unwrap_or(0),
            clicks: resource.clicks.unwrap_or(0),
            is_sponsored: resource.is_sponsored_tier(),
            visibility: annotated.visibility,
        }
    }
}

/// Response for the browse session endpoints
#[derive(Debug, Serialize)]
pub struct BrowseViewResponse {
    pub session_id: Uuid,
    pub query: QueryState,
    pub items: Vec<ResourceCardResponse>,
    pub total: usize,
    pub visible_count: usize,
    pub has_more: bool,
    pub search_pending: bool,
    pub related_categories: Vec<String>,
}

impl BrowseViewResponse {
    pub fn from_view(session: &BrowseSession, view: &BrowseView<'_>) -> Self {
        Self {
            session_id: session.id(),
            query: session.query().clone(),
            items: view.items.iter().map(ResourceCardResponse::from).collect(),
            total: view.total,
            visible_count: view.items.len(),
            has_more: view.has_more,
            search_pending: session.search_pending(),
            related_categories: view.related_categories.clone(),
        }
    }
}
