use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::catalog::{CatalogService, CategorySummary};
use crate::domain::resource::{Resource, ResourceInput};
use crate::domain::tracking::{EventRecorder, EventRequest};
use crate::{error::AppResult, infrastructure::auth::RequestAccess};

pub struct ResourceController {
    catalog: Arc<CatalogService>,
    recorder: Arc<dyn EventRecorder>,
}

impl ResourceController {
    pub fn new(catalog: Arc<CatalogService>, recorder: Arc<dyn EventRecorder>) -> Self {
        Self { catalog, recorder }
    }

    /// GET /api/categories
    pub async fn list_categories(
        State(controller): State<Arc<ResourceController>>,
    ) -> Json<Vec<CategorySummary>> {
        Json(controller.catalog.categories())
    }

    /// POST /api/resources/{id}/events - Impression or activation of a result
    pub async fn record_event(
        State(controller): State<Arc<ResourceController>>,
        Path(resource_id): Path<String>,
        Json(request): Json<EventRequest>,
    ) -> AppResult<StatusCode> {
        controller
            .recorder
            .record_event(&resource_id, request.kind)?;
        Ok(StatusCode::ACCEPTED)
    }

    /// POST /api/resources - Admin only
    pub async fn add_resource(
        State(controller): State<Arc<ResourceController>>,
        Extension(access): Extension<RequestAccess>,
        Json(input): Json<ResourceInput>,
    ) -> AppResult<(StatusCode, Json<Resource>)> {
        access.require_admin()?;
        let resource = controller.catalog.add(input)?;
        Ok((StatusCode::CREATED, Json(resource)))
    }

    /// DELETE /api/resources/{id} - Admin only
    pub async fn remove_resource(
        State(controller): State<Arc<ResourceController>>,
        Extension(access): Extension<RequestAccess>,
        Path(resource_id): Path<String>,
    ) -> AppResult<StatusCode> {
        access.require_admin()?;
        controller.catalog.remove(&resource_id)?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// POST /api/catalog/refresh - Admin only
    pub async fn refresh_catalog(
        State(controller): State<Arc<ResourceController>>,
        Extension(access): Extension<RequestAccess>,
    ) -> AppResult<Json<Value>> {
        access.require_admin()?;
        let resource_count = controller.catalog.refresh().await?;
        Ok(Json(json!({ "resource_count": resource_count })))
    }
}
