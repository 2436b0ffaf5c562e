use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::catalog::CatalogService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once a catalog snapshot with at least one resource is loaded
pub async fn health_ready(State(catalog): State<Arc<CatalogService>>) -> impl IntoResponse {
    let resource_count = catalog.len();
    if resource_count > 0 {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "catalog": "loaded",
                "resource_count": resource_count
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "catalog": "empty",
                "resource_count": 0
            })),
        )
    }
}
