use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::browse::{
    BrowseService, BrowseServiceApi, BrowseViewResponse, QueryUpdate, SearchInputRequest,
};
use crate::{error::AppResult, infrastructure::auth::RequestAccess};

pub struct SessionController {
    browse_service: Arc<BrowseService>,
}

impl SessionController {
    pub fn new(browse_service: Arc<BrowseService>) -> Self {
        Self { browse_service }
    }

    /// POST /api/sessions - Start browsing with optional initial query fields
    pub async fn create_session(
        State(controller): State<Arc<SessionController>>,
        Extension(access): Extension<RequestAccess>,
        Json(initial): Json<QueryUpdate>,
    ) -> AppResult<(StatusCode, Json<BrowseViewResponse>)> {
        let view = controller
            .browse_service
            .create_session(initial, access.context)
            .await?;
        Ok((StatusCode::CREATED, Json(view)))
    }

    /// GET /api/sessions/{id}
    pub async fn get_view(
        State(controller): State<Arc<SessionController>>,
        Extension(access): Extension<RequestAccess>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<BrowseViewResponse>> {
        let view = controller
            .browse_service
            .get_view(session_id, access.context)
            .await?;
        Ok(Json(view))
    }

    /// PATCH /api/sessions/{id}/query
    pub async fn update_query(
        State(controller): State<Arc<SessionController>>,
        Extension(access): Extension<RequestAccess>,
        Path(session_id): Path<Uuid>,
        Json(update): Json<QueryUpdate>,
    ) -> AppResult<Json<BrowseViewResponse>> {
        let view = controller
            .browse_service
            .update_query(session_id, update, access.context)
            .await?;
        Ok(Json(view))
    }

    /// POST /api/sessions/{id}/search-input - Debounced keystroke input
    pub async fn search_input(
        State(controller): State<Arc<SessionController>>,
        Extension(access): Extension<RequestAccess>,
        Path(session_id): Path<Uuid>,
        Json(request): Json<SearchInputRequest>,
    ) -> AppResult<Json<BrowseViewResponse>> {
        let view = controller
            .browse_service
            .search_input(session_id, request.text, access.context)
            .await?;
        Ok(Json(view))
    }

    /// POST /api/sessions/{id}/load-more
    pub async fn load_more(
        State(controller): State<Arc<SessionController>>,
        Extension(access): Extension<RequestAccess>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<BrowseViewResponse>> {
        let view = controller
            .browse_service
            .load_more(session_id, access.context)
            .await?;
        Ok(Json(view))
    }

    /// POST /api/sessions/{id}/reset
    pub async fn reset(
        State(controller): State<Arc<SessionController>>,
        Extension(access): Extension<RequestAccess>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<BrowseViewResponse>> {
        let view = controller
            .browse_service
            .reset(session_id, access.context)
            .await?;
        Ok(Json(view))
    }

    /// DELETE /api/sessions/{id}
    pub async fn end_session(
        State(controller): State<Arc<SessionController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.browse_service.end_session(session_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
