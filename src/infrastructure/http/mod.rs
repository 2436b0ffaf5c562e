use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, resources::ResourceController, sessions::SessionController};
use crate::domain::catalog::CatalogService;
use crate::infrastructure::auth::{access_middleware, request_id_middleware, AccessTokenValidator};
use crate::infrastructure::config::Config;

/// Assemble every route with its controller state and the shared layers
pub fn build_router(
    catalog: Arc<CatalogService>,
    validator: Option<Arc<AccessTokenValidator>>,
    session_controller: Arc<SessionController>,
    resource_controller: Arc<ResourceController>,
) -> Router {
    // Browse sessions (anonymous or authenticated)
    let session_routes = Router::new()
        .route("/api/sessions", post(SessionController::create_session))
        .route(
            "/api/sessions/:sessionId",
            get(SessionController::get_view).delete(SessionController::end_session),
        )
        .route(
            "/api/sessions/:sessionId/query",
            patch(SessionController::update_query),
        )
        .route(
            "/api/sessions/:sessionId/search-input",
            post(SessionController::search_input),
        )
        .route(
            "/api/sessions/:sessionId/load-more",
            post(SessionController::load_more),
        )
        .route(
            "/api/sessions/:sessionId/reset",
            post(SessionController::reset),
        )
        .with_state(session_controller);

    // Catalog routes; mutations check for the admin claim in the handler
    let resource_routes = Router::new()
        .route("/api/categories", get(ResourceController::list_categories))
        .route("/api/resources", post(ResourceController::add_resource))
        .route(
            "/api/resources/:resourceId",
            axum::routing::delete(ResourceController::remove_resource),
        )
        .route(
            "/api/resources/:resourceId/events",
            post(ResourceController::record_event),
        )
        .route(
            "/api/catalog/refresh",
            post(ResourceController::refresh_catalog),
        )
        .with_state(resource_controller);

    let api_routes = session_routes
        .merge(resource_routes)
        .layer(middleware::from_fn_with_state(validator, access_middleware));

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(catalog)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
