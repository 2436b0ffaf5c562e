use resource_directory::controllers::{resources::ResourceController, sessions::SessionController};
use resource_directory::domain::browse::{BrowseService, TracingVisibleObserver, VisibleObserver};
use resource_directory::domain::catalog::{CatalogService, ResourceRepository};
use resource_directory::domain::tracking::CatalogEventRecorder;
use resource_directory::infrastructure::auth::AccessTokenValidator;
use resource_directory::infrastructure::config::{Config, LogFormat};
use resource_directory::infrastructure::http::{build_router, start_http_server};
use resource_directory::infrastructure::repositories::{
    JsonFileResourceRepository, StaticResourceRepository,
};
use resource_directory::infrastructure::sessions::SessionStore;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Resource Directory on {}:{}",
        config.host,
        config.port
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Pick the resource source
    let repository: Arc<dyn ResourceRepository> = match &config.resources_file {
        Some(path) => {
            tracing::info!(path = %path, "Loading resources from file");
            Arc::new(JsonFileResourceRepository::new(path))
        }
        None => {
            tracing::info!("Using built-in resource catalog");
            Arc::new(StaticResourceRepository::new())
        }
    };

    // 2. Load the first catalog snapshot
    let catalog = Arc::new(CatalogService::new(repository));
    catalog.refresh().await?;

    // 3. Instantiate services
    tracing::info!("Instantiating services...");
    let sessions = Arc::new(SessionStore::new(
        config.session_max_capacity,
        config.session_idle(),
    ));
    let observers: Vec<Arc<dyn VisibleObserver>> = vec![Arc::new(TracingVisibleObserver)];
    let browse_service = Arc::new(BrowseService::new(
        catalog.clone(),
        sessions,
        config.window_settings(),
        observers,
    ));
    let recorder = Arc::new(CatalogEventRecorder::new(catalog.clone()));

    let validator = match &config.jwt_secret {
        Some(secret) => Some(Arc::new(AccessTokenValidator::new(secret.clone()))),
        None => {
            tracing::warn!("JWT_SECRET not set; all requests will be served anonymously");
            None
        }
    };

    // 4. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let session_controller = Arc::new(SessionController::new(browse_service));
    let resource_controller = Arc::new(ResourceController::new(catalog.clone(), recorder));

    let app = build_router(catalog, validator, session_controller, resource_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "resource_directory=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
