use crate::domain::resource::ResourceError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("resource not found")]
    NotFound,
    #[error("resource {0} already exists")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ResourceError> for CatalogServiceError {
    fn from(err: ResourceError) -> Self {
        CatalogServiceError::Invalid(err.to_string())
    }
}

impl From<CatalogServiceError> for AppError {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::Invalid(msg) => AppError::BadRequest(msg),
            CatalogServiceError::NotFound => AppError::NotFound("Resource not found".to_string()),
            CatalogServiceError::Conflict(id) => {
                AppError::Conflict(format!("Resource {} already exists", id))
            }
            CatalogServiceError::Dependency(msg) => AppError::ExternalService(msg),
            CatalogServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
