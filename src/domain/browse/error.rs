use crate::domain::query::QueryError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum BrowseServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("browse session not found")]
    SessionNotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<QueryError> for BrowseServiceError {
    fn from(err: QueryError) -> Self {
        BrowseServiceError::Invalid(err.to_string())
    }
}

impl From<BrowseServiceError> for AppError {
    fn from(err: BrowseServiceError) -> Self {
        match err {
            BrowseServiceError::Invalid(msg) => AppError::BadRequest(msg),
            BrowseServiceError::SessionNotFound => {
                AppError::NotFound("Browse session not found".to_string())
            }
            BrowseServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
