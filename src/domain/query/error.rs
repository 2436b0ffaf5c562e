use crate::error::AppError;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QueryError {
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
