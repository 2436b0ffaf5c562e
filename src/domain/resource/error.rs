#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ResourceError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date_added: {0}")]
    InvalidDate(String),
}
