use thiserror::Error;
use timepiece_http::error::HttpError;
use timepiece_types::error::TypeError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No {resource} record with id {id}")]
    NotFound { resource: String, id: i64 },

    #[error("Payload rejected by backend: {0}")]
    ValidationError(String),

    #[error(transparent)]
    HttpError(#[from] HttpError),

    #[error("Failed to decode response body: {0}")]
    DecodeError(#[from] reqwest::Error),

    #[error(transparent)]
    QueryStringError(#[from] TypeError),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Unknown(String),
}
