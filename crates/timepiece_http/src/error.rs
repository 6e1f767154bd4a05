use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    NetworkError(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request rejected by backend: {0}")]
    ValidationError(String),

    #[error("Unexpected status {0} from backend")]
    StatusError(u16),

    #[error("Failed to update auth token")]
    UpdateAuthTokenError,

    #[error("Failed to parse JWT token from response: {0}")]
    ParseJwtTokenError(String),
}
