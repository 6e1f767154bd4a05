use std::fmt::Display;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum TypeError {
    #[error(transparent)]
    QueryStringError(#[from] serde_qs::Error),

    #[error("Failed to serialize: {0}")]
    SerializeError(String),

    #[error("Failed to deserialize: {0}")]
    DeSerializeError(String),
}

impl TypeError {
    pub fn traced_serialize_error(err: impl Display) -> Self {
        let err = Self::SerializeError(err.to_string());
        error!("{}", err);
        err
    }

    pub fn traced_deserialize_error(err: impl Display) -> Self {
        let err = Self::DeSerializeError(err.to_string());
        error!("{}", err);
        err
    }
}
