use thiserror::Error;

/// Errors raised by the users business layer.
#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status: {0}")]
    Status(u16),

    #[error("failed to parse users response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown search field: {0}")]
    UnknownSearchField(String),

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("unknown sort direction: {0}")]
    UnknownDirection(String),
}

pub type BusinessResult<T> = Result<T, BusinessError>;
