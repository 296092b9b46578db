use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for ContentError {
    fn from(err: reqwest::Error) -> Self {
        ContentError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}
