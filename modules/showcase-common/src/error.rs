use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },
}

/// Project-form validation. Raised before any network call is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Order must be a whole number")]
    InvalidOrder(String),
}
