use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticulateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid card: {0}")]
    Validation(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ArticulateError>;
