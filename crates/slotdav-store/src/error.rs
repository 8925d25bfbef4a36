use thiserror::Error;

/// Scheduling store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] slotdav_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
