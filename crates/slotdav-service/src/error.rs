use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error(transparent)]
    RfcError(#[from] slotdav_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] slotdav_core::error::CoreError),
}

impl From<slotdav_store::StoreError> for ServiceError {
    fn from(err: slotdav_store::StoreError) -> Self {
        tracing::error!(error = %err, "Scheduling store failure");
        Self::UpstreamError(err.to_string())
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
