use salvo::http::StatusCode;
use thiserror::Error;

use slotdav_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    StoreError(#[from] slotdav_store::StoreError),

    #[error(transparent)]
    RfcError(#[from] slotdav_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] slotdav_core::error::CoreError),
}

impl AppError {
    /// ## Summary
    /// Returns the HTTP status this error is answered with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => service_status(err),
            Self::RfcError(_) => StatusCode::BAD_REQUEST,
            Self::StoreError(_) | Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Maps a service error onto its HTTP status.
#[must_use]
pub const fn service_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
        ServiceError::AuthorizationError(_) => StatusCode::FORBIDDEN,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::ValidationError(_) | ServiceError::RfcError(_) => StatusCode::BAD_REQUEST,
        ServiceError::UpstreamError(_) | ServiceError::CoreError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
