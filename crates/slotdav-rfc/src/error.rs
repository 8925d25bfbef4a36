use thiserror::Error;

use crate::rfc::dav::parse::ParseError;

/// Failures of the iCalendar codec and the DAV XML layer.
#[derive(Error, Debug)]
pub enum RfcError {
    /// Client-supplied content is unusable.
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("XML error: {0}")]
    XmlError(#[from] ParseError),

    /// A response document could not be written.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
