//! Errors raised while reading PROPFIND and REPORT bodies.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// A request body that is not a usable DAV document. Always a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid encoding: {0}")]
    Encoding(String),
}

impl ParseError {
    #[must_use]
    pub const fn missing_element(name: &'static str) -> Self {
        Self::MissingElement(name)
    }

    #[must_use]
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }
}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<quick_xml::encoding::EncodingError> for ParseError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::Encoding(err.to_string())
    }
}
