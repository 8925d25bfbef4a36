//! `DAV:href` values.

use std::borrow::Cow;
use std::fmt;

/// An absolute-path reference to a resource, as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Href(String);

/// Percent-encodes one path segment; only RFC 3986 unreserved characters stay literal.
#[must_use]
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

impl Href {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last non-empty path segment, percent-decoded.
    ///
    /// A segment whose escapes do not decode to UTF-8 is returned as written.
    #[must_use]
    pub fn last_segment(&self) -> Option<String> {
        let raw = self.0.split('/').rev().find(|s| !s.is_empty())?;
        Some(
            urlencoding::decode(raw)
                .map_or_else(|_| raw.to_owned(), Cow::into_owned),
        )
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Href {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
