//! Multistatus response types.

use super::href::Href;
use super::property::DavProperty;

/// An HTTP status carried inside a multistatus document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status(pub u16);

impl Status {
    pub const OK: Self = Self(200);
    pub const BAD_REQUEST: Self = Self(400);
    pub const UNAUTHORIZED: Self = Self(401);
    pub const FORBIDDEN: Self = Self(403);
    pub const NOT_FOUND: Self = Self(404);
    pub const METHOD_NOT_ALLOWED: Self = Self(405);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);
    pub const NOT_IMPLEMENTED: Self = Self(501);

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Returns the canonical reason phrase.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            207 => "Multi-Status",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            _ => "Unknown",
        }
    }

    /// Returns the `DAV:status` text, e.g. `HTTP/1.1 404 Not Found`.
    #[must_use]
    pub fn status_line(self) -> String {
        format!("HTTP/1.1 {} {}", self.0, self.reason())
    }
}

/// Properties sharing one status within a response.
#[derive(Debug, Clone)]
pub struct Propstat {
    pub status: Status,
    pub properties: Vec<DavProperty>,
}

/// A single `DAV:response` element.
#[derive(Debug, Clone)]
pub struct PropstatResponse {
    pub href: Href,
    pub propstats: Vec<Propstat>,
    /// Response-level status; used instead of propstats for failed lookups.
    pub status: Option<Status>,
}

impl PropstatResponse {
    /// Creates a response where every property was found.
    #[must_use]
    pub fn ok(href: Href, found: Vec<DavProperty>) -> Self {
        Self {
            href,
            propstats: vec![Propstat {
                status: Status::OK,
                properties: found,
            }],
            status: None,
        }
    }

    /// Creates a response with a `200` propstat and, if non-empty, a `404` one.
    #[must_use]
    pub fn with_found_and_not_found(
        href: Href,
        found: Vec<DavProperty>,
        not_found: Vec<DavProperty>,
    ) -> Self {
        let mut response = Self::ok(href, found);
        if !not_found.is_empty() {
            response.propstats.push(Propstat {
                status: Status::NOT_FOUND,
                properties: not_found,
            });
        }
        response
    }

    /// Creates a response carrying only a status line.
    #[must_use]
    pub fn status(href: Href, status: Status) -> Self {
        Self {
            href,
            propstats: Vec::new(),
            status: Some(status),
        }
    }
}

/// A `DAV:multistatus` document.
#[derive(Debug, Clone, Default)]
pub struct Multistatus {
    pub responses: Vec<PropstatResponse>,
}

impl Multistatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&mut self, response: PropstatResponse) {
        self.responses.push(response);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
