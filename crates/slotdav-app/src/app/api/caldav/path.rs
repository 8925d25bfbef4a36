//! Resource states of the `/caldav/` tree.

use slotdav_core::constants::{CALENDARS_COMPONENT, PRINCIPALS_COMPONENT};

/// The resource a `/caldav/...` path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DavTarget {
    /// `/caldav/`
    Root,
    /// `/caldav/principals/<token id>/`
    Principal(String),
    /// `/caldav/calendars/`
    CalendarHome,
    /// `/caldav/calendars/<slug>/`
    Collection(String),
    /// `/caldav/calendars/<slug>/<name>`
    Event { slug: String, name: String },
    Unknown,
}

impl DavTarget {
    /// ## Summary
    /// Classifies the part of a path after `/caldav`.
    ///
    /// Empty segments are ignored, so trailing slashes do not matter.
    #[must_use]
    pub fn from_rest(rest: &str) -> Self {
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Root,
            [principals, id] if *principals == PRINCIPALS_COMPONENT => {
                Self::Principal((*id).to_string())
            }
            [calendars] if *calendars == CALENDARS_COMPONENT => Self::CalendarHome,
            [calendars, slug] if *calendars == CALENDARS_COMPONENT => {
                Self::Collection((*slug).to_string())
            }
            [calendars, slug, name] if *calendars == CALENDARS_COMPONENT => Self::Event {
                slug: (*slug).to_string(),
                name: (*name).to_string(),
            },
            _ => Self::Unknown,
        }
    }

    /// ## Summary
    /// Turns addresses of other tokens' principals and of other calendars into
    /// [`DavTarget::Unknown`].
    #[must_use]
    pub fn scoped(self, token_id: &str, calendar_slug: &str) -> Self {
        match self {
            Self::Principal(ref id) if id != token_id => Self::Unknown,
            Self::Collection(ref slug) | Self::Event { ref slug, .. } if slug != calendar_slug => {
                Self::Unknown
            }
            other => other,
        }
    }

    /// Methods a known resource answers, for `Allow` headers.
    #[must_use]
    pub const fn allow(&self) -> &'static str {
        match self {
            Self::Root | Self::Principal(_) | Self::CalendarHome | Self::Unknown => {
                "OPTIONS, PROPFIND"
            }
            Self::Collection(_) => "OPTIONS, PROPFIND, REPORT, GET, HEAD",
            Self::Event { .. } => "OPTIONS, GET, HEAD, PUT, DELETE, PROPFIND",
        }
    }
}
