//! Qualified XML names and the property names the gateway answers for.

use std::borrow::Cow;

pub const DAV_NS: &str = "DAV:";
pub const CALDAV_NS: &str = "urn:ietf:params:xml:ns:caldav";
/// Apple CalendarServer extensions (`getctag`).
pub const CS_NS: &str = "http://calendarserver.org/ns/";

/// Namespace of a [`QName`].
///
/// The three namespaces declared on every multistatus root get their own
/// variant, so comparing names from parsed requests against the constants below
/// does not depend on how the client spelled its prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    Dav,
    CalDav,
    CalendarServer,
    Other(String),
}

impl Namespace {
    /// Classifies a namespace URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            DAV_NS => Self::Dav,
            CALDAV_NS => Self::CalDav,
            CS_NS => Self::CalendarServer,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Dav => DAV_NS,
            Self::CalDav => CALDAV_NS,
            Self::CalendarServer => CS_NS,
            Self::Other(uri) => uri,
        }
    }

    /// Prefix bound on the multistatus root, `None` for foreign namespaces.
    #[must_use]
    pub const fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::Dav => Some("D"),
            Self::CalDav => Some("C"),
            Self::CalendarServer => Some("CS"),
            Self::Other(_) => None,
        }
    }
}

impl From<&str> for Namespace {
    fn from(uri: &str) -> Self {
        Self::from_uri(uri)
    }
}

/// Namespace-qualified element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: Namespace,
    pub local_name: Cow<'static, str>,
}

impl QName {
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    const fn fixed(namespace: Namespace, local_name: &'static str) -> Self {
        Self {
            namespace,
            local_name: Cow::Borrowed(local_name),
        }
    }

    #[must_use]
    pub fn dav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Namespace::Dav, local_name)
    }

    #[must_use]
    pub fn caldav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Namespace::CalDav, local_name)
    }

    #[must_use]
    pub fn cs(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Namespace::CalendarServer, local_name)
    }

    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.uri()
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.uri(), self.local_name)
    }
}

pub mod dav_props {
    use super::{Namespace, QName};

    pub const RESOURCETYPE: QName = QName::fixed(Namespace::Dav, "resourcetype");
    pub const DISPLAYNAME: QName = QName::fixed(Namespace::Dav, "displayname");
    pub const GETCONTENTTYPE: QName = QName::fixed(Namespace::Dav, "getcontenttype");
    pub const GETCONTENTLENGTH: QName = QName::fixed(Namespace::Dav, "getcontentlength");
    pub const GETLASTMODIFIED: QName = QName::fixed(Namespace::Dav, "getlastmodified");
    pub const GETETAG: QName = QName::fixed(Namespace::Dav, "getetag");
    pub const CURRENT_USER_PRINCIPAL: QName =
        QName::fixed(Namespace::Dav, "current-user-principal");
    pub const PRINCIPAL_URL: QName = QName::fixed(Namespace::Dav, "principal-URL");
    pub const SUPPORTED_REPORT_SET: QName = QName::fixed(Namespace::Dav, "supported-report-set");
    pub const CURRENT_USER_PRIVILEGE_SET: QName =
        QName::fixed(Namespace::Dav, "current-user-privilege-set");
}

pub mod caldav_props {
    use super::{Namespace, QName};

    pub const CALENDAR_HOME_SET: QName = QName::fixed(Namespace::CalDav, "calendar-home-set");
    pub const CALENDAR_DESCRIPTION: QName =
        QName::fixed(Namespace::CalDav, "calendar-description");
    pub const SUPPORTED_CALENDAR_COMPONENT_SET: QName =
        QName::fixed(Namespace::CalDav, "supported-calendar-component-set");
    pub const CALENDAR_DATA: QName = QName::fixed(Namespace::CalDav, "calendar-data");
}

pub mod cs_props {
    use super::{Namespace, QName};

    pub const GETCTAG: QName = QName::fixed(Namespace::CalendarServer, "getctag");
}
