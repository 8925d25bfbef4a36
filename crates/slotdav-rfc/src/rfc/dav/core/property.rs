//! Property name/value pairs placed inside a `<D:prop>`.

use super::namespace::{QName, dav_props};

/// One property of a resource. A missing value serializes as an empty element,
/// which is how `propname` answers and `404` propstats list names.
#[derive(Debug, Clone)]
pub struct DavProperty {
    pub name: QName,
    pub value: Option<PropertyValue>,
}

/// Shapes of property content the gateway emits.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Text(String),
    /// Wrapped in a single `<D:href>`.
    Href(String),
    Integer(i64),
    /// Child elements of `resourcetype`; empty for plain resources.
    ResourceType(Vec<QName>),
    /// iCalendar text of `calendar-data`, escaped like any text node.
    ContentData(String),
    /// `<C:comp name="..."/>` entries.
    SupportedComponents(Vec<String>),
    /// Report names, each wrapped in `supported-report/report`.
    SupportedReports(Vec<QName>),
    /// Privilege names, each wrapped in `privilege`.
    Privileges(Vec<QName>),
}

impl DavProperty {
    #[must_use]
    pub const fn with_value(name: QName, value: PropertyValue) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// A bare property name.
    #[must_use]
    pub const fn not_found(name: QName) -> Self {
        Self { name, value: None }
    }

    #[must_use]
    pub fn text(name: QName, value: impl Into<String>) -> Self {
        Self::with_value(name, PropertyValue::Text(value.into()))
    }

    #[must_use]
    pub fn href(name: QName, href: impl Into<String>) -> Self {
        Self::with_value(name, PropertyValue::Href(href.into()))
    }

    #[must_use]
    pub const fn integer(name: QName, value: i64) -> Self {
        Self::with_value(name, PropertyValue::Integer(value))
    }

    #[must_use]
    pub fn content(name: QName, data: impl Into<String>) -> Self {
        Self::with_value(name, PropertyValue::ContentData(data.into()))
    }

    /// `DAV:resourcetype` listing `types`; pass an empty list for a non-collection.
    #[must_use]
    pub const fn resourcetype(types: Vec<QName>) -> Self {
        Self::with_value(dav_props::RESOURCETYPE, PropertyValue::ResourceType(types))
    }

    #[must_use]
    pub fn name_only(&self) -> Self {
        Self::not_found(self.name.clone())
    }

    /// Text content, for `Text` and `ContentData` values.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            Some(PropertyValue::Text(text) | PropertyValue::ContentData(text)) => Some(text),
            _ => None,
        }
    }
}
