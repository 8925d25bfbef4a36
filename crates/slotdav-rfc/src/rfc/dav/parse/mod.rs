//! Request body parsing for PROPFIND and REPORT, built on `quick-xml` pull events.

mod error;
pub mod propfind;
pub mod report;

pub use error::{ParseError, ParseResult};
pub use propfind::parse_propfind;
pub use report::parse_report;

use quick_xml::events::BytesStart;

use crate::rfc::dav::core::{DAV_NS, Namespace, QName};

/// Prefix bindings seen so far in a document.
///
/// Bindings are never popped; a later declaration of the same prefix shadows
/// the earlier one. Request bodies are small and clients do not rebind prefixes.
#[derive(Debug, Default)]
pub(crate) struct Prefixes {
    bindings: Vec<(String, String)>,
}

impl Prefixes {
    /// Records the `xmlns` and `xmlns:*` attributes of `element`.
    pub(crate) fn declare(&mut self, element: &BytesStart<'_>) -> ParseResult<()> {
        for attr in element.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let prefix = match key.strip_prefix("xmlns") {
                Some("") => "",
                Some(rest) => match rest.strip_prefix(':') {
                    Some(prefix) => prefix,
                    None => continue,
                },
                None => continue,
            };
            let uri = std::str::from_utf8(&attr.value)?;
            self.bindings.push((prefix.to_owned(), uri.to_owned()));
        }
        Ok(())
    }

    /// Qualifies the element name.
    ///
    /// An unbound prefix (including the empty one) falls back to `DAV:`.
    pub(crate) fn qualify(&self, element: &BytesStart<'_>) -> ParseResult<QName> {
        let raw = element.name();
        let raw = std::str::from_utf8(raw.as_ref())?;
        let (prefix, local) = raw.split_once(':').unwrap_or(("", raw));

        let uri = self
            .bindings
            .iter()
            .rev()
            .find_map(|(p, uri)| (p == prefix).then_some(uri.as_str()))
            .unwrap_or(DAV_NS);

        Ok(QName::new(Namespace::from_uri(uri), local.to_owned()))
    }
}

/// Local part of an element name, without its prefix.
pub(crate) fn local_name(element: &BytesStart<'_>) -> ParseResult<String> {
    Ok(std::str::from_utf8(element.local_name().as_ref())?.to_owned())
}

/// Value of the attribute whose raw name is `name`.
pub(crate) fn attribute(element: &BytesStart<'_>, name: &str) -> ParseResult<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(std::str::from_utf8(&attr.value)?.to_owned()));
        }
    }
    Ok(None)
}

/// Position inside a `<prop>` or `<include>` container.
///
/// Only direct children name properties. Anything nested below them, such as
/// the `comp` and `prop` elements of a `calendar-data` request, is skipped.
#[derive(Debug, Default)]
pub(crate) struct PropList {
    /// Open elements below the container, `None` outside of it.
    depth: Option<usize>,
}

impl PropList {
    pub(crate) const fn enter(&mut self) {
        self.depth = Some(0);
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.depth.is_some()
    }

    /// Handles a start or empty element. Returns whether it names a property.
    pub(crate) const fn start(&mut self, empty: bool) -> bool {
        let Some(depth) = self.depth else {
            return false;
        };
        if !empty {
            self.depth = Some(depth + 1);
        }
        depth == 0
    }

    /// Handles an end element; the end at depth zero closes the container.
    pub(crate) const fn end(&mut self) {
        self.depth = match self.depth {
            Some(0) | None => None,
            Some(depth) => Some(depth - 1),
        };
    }
}
