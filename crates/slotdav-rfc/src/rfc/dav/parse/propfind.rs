//! PROPFIND body parsing.

use quick_xml::Reader;
use quick_xml::events::Event;

use super::error::ParseResult;
use super::{Prefixes, PropList, local_name};
use crate::rfc::dav::core::{PropfindRequest, QName};

/// Where the reader is inside `<propfind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Propfind,
    Prop,
    Include,
}

/// Parses a PROPFIND request body.
///
/// ## Summary
/// A body that is empty or whitespace only means `allprop`. So does a
/// `<propfind>` that names none of `allprop`, `propname` or `prop`.
///
/// ## Errors
/// Returns an error if the XML is malformed.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_propfind(xml: &[u8]) -> ParseResult<PropfindRequest> {
    if xml.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("Empty PROPFIND body treated as allprop");
        return Ok(PropfindRequest::allprop());
    }

    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut prefixes = Prefixes::default();
    let mut section = Section::Outside;
    let mut request: Option<PropfindRequest> = None;
    let mut named: Vec<QName> = Vec::new();
    let mut include: Vec<QName> = Vec::new();
    let mut props = PropList::default();

    loop {
        buf.clear();
        let event = reader.read_event_into(&mut buf)?;
        let (element, empty) = match &event {
            Event::Start(e) => (e, false),
            Event::Empty(e) => (e, true),
            Event::End(e) => {
                if props.is_open() {
                    props.end();
                    if !props.is_open() {
                        section = Section::Propfind;
                    }
                } else if e.local_name().as_ref() == b"propfind" {
                    section = Section::Outside;
                }
                continue;
            }
            Event::Eof => break,
            _ => continue,
        };

        prefixes.declare(element)?;
        match section {
            Section::Prop => {
                if props.start(empty) {
                    named.push(prefixes.qualify(element)?);
                }
            }
            Section::Include => {
                if props.start(empty) {
                    include.push(prefixes.qualify(element)?);
                }
            }
            Section::Outside => {
                if local_name(element)? == "propfind" && !empty {
                    section = Section::Propfind;
                }
            }
            Section::Propfind => match local_name(element)?.as_str() {
                "allprop" => request = Some(PropfindRequest::allprop()),
                "propname" => request = Some(PropfindRequest::PropName),
                "prop" => {
                    request.get_or_insert_with(|| PropfindRequest::Prop(Vec::new()));
                    if !empty {
                        section = Section::Prop;
                        props.enter();
                    }
                }
                "include" if !empty => {
                    section = Section::Include;
                    props.enter();
                }
                _ => {}
            },
        }
    }

    Ok(match request {
        Some(PropfindRequest::Prop(_)) => PropfindRequest::Prop(named),
        Some(PropfindRequest::AllProp { .. }) | None => PropfindRequest::AllProp { include },
        Some(PropfindRequest::PropName) => PropfindRequest::PropName,
    })
}
