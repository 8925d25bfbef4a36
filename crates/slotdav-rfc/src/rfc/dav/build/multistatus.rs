//! Multistatus document serialization.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{RfcError, RfcResult};
use crate::rfc::dav::core::{
    CALDAV_NS, CS_NS, DAV_NS, DavProperty, Multistatus, PropertyValue, PropstatResponse, QName,
};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// ## Summary
/// Serializes a multistatus document.
///
/// The root element always declares the `DAV:` (`D`), `CalDAV` (`C`) and
/// `CalendarServer` (`CS`) namespaces. Properties from any other namespace are
/// written with a local default namespace declaration.
///
/// ## Errors
/// Returns an error if writing to the in-memory buffer fails.
pub fn serialize_multistatus(multistatus: &Multistatus) -> RfcResult<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("D:multistatus").with_attributes([
            ("xmlns:D", DAV_NS),
            ("xmlns:C", CALDAV_NS),
            ("xmlns:CS", CS_NS),
        ])),
    )?;

    for response in &multistatus.responses {
        write_response(&mut writer, response)?;
    }

    write(&mut writer, Event::End(BytesEnd::new("D:multistatus")))?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| RfcError::SerializationError(e.to_string()))
}

fn write(writer: &mut XmlWriter, event: Event<'_>) -> RfcResult<()> {
    writer
        .write_event(event)
        .map_err(|e| RfcError::SerializationError(format!("failed to write XML: {e}")))
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> RfcResult<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write_response(writer: &mut XmlWriter, response: &PropstatResponse) -> RfcResult<()> {
    write(writer, Event::Start(BytesStart::new("D:response")))?;
    write_text_element(writer, "D:href", response.href.as_str())?;

    if let Some(status) = response.status {
        write_text_element(writer, "D:status", &status.status_line())?;
    }

    for propstat in &response.propstats {
        write(writer, Event::Start(BytesStart::new("D:propstat")))?;
        write(writer, Event::Start(BytesStart::new("D:prop")))?;
        for property in &propstat.properties {
            write_property(writer, property)?;
        }
        write(writer, Event::End(BytesEnd::new("D:prop")))?;
        write_text_element(writer, "D:status", &propstat.status.status_line())?;
        write(writer, Event::End(BytesEnd::new("D:propstat")))?;
    }

    write(writer, Event::End(BytesEnd::new("D:response")))
}

/// Returns the serialized element name and, for unknown namespaces, the
/// `xmlns` declaration the element must carry.
fn element_name(qname: &QName) -> (String, Option<String>) {
    match qname.namespace.prefix() {
        Some(prefix) => (format!("{prefix}:{}", qname.local_name()), None),
        None => (
            qname.local_name().to_string(),
            Some(qname.namespace_uri().to_string()),
        ),
    }
}

fn start_for(qname: &QName) -> (BytesStart<'static>, String) {
    let (name, xmlns) = element_name(qname);
    let mut start = BytesStart::new(name.clone());
    if let Some(ns) = xmlns {
        start.push_attribute(("xmlns", ns.as_str()));
    }
    (start, name)
}

fn write_empty_qname(writer: &mut XmlWriter, qname: &QName) -> RfcResult<()> {
    let (start, _) = start_for(qname);
    write(writer, Event::Empty(start))
}

fn write_property(writer: &mut XmlWriter, property: &DavProperty) -> RfcResult<()> {
    let (start, name) = start_for(&property.name);

    let value = match &property.value {
        None => return write(writer, Event::Empty(start)),
        Some(PropertyValue::ResourceType(types)) if types.is_empty() => {
            return write(writer, Event::Empty(start));
        }
        Some(value) => value,
    };

    write(writer, Event::Start(start))?;
    match value {
        PropertyValue::Text(text) | PropertyValue::ContentData(text) => {
            write(writer, Event::Text(BytesText::new(text)))?;
        }
        PropertyValue::Integer(n) => {
            write(writer, Event::Text(BytesText::new(&n.to_string())))?;
        }
        PropertyValue::Href(href) => write_text_element(writer, "D:href", href)?,
        PropertyValue::ResourceType(types) => {
            for resource_type in types {
                write_empty_qname(writer, resource_type)?;
            }
        }
        PropertyValue::SupportedComponents(components) => {
            for component in components {
                write(
                    writer,
                    Event::Empty(
                        BytesStart::new("C:comp").with_attributes([("name", component.as_str())]),
                    ),
                )?;
            }
        }
        PropertyValue::SupportedReports(reports) => {
            for report in reports {
                write(writer, Event::Start(BytesStart::new("D:supported-report")))?;
                write(writer, Event::Start(BytesStart::new("D:report")))?;
                write_empty_qname(writer, report)?;
                write(writer, Event::End(BytesEnd::new("D:report")))?;
                write(writer, Event::End(BytesEnd::new("D:supported-report")))?;
            }
        }
        PropertyValue::Privileges(privileges) => {
            for privilege in privileges {
                write(writer, Event::Start(BytesStart::new("D:privilege")))?;
                write_empty_qname(writer, privilege)?;
                write(writer, Event::End(BytesEnd::new("D:privilege")))?;
            }
        }
    }
    write(writer, Event::End(BytesEnd::new(name)))
}
