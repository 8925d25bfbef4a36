//! `WebDAV` XML types.
//!
//! This module defines the core types for `WebDAV` XML elements
//! used in `PROPFIND`, `REPORT`, and multistatus responses.

mod depth;
mod href;
mod multistatus;
mod namespace;
pub mod property;
mod propfind;
mod report;

pub use depth::Depth;
pub use href::{Href, encode_segment};
pub use multistatus::{Multistatus, Propstat, PropstatResponse, Status};
pub use namespace::{CALDAV_NS, CS_NS, DAV_NS, Namespace, QName, caldav_props, cs_props, dav_props};
pub use property::{DavProperty, PropertyValue};
pub use propfind::PropfindRequest;
pub use report::{CalendarMultiget, CalendarQuery, ReportRequest, ReportType, TimeRange};
