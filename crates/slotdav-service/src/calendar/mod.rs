//! Calendar aggregation.
//!
//! ## Module Organization
//!
//! - `aggregate`: Listing and lookup of events across both record collections
//! - `mapping`: Conversion of store records into calendar events
//! - `range`: Date range parsing for the subscription feed

pub mod aggregate;
pub mod mapping;
pub mod range;

pub use aggregate::{collection_tag, get_event, last_modified, list_events};
pub use mapping::{appointment_to_event, busy_slot_to_event};
pub use range::parse_feed_range;
