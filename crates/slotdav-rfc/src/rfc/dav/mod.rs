//! `WebDAV` and `CalDAV` XML handling.

pub mod build;
pub mod core;
pub mod parse;
pub mod validators;
