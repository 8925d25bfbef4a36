//! `WebDAV` XML serialization.

pub mod multistatus;

pub use multistatus::serialize_multistatus;
