//! Entity tags and HTTP date formatting.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Number of hex digits kept from the digest.
const ETAG_HEX_LEN: usize = 32;

fn quoted_digest(input: &[u8]) -> String {
    let digest = hex::encode(Sha256::digest(input));
    format!("\"{}\"", &digest[..ETAG_HEX_LEN])
}

/// ## Summary
/// Computes the entity tag of a derived event.
///
/// The tag depends only on the event identifier and its last-modified instant,
/// so it stays stable across requests and changes whenever the record changes.
#[must_use]
pub fn compute_etag(uid: &str, last_modified: DateTime<Utc>) -> String {
    quoted_digest(format!("{uid}|{}", last_modified.to_rfc3339()).as_bytes())
}

/// ## Summary
/// Computes a quoted entity tag over arbitrary content.
///
/// Used for the subscription feed and the collection `getctag`.
#[must_use]
pub fn content_etag(content: &[u8]) -> String {
    quoted_digest(content)
}

/// Formats an instant as an HTTP date (RFC 9110 IMF-fixdate).
#[must_use]
pub fn format_http_date(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Returns whether an `If-None-Match` header value matches the given tag.
///
/// `*` matches any tag. Weak tags compare by their opaque part.
#[must_use]
pub fn if_none_match_matches(header: &str, etag: &str) -> bool {
    let bare = |tag: &str| tag.trim().trim_start_matches("W/").to_string();
    let wanted = bare(etag);
    header
        .split(',')
        .any(|candidate| candidate.trim() == "*" || bare(candidate) == wanted)
}
