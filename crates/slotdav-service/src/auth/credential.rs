use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// ## Summary
/// Picks the token secret out of a request.
///
/// The password of an `Authorization: Basic` header wins when it is non-empty;
/// the user name is ignored. Otherwise the `token` query parameter is used.
/// Empty and whitespace-only values count as missing.
#[must_use]
pub fn extract_credential(authorization: Option<&str>, query_token: Option<&str>) -> Option<String> {
    authorization
        .and_then(basic_password)
        .or_else(|| non_blank(query_token?))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn basic_password(header: &str) -> Option<String> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (_user, password) = decoded.split_once(':')?;
    non_blank(password)
}
