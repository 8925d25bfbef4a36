//! Content line folding.

/// Physical lines are limited to 75 octets, excluding the CRLF.
const LINE_LIMIT: usize = 75;

/// Appends `line` to `out` as one or more CRLF-terminated physical lines.
///
/// Continuation lines begin with a single space, which counts toward the limit.
/// Breaks fall on character boundaries, so a multi-byte character is never split.
pub fn push_folded(out: &mut String, line: &str) {
    let mut budget = LINE_LIMIT;
    for c in line.chars() {
        let width = c.len_utf8();
        if width > budget {
            out.push_str("\r\n ");
            budget = LINE_LIMIT - 1;
        }
        out.push(c);
        budget -= width;
    }
    out.push_str("\r\n");
}
