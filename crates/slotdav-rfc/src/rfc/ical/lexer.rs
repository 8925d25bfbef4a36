//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and splitting of content lines into name, parameters
//! and value.

/// A single unfolded content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, uppercased.
    pub name: String,
    /// Parameters as `(NAME, value)` pairs; names uppercased, quotes removed.
    pub params: Vec<(String, String)>,
    /// Raw (still escaped) value.
    pub value: String,
}

impl ContentLine {
    /// Returns the first value of a parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Unfolds `input` into logical content lines.
///
/// CRLF and bare LF both end a physical line. A physical line that begins with a
/// space or tab continues the previous one, minus that first character. Blank
/// lines are skipped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut logical: Vec<String> = Vec::new();

    for physical in input.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)) {
        if physical.is_empty() {
            continue;
        }
        match physical.strip_prefix([' ', '\t']) {
            Some(rest) if !logical.is_empty() => {
                if let Some(current) = logical.last_mut() {
                    current.push_str(rest);
                }
            }
            Some(rest) => logical.push(rest.to_owned()),
            None => logical.push(physical.to_owned()),
        }
    }

    logical
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`. Colons and semicolons inside quoted
/// parameter values are not treated as delimiters. Returns `None` for lines without
/// a value separator or with an empty name.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let mut in_quotes = false;
    let mut value_start = None;
    let mut segments: Vec<&str> = Vec::new();
    let mut segment_start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&line[segment_start..i]);
                segment_start = i + 1;
            }
            ':' if !in_quotes => {
                segments.push(&line[segment_start..i]);
                value_start = Some(i + 1);
                break;
            }
            _ => {}
        }
    }

    let value_start = value_start?;
    let mut segments = segments.into_iter();
    let name = segments.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let params = segments
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            Some((
                key.trim().to_ascii_uppercase(),
                value.trim().trim_matches('"').to_string(),
            ))
        })
        .collect();

    Some(ContentLine {
        name: name.to_ascii_uppercase(),
        params,
        value: line[value_start..].to_string(),
    })
}
