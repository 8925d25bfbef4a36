//! Normalization of the configured calendar slug into a path segment.

/// Reduces `name` to lowercase ASCII alphanumerics joined by single hyphens.
///
/// Every other character acts as a separator, so `"Praxis Dr. Müller"` becomes
/// `"praxis-dr-m-ller"`. Yields `None` when no alphanumeric character remains.
#[must_use]
pub fn generate_slug(name: &str) -> Option<String> {
    let lowered = name.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    (!words.is_empty()).then(|| words.join("-"))
}
