//! Text helpers for free-text menu fields

/// Lowercase and collapse runs of whitespace.
///
/// Menu descriptions are typed by hand, so comparisons go through this
/// before any substring or equality check.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive substring check (Unicode aware, so `Ł` matches `ł`)
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

/// Case-insensitive prefix strip that returns the remainder with its
/// original casing.
pub fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.to_lowercase() == prefix.to_lowercase() {
        text.get(prefix.len()..)
    } else {
        None
    }
}
