//! Canonical form of item names taken from URL path segments.

const ENCODED_SPACE: &str = "%20";

/// Trim `raw` and turn every literal `%20` into a space.
///
/// This is not percent-decoding: no other escape is touched. Replacement is
/// repeated until no `%20` remains, and the result is not trimmed again.
pub fn clean_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();

    while let Some(pos) = name.find(ENCODED_SPACE) {
        name.replace_range(pos..pos + ENCODED_SPACE.len(), " ");
    }

    name
}
