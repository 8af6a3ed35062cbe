//! String normalization for hardware descriptor comparison and storage.
//!
//! OS enumeration pollutes descriptor strings with inconsistent whitespace
//! across scans (trailing blanks, doubled spaces, non-breaking variants).
//! Without normalization those would read as identity changes and cost the
//! user an alias on the rebuild path.

/// Trim and collapse internal whitespace runs to a single ASCII space.
///
/// `split_whitespace` covers the full Unicode `White_Space` set, so
/// non-breaking space and friends collapse too.  Used for comparison only;
/// stored values go through [`normalize_value`].
pub fn normalize_string(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Storage form: normalized, with empty collapsing to absent.
///
/// A whitespace-only descriptor is stored as `None`, never `Some("")`.
pub fn normalize_value(s: Option<&str>) -> Option<String> {
    let normalized = normalize_string(s.unwrap_or(""));
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
