//! Substring detectors for construction-relevant text.
//!
//! Matching is deliberately crude: plain case-sensitive substring search for dimension
//! markers with no word-boundary check, so `"information"` matches on `in`. Downstream
//! consumers rely on this exact behaviour, false positives included.

pub const DIMENSION_MARKERS: [&str; 6] = ["\"", "'", "mm", "cm", "ft", "in"];

pub const CONSTRUCTION_KEYWORDS: [&str; 6] =
    ["quantity", "cost", "price", "total", "sq ft", "linear ft"];

pub fn has_dimension_marker(line: &str) -> bool {
    DIMENSION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Case-insensitive: the value is lower-cased before matching.
pub fn has_construction_keyword(value: &str) -> bool {
    let lowered = value.to_lowercase();
    CONSTRUCTION_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

pub fn dimension_lines(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| has_dimension_marker(line))
        .collect()
}
