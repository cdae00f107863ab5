use crate::{PATH_SEPARATOR, WORD_SEPARATOR};
use convert_case::{Case, Casing};

/// Normalize every segment of a dotted path.
///
/// `datas.number-of` → `Datas.NumberOf`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    raw.split(PATH_SEPARATOR)
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join(&PATH_SEPARATOR.to_string())
}

/// Normalize one path segment.
///
/// Hyphenated segments are split and each word Pascal-cased; a segment
/// starting lowercase is Pascal-cased; anything else is left as written.
#[must_use]
pub fn normalize_segment(segment: &str) -> String {
    if segment.contains(WORD_SEPARATOR) {
        return segment
            .split(WORD_SEPARATOR)
            .map(|word| word.to_case(Case::Pascal))
            .collect();
    }

    if segment.starts_with(|c: char| c.is_lowercase()) {
        segment.to_case(Case::Pascal)
    } else {
        segment.to_string()
    }
}
