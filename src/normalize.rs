//! Diacritic-insensitive text normalization
//!
//! Answers are compared after stripping all whitespace and the Arabic
//! combining marks used for short vowels (tashkeel), so the presence or
//! absence of diacritics and spacing never affects correctness.

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace plus the Arabic diacritic range U+064B (fathatan) through
/// U+0652 (sukun).
static STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\u{064B}-\u{0652}]").expect("strip pattern is valid"));

/// Strip whitespace and diacritics, leaving only the bare letter skeleton.
#[inline]
pub fn normalize(text: &str) -> String {
    STRIP_PATTERN.replace_all(text, "").into_owned()
}

/// Diacritic- and whitespace-insensitive equality.
#[inline]
pub fn matches(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}
