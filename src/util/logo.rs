//! Association logo paths.
//!
//! Logos are served as static files named after a slug of the association's
//! short name: `"Club Ñandú"` lives at `/img/club-nandu.png`.

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks stripped after NFKD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Static path of the logo for `short_name`.
#[must_use]
pub fn short_name_to_logo_path(short_name: &str) -> String {
    let decomposed: String = short_name.to_lowercase().nfkd().collect();
    let slug: String = decomposed
        .trim()
        .chars()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("/img/{slug}.png")
}
