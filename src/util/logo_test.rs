use super::*;

#[test]
fn plain_name_is_lowercased() {
    assert_eq!(short_name_to_logo_path("ACM"), "/img/acm.png");
}

#[test]
fn accents_are_stripped() {
    assert_eq!(short_name_to_logo_path("Club Ñandú"), "/img/club-nandu.png");
}

#[test]
fn outer_whitespace_is_trimmed_and_inner_replaced() {
    assert_eq!(short_name_to_logo_path("  Radio  Uni "), "/img/radio--uni.png");
}

#[test]
fn compatibility_forms_are_folded() {
    // U+FB01 LATIN SMALL LIGATURE FI
    assert_eq!(short_name_to_logo_path("\u{fb01}lmoteca"), "/img/filmoteca.png");
}
