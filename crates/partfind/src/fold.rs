//! Simple case folding
//!
//! Folding is one-to-one per character so folded text stays index-aligned
//! with the original. Characters whose lowercase form expands to several
//! characters (e.g. `'İ'`) are kept unchanged. Final sigma `'ς'` folds to
//! `'σ'`, so `"ΟΔΟΣ"` and `"οδος"` compare equal.

/// Fold a single character to its simple lowercase form
#[inline]
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some('ς'), None) => 'σ',
        (Some(single), None) => single,
        _ => c,
    }
}

/// Working copy of `s` as characters, folded when `case_insensitive` is set
pub fn working_chars(s: &str, case_insensitive: bool) -> Vec<char> {
    if case_insensitive {
        s.chars().map(fold_char).collect()
    } else {
        s.chars().collect()
    }
}
