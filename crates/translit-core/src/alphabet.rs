//! Character-level classification for Chechen Cyrillic text.

/// True for letters that have a case distinction.
pub fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}

/// Compare two characters without regard to case.
pub fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Whether the token is written in capitals around position `i`.
///
/// Looks at the next cased letter, or the previous one when `i` is last.
/// A lone capital has no cased neighbour and counts as titlecase.
pub fn is_shouted(chars: &[char], i: usize) -> bool {
    let next = chars.get(i + 1).copied().filter(|&c| is_cased(c));
    let prev = i
        .checked_sub(1)
        .and_then(|p| chars.get(p))
        .copied()
        .filter(|&c| is_cased(c));
    next.or(prev).is_some_and(char::is_uppercase)
}
