//! Document normalization ahead of keyword matching

/// Characters replaced by a single space before matching.
pub const SEPARATOR_CHARS: [char; 7] = ['\\', '(', ')', ',', '.', '[', ']'];

/// Replace each separator character with one space. Everything else,
/// including existing whitespace, passes through unchanged.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if SEPARATOR_CHARS.contains(&c) { ' ' } else { c })
        .collect()
}
