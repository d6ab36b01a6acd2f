//! Small helpers shared by entities.

/// `true` when the value is absent, empty, or made only of whitespace.
///
/// Whitespace is the JVM's `Character.isWhitespace` set: no-break spaces
/// count as text, the ASCII separators `U+001C..=U+001F` count as blank.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.chars().all(is_separator_whitespace))
}

fn is_separator_whitespace(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}

/// `true` when the value is present and contains `@` at least once.
///
/// No local-part or domain checks.
pub fn has_email_shape(value: &str) -> bool {
    value.contains('@')
}
