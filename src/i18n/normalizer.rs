//! Line normalization
//!
//! Turns raw lines into property-file text. Keys become ASCII with diacritics
//! stripped and whitespace escaped; terms keep full fidelity through `\uXXXX`
//! escapes of their UTF-16 code units.

use unicode_normalization::UnicodeNormalization;

/// Escape written in place of every whitespace character in a key
const ESCAPED_SPACE: &str = "\\ ";

/// How a line is turned into property text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    Key,
    Term,
}

impl LineMode {
    /// Normalize one line in this mode
    pub fn apply(self, line: &str) -> String {
        match self {
            LineMode::Key => normalize_key(line),
            LineMode::Term => encode_term(line),
        }
    }
}

/// Normalize a raw line into a property key
///
/// The line is canonically decomposed (NFD), whitespace is escaped as `\ ` and
/// everything outside printable ASCII is dropped, which removes the combining
/// marks decomposition split off. A backslash that already precedes whitespace
/// is kept as an existing escape, so normalizing a key twice changes nothing.
pub fn normalize_key(line: &str) -> String {
    let mut key = String::with_capacity(line.len());
    let mut chars = line
        .nfd()
        .filter(|&c| is_key_whitespace(c) || is_printable_ascii(c))
        .peekable();

    while let Some(c) = chars.next() {
        if is_key_whitespace(c) {
            key.push_str(ESCAPED_SPACE);
        } else if c == '\\' && chars.peek().is_some_and(|&next| is_key_whitespace(next)) {
            chars.next();
            key.push_str(ESCAPED_SPACE);
        } else {
            key.push(c);
        }
    }

    key
}

/// Encode a raw line into an ASCII property value
///
/// ASCII characters are copied verbatim. Every other UTF-16 code unit is
/// written as `\uXXXX` with four uppercase hex digits, so characters outside
/// the BMP become two escapes, one per surrogate.
pub fn encode_term(line: &str) -> String {
    let mut term = String::with_capacity(line.len());
    for unit in line.encode_utf16() {
        if unit < 0x80 {
            term.push(char::from(unit as u8));
        } else {
            term.push_str(&format!("\\u{:04X}", unit));
        }
    }
    term
}

/// Whitespace as matched by the `\s` class: space, tab, LF, VT, FF, CR
fn is_key_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

fn is_printable_ascii(c: char) -> bool {
    matches!(c, ' '..='~')
}
