//! Character classes used by the scanner to decide transitions.

/// Characters with reserved meaning in the line grammar.
pub const RESERVED: [char; 7] = ['@', '*', '[', ']', '|', '\r', '\n'];

/// True for the two line-ending characters.
pub fn is_newline(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// True for space, tab, and the line-ending characters.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// True when `c` carries grammar meaning and cannot appear in a plain name.
pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}
