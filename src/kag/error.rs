//! Error types for scanning.

use std::fmt;

/// Errors that can occur during a parse pass.
///
/// Any error is fatal to the pass: the driver stops at the first one and the
/// partial event stream must be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A directive opened with `@` never reached a newline before the end of
    /// the input. `pos` is the byte offset of the `@`.
    InvalidTag { pos: usize },
    /// A label opened with `*` had no characters left, or a segment never
    /// reached `|` or a newline. `pos` is the byte offset of the `*`.
    InvalidLabel { pos: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidTag { pos } => {
                write!(
                    f,
                    "invalid tag: directive at byte {} runs to end of input without a newline",
                    pos
                )
            }
            ParseError::InvalidLabel { pos } => {
                write!(
                    f,
                    "invalid label: marker at byte {} is empty or unterminated",
                    pos
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offset() {
        let err = ParseError::InvalidTag { pos: 12 };
        assert!(err.to_string().contains("byte 12"));
        let err = ParseError::InvalidLabel { pos: 0 };
        assert!(err.to_string().contains("byte 0"));
    }
}
