//! Core token types shared by the scanner, listeners, and tooling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Narrative prose run.
    Text,
    /// Directive, either the `@name` line form or the `[name]` bracket form.
    Tag,
    /// One segment of a `*name|` page marker.
    Label,
    /// Sentinel finalized once the input is exhausted. Never carries content.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Text => "Text",
            TokenKind::Tag => "Tag",
            TokenKind::Label => "Label",
            TokenKind::EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}

/// Immutable record of a finalized token, handed to every listener whose
/// guard accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEvent {
    pub kind: TokenKind,
    pub value: String,
}

impl TokenEvent {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        TokenEvent {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_names() {
        assert_eq!(TokenKind::Text.to_string(), "Text");
        assert_eq!(TokenKind::EndOfInput.to_string(), "EndOfInput");
    }

    #[test]
    fn event_construction() {
        let event = TokenEvent::new(TokenKind::Tag, "se storage=se1.wav");
        assert_eq!(event.kind, TokenKind::Tag);
        assert_eq!(event.value, "se storage=se1.wav");
    }
}
