//! Line grammar rules and the parse driver.
//!
//!     The dispatcher routes on the character at the scan position:
//!
//!         @    directive line, scanned to the end of the line
//!         *    page label, possibly multi-segment via `|`
//!         [    inline/bracket tag, scanned to `]`
//!         else prose run, scanned to the next `@`, `*` or `[`
//!
//!     Each rule commits to consuming forward once it starts; there is no
//!     backtracking anywhere. The one place needing two characters of
//!     lookahead is `[[` inside prose, which is literal text rather than a
//!     tag opener.
//!
//!     Prose is not newline-terminated. A run keeps going, line breaks
//!     included, until a reserved character appears, and after an inline tag
//!     the dispatcher picks up again, so `hello[lr]world` produces
//!     Text("hello"), Tag("lr"), Text("world").

use crate::kag::cursor::Cursor;
use crate::kag::error::ParseError;
use crate::kag::listener::FnListener;
use crate::kag::token::{TokenEvent, TokenKind};
use std::cell::RefCell;

/// Drive the cursor to the end of its input.
///
/// Dispatches one rule at a time until the `EndOfInput` sentinel is
/// finalized. Returns the first error encountered; a failed pass has no
/// recovery and its partial event stream must be discarded.
pub fn start_parse(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    loop {
        dispatch(cursor)?;
        if cursor.last_token_kind() == Some(TokenKind::EndOfInput) {
            return Ok(());
        }
    }
}

/// Parse `source` and return every finalized token event in order.
///
/// Convenience wrapper for consumers that just want the stream; the
/// `EndOfInput` sentinel is included as the last event.
pub fn parse_events(source: &str) -> Result<Vec<TokenEvent>, ParseError> {
    let events = RefCell::new(Vec::new());
    let mut cursor = Cursor::new(source);
    cursor.register(FnListener::new(|kind, value: &str| {
        events.borrow_mut().push(TokenEvent::new(kind, value));
    }));
    start_parse(&mut cursor)?;
    drop(cursor);
    Ok(events.into_inner())
}

/// Route on the character at the scan position.
fn dispatch(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    match cursor.peek() {
        None => {
            cursor.finalize_token(TokenKind::EndOfInput);
            Ok(())
        }
        Some('@') => directive(cursor),
        Some('*') => label(cursor),
        Some('[') => inline_tag(cursor),
        Some(_) => text(cursor),
    }
}

/// `@name args...` up to the end of the line.
fn directive(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    let start = cursor.pos();
    cursor.skip_one(); // '@'
    if !cursor.scan_until_any(&['\r', '\n']) {
        return Err(ParseError::InvalidTag { pos: start });
    }
    cursor.finalize_token(TokenKind::Tag);
    cursor.skip_newline();
    Ok(())
}

/// `*name|` page marker; `*a|b|c|` emits one Label event per segment.
fn label(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    let start = cursor.pos();
    cursor.skip_one(); // '*'
    if cursor.at_end() {
        return Err(ParseError::InvalidLabel { pos: start });
    }
    label_segment(cursor, start)
}

fn label_segment(cursor: &mut Cursor<'_>, start: usize) -> Result<(), ParseError> {
    if !cursor.scan_until_any(&['|', '\r', '\n']) {
        return Err(ParseError::InvalidLabel { pos: start });
    }
    cursor.finalize_token(TokenKind::Label);
    match cursor.peek() {
        Some('|') => {
            cursor.skip_one();
            match cursor.peek() {
                // A label may end the line on the bar itself.
                None => Ok(()),
                Some('\r') | Some('\n') => {
                    cursor.skip_newline();
                    Ok(())
                }
                Some(_) => label_segment(cursor, start),
            }
        }
        // The delimiter was a newline.
        _ => {
            cursor.skip_newline();
            Ok(())
        }
    }
}

/// `[name]` bracket/inline form.
///
/// An unterminated tag scans to the end of input and still finalizes with
/// whatever was consumed.
// TODO: an unterminated `[` should probably be an InvalidTag error; scripts
// in the wild have never been rejected for it, so the leniency stays for now.
fn inline_tag(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    cursor.skip_one(); // '['
    cursor.scan_until_any(&[']']);
    cursor.finalize_token(TokenKind::Tag);
    cursor.skip_one(); // ']' when present; a no-op at end of input
    Ok(())
}

/// Prose run. Stops at `@`, `*` or `[`, except that `[[` stays literal.
fn text(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    loop {
        cursor.scan_until_any(&['@', '*', '[']);
        // Two-character lookahead: `[[` does not open a tag.
        if cursor.peek() == Some('[') && cursor.peek_nth(1) == Some('[') {
            cursor.advance();
            cursor.advance();
            continue;
        }
        break;
    }
    cursor.finalize_token(TokenKind::Text);
    match cursor.peek() {
        None => Ok(()),
        Some('[') => inline_tag(cursor),
        // A directive or label can follow a run with no separating newline.
        Some(_) => dispatch(cursor),
    }
}
