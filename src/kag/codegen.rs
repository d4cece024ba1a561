//! WebGAL scene generation from token events.
//!
//!     The generator is an ordinary listener, guarded on `Text` events: each
//!     prose run becomes one `:<value>;` statement. It demonstrates the
//!     consumer side of the listener contract and is what the `kag webgal`
//!     command drives; the scanner is unaware of it.

use crate::kag::cursor::Cursor;
use crate::kag::error::ParseError;
use crate::kag::listener::TokenListener;
use crate::kag::scan::start_parse;
use crate::kag::token::{TokenEvent, TokenKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Listener emitting WebGAL dialogue statements for every prose run.
#[derive(Debug, Default)]
pub struct WebGalGen {
    output: String,
}

impl WebGalGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl TokenListener for WebGalGen {
    fn accepts(&self, event: &TokenEvent) -> bool {
        event.kind == TokenKind::Text
    }

    fn on_token(&mut self, event: &TokenEvent) {
        // Prose runs keep their line breaks; trim them so the emitted
        // statements stay one per line. A run that was only line breaks
        // (e.g. the gap after an inline tag) produces no statement.
        let value = event.value.trim_matches(&['\r', '\n'][..]);
        if value.is_empty() {
            return;
        }
        self.output.push(':');
        self.output.push_str(value);
        self.output.push_str(";\n");
    }
}

/// Convert `source` to a WebGAL scene in one call.
pub fn webgal_scene(source: &str) -> Result<String, ParseError> {
    let generator = Rc::new(RefCell::new(WebGalGen::new()));
    let mut cursor = Cursor::new(source);
    cursor.register(Rc::clone(&generator));
    start_parse(&mut cursor)?;
    drop(cursor);
    let generator = match Rc::try_unwrap(generator) {
        Ok(cell) => cell.into_inner(),
        // Unreachable: the cursor held the only other handle.
        Err(shared) => return Ok(shared.borrow().output().to_string()),
    };
    Ok(generator.into_output())
}
