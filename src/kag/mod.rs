//! KAG scenario-script parsing
//!
//!     This module holds the complete pipeline from source text to consumers:
//!
//!         1. Scanning: a hand-written single-pass scanner over a mutable
//!            cursor. The cursor owns the scan offset and the in-progress
//!            token value; the grammar rules in [scan] consume characters
//!            forward and never backtrack. See [cursor] and [scan].
//!
//!         2. Notification: every finalized token is handed synchronously to
//!            the registered listeners, in registration order. This is the
//!            decoupling point between scanning and consumption; the scanner
//!            has no idea who is watching. See [listener].
//!
//!         3. Consumption: the AST builder ([ast]) and the WebGAL generator
//!            ([codegen]) are plain listeners layered on top of the event
//!            stream. Anything else that wants tokens registers the same way.
//!
//! The Line Grammar
//!
//!     A script is a sequence of lines, each starting unambiguously:
//!
//!         *name|        page label, possibly multi-segment (*a|b|c|)
//!         @name args    engine directive up to the end of the line
//!         [name]        directive in bracket form, also legal inline in text
//!         anything else narrative prose, running until @, * or [
//!
//!     Inside prose, `[[` is literal text and does not open a tag. Prose runs
//!     are not newline-terminated; they continue across line breaks until a
//!     reserved character shows up, and the line breaks stay in the value.
//!
//! Errors
//!
//!     Parsing is fail-fast: the first malformed construct aborts the pass
//!     with a [ParseError] and there is no recovery or resynchronization. A
//!     failed pass must be discarded whole.

pub mod ast;
pub mod chars;
pub mod codegen;
pub mod cursor;
pub mod error;
pub mod listener;
pub mod scan;
pub mod testing;
pub mod token;

pub use ast::{parse_to_ast, AstBuilder, Label, Node, Tag, Text};
pub use codegen::{webgal_scene, WebGalGen};
pub use cursor::Cursor;
pub use error::ParseError;
pub use listener::{EventLog, FnListener, ListenerId, TokenListener};
pub use scan::{parse_events, start_parse};
pub use token::{TokenEvent, TokenKind};
