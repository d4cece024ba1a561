//! Mutable scan state threaded through the grammar rules.
//!
//!     The cursor owns everything one parse pass needs: the source slice, the
//!     scan offset, the value being accumulated for the in-progress token,
//!     the kind of the last finalized token, and the listener registry. The
//!     grammar rules in [scan](crate::kag::scan) operate on it by exclusive
//!     mutable reference; nothing else mutates scan state.
//!
//!     A cursor is created once per input, driven to exhaustion, and then
//!     discarded. Parsing another text means building a fresh cursor.
//!
//! Offsets
//!
//!     `pos` is a byte offset, always on a char boundary, and monotonically
//!     non-decreasing within a pass. Stepping is by `char` so CJK prose in
//!     scenario scripts is handled like any other text.

use crate::kag::chars;
use crate::kag::listener::{ListenerId, TokenListener};
use crate::kag::token::{TokenEvent, TokenKind};

struct Registered<'a> {
    id: ListenerId,
    listener: Box<dyn TokenListener + 'a>,
}

/// Scan state for a single parse pass over one source text.
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    pending: String,
    last_kind: Option<TokenKind>,
    observers: Vec<Registered<'a>>,
    next_id: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            pending: String::new(),
            last_kind: None,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Full source text of this pass.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte offset into the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Kind of the most recently finalized token, if any.
    pub fn last_token_kind(&self) -> Option<TokenKind> {
        self.last_kind
    }

    /// True when the scan offset has reached the end of the source.
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Character at the scan position, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Character `n` characters past the scan position.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(n)
    }

    /// Consume one character into the pending token value.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pending.push(c);
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Step over one character without recording it (delimiter discard).
    pub fn skip_one(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume forward until the next character is one of `delimiters`.
    ///
    /// Returns false when the end of input is reached first. Strictly
    /// forward; this is the scanning primitive every rule is built on.
    pub fn scan_until_any(&mut self, delimiters: &[char]) -> bool {
        loop {
            match self.peek() {
                None => return false,
                Some(c) if delimiters.contains(&c) => return true,
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Step over whitespace without recording it.
    ///
    /// Returns false when the input ends before a non-whitespace character.
    pub fn skip_whitespace(&mut self) -> bool {
        loop {
            match self.peek() {
                None => return false,
                Some(c) if chars::is_whitespace(c) => self.skip_one(),
                Some(_) => return true,
            }
        }
    }

    /// Consume one line ending: an optional `\r` then an optional `\n`.
    ///
    /// Tolerates `\r\n`, bare `\n`, and no line ending at all.
    pub fn skip_newline(&mut self) {
        if self.peek() == Some('\r') {
            self.skip_one();
        }
        if self.peek() == Some('\n') {
            self.skip_one();
        }
    }

    /// Close out the pending token as `kind` and notify listeners.
    ///
    /// The pending value is reset; listeners run synchronously in
    /// registration order, each filtered by its own `accepts` guard.
    pub fn finalize_token(&mut self, kind: TokenKind) {
        let event = TokenEvent {
            kind,
            value: std::mem::take(&mut self.pending),
        };
        self.last_kind = Some(kind);
        self.notify(&event);
    }

    fn notify(&mut self, event: &TokenEvent) {
        for entry in &mut self.observers {
            if entry.listener.accepts(event) {
                entry.listener.on_token(event);
            }
        }
    }

    /// Register a listener. Notification order is registration order.
    pub fn register(&mut self, listener: impl TokenListener + 'a) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.observers.push(Registered {
            id,
            listener: Box::new(listener),
        });
        id
    }

    /// Remove a previously registered listener. Unknown ids are ignored.
    pub fn unregister(&mut self, id: ListenerId) {
        self.observers.retain(|entry| entry.id != id);
    }
}
