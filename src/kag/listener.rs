//! Listener registration for finalized-token events.
//!
//!     Listeners decouple scanning from consumption. The cursor notifies each
//!     registered listener synchronously, in registration order, every time a
//!     token is finalized. Multiple listeners may observe the same pass: one
//!     can build an AST while another streams output to a generator, without
//!     either knowing about the other or about the scanner internals.
//!
//!     A listener that panics aborts the pass; the cursor does not catch
//!     anything on behalf of its observers.

use crate::kag::token::{TokenEvent, TokenKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Observer notified for every finalized token.
///
/// `accepts` is the filtering guard: the cursor calls it first and only
/// invokes `on_token` when it returns true. The default accepts everything.
///
/// ```ignore
/// struct TagCounter(usize);
///
/// impl TokenListener for TagCounter {
///     fn accepts(&self, event: &TokenEvent) -> bool {
///         event.kind == TokenKind::Tag
///     }
///     fn on_token(&mut self, _event: &TokenEvent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait TokenListener {
    /// Guard deciding whether `on_token` fires for this event.
    fn accepts(&self, _event: &TokenEvent) -> bool {
        true
    }

    /// Called once per accepted token, inline with scanning.
    fn on_token(&mut self, event: &TokenEvent);
}

/// Handle returned by [`Cursor::register`](crate::kag::Cursor::register),
/// usable to unregister the listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(pub(crate) u64);

fn accept_all(_event: &TokenEvent) -> bool {
    true
}

/// Adapter running a `(callback, predicate)` closure pair as a listener.
///
/// This keeps the plain-closure registration style available for consumers
/// that do not want to define a type: the callback receives the token kind
/// and value of every event the predicate accepts.
pub struct FnListener<F, P = fn(&TokenEvent) -> bool> {
    callback: F,
    predicate: P,
}

impl<F> FnListener<F>
where
    F: FnMut(TokenKind, &str),
{
    /// Listener invoking `callback` for every event.
    pub fn new(callback: F) -> Self {
        FnListener {
            callback,
            predicate: accept_all,
        }
    }
}

impl<F, P> FnListener<F, P>
where
    F: FnMut(TokenKind, &str),
    P: Fn(&TokenEvent) -> bool,
{
    /// Listener invoking `callback` for events where `predicate` holds.
    pub fn with_predicate(callback: F, predicate: P) -> Self {
        FnListener {
            callback,
            predicate,
        }
    }
}

impl<F, P> TokenListener for FnListener<F, P>
where
    F: FnMut(TokenKind, &str),
    P: Fn(&TokenEvent) -> bool,
{
    fn accepts(&self, event: &TokenEvent) -> bool {
        (self.predicate)(event)
    }

    fn on_token(&mut self, event: &TokenEvent) {
        (self.callback)(event.kind, &event.value)
    }
}

// A shared listener can be registered as a clone while the caller keeps the
// other handle to read results back after the pass.
impl<T: TokenListener> TokenListener for Rc<RefCell<T>> {
    fn accepts(&self, event: &TokenEvent) -> bool {
        self.borrow().accepts(event)
    }

    fn on_token(&mut self, event: &TokenEvent) {
        self.borrow_mut().on_token(event)
    }
}

/// Stock listener collecting every accepted event into a vector.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<TokenEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared log, for registering a clone and inspecting the original later.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl TokenListener for EventLog {
    fn on_token(&mut self, event: &TokenEvent) {
        self.events.push(event.clone());
    }
}
