//! Integration tests for the listener layer: filtering, ordering,
//! unregistration, shared listeners, and pass idempotence.

use kag_parser::kag::testing::{collect_events, PAGE_LABEL, SCENE};
use kag_parser::kag::{
    start_parse, AstBuilder, Cursor, EventLog, FnListener, TokenEvent, TokenKind, WebGalGen,
};
use std::cell::RefCell;
use std::rc::Rc;

use TokenKind::{EndOfInput, Label, Tag};

#[test]
fn predicate_filters_while_open_listener_sees_everything() {
    // One label, one directive. The open listener gets both plus the
    // sentinel; the tag-guarded listener gets only the directive.
    let all = RefCell::new(Vec::new());
    let tags_only = RefCell::new(Vec::new());

    let mut cursor = Cursor::new("*p|\n@pg\n");
    cursor.register(FnListener::with_predicate(
        |kind, value: &str| tags_only.borrow_mut().push((kind, value.to_string())),
        |event: &TokenEvent| event.kind == Tag,
    ));
    cursor.register(FnListener::new(|kind, value: &str| {
        all.borrow_mut().push((kind, value.to_string()));
    }));
    start_parse(&mut cursor).unwrap();
    drop(cursor);

    assert_eq!(
        all.into_inner(),
        vec![
            (Label, "p".to_string()),
            (Tag, "pg".to_string()),
            (EndOfInput, String::new()),
        ]
    );
    assert_eq!(tags_only.into_inner(), vec![(Tag, "pg".to_string())]);
}

#[test]
fn listeners_run_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&order);
    let second = Rc::clone(&order);
    let mut cursor = Cursor::new("@pg\n");
    cursor.register(FnListener::new(move |_kind, _value: &str| {
        first.borrow_mut().push("first");
    }));
    cursor.register(FnListener::new(move |_kind, _value: &str| {
        second.borrow_mut().push("second");
    }));
    start_parse(&mut cursor).unwrap();
    drop(cursor);

    // Two events (Tag + EndOfInput), each notified in registration order.
    assert_eq!(
        *order.borrow(),
        vec!["first", "second", "first", "second"]
    );
}

#[test]
fn unregistered_listener_goes_quiet() {
    let log = EventLog::shared();
    let mut cursor = Cursor::new(PAGE_LABEL);
    let id = cursor.register(Rc::clone(&log));
    cursor.unregister(id);
    start_parse(&mut cursor).unwrap();
    drop(cursor);

    assert!(log.borrow().events.is_empty());
}

#[test]
fn ast_builder_and_generator_share_one_pass() {
    let builder = Rc::new(RefCell::new(AstBuilder::new()));
    let generator = Rc::new(RefCell::new(WebGalGen::new()));

    let mut cursor = Cursor::new(SCENE);
    cursor.register(Rc::clone(&builder));
    cursor.register(Rc::clone(&generator));
    start_parse(&mut cursor).unwrap();
    drop(cursor);

    assert!(!builder.borrow().nodes().is_empty());
    assert!(generator.borrow().output().starts_with(':'));
}

#[test]
fn fresh_cursors_over_the_same_text_emit_identical_events() {
    let first = collect_events(SCENE);
    let second = collect_events(SCENE);
    assert_eq!(first, second);
}
