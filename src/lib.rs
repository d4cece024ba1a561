//! # kag-parser
//!
//! A parser for KiriKiri KAG scenario scripts: the line-oriented visual-novel
//! scripting format made of page labels, engine directives, and narrative text
//! interspersed with inline tags.
//!
//! The parser is a hand-written single-pass scanner. A [Cursor](kag::Cursor)
//! carries the scan state, a small set of mutually recursive grammar rules
//! consume characters strictly forward (no backtracking), and every completed
//! token is announced to registered [listeners](kag::TokenListener).
//! Consumers such as the AST builder or the WebGAL generator are ordinary
//! listeners; the scanner knows nothing about them.
//!
//! Quick start:
//!
//! ```ignore
//! use kag_parser::kag::{parse_events, parse_to_ast};
//!
//! let events = parse_events("*page1|\n@se storage=se1.wav\n")?;
//! let nodes = parse_to_ast("hello[lr]world\n")?;
//! ```

#![allow(rustdoc::invalid_html_tags)]

pub mod kag;
