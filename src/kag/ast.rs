//! Script AST nodes and the listener that builds them.
//!
//!     The scanner emits a flat stream of token events; the AST is a
//!     downstream concern layered on the listener interface. [AstBuilder]
//!     folds the stream into a node list, attaching inline tags to the prose
//!     run they appear in.
//!
//!     The serialized form tags each node with a `type` field, so the JSON
//!     shape matches the script objects the WebGAL tooling consumes.

use crate::kag::error::ParseError;
use crate::kag::listener::TokenListener;
use crate::kag::scan::parse_events;
use crate::kag::token::{TokenEvent, TokenKind};
use serde::{Deserialize, Serialize};

/// A directive, from either the `@` line form or the `[` bracket form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
}

/// A prose run together with the tags embedded in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    pub tags: Vec<Tag>,
}

/// One segment of a page marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Top-level script node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Tag(Tag),
    Text(Text),
    Label(Label),
}

impl Node {
    /// Returns the prose when this node is a text run.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the directive when this node is a standalone tag.
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Node::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns the label when this node is a page marker segment.
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Node::Label(label) => Some(label),
            _ => None,
        }
    }
}

/// Builds a node list from the token event stream.
///
/// Token events carry no distinction between the `@` and `[` directive
/// forms, so a `Tag` event is attached to the preceding `Text` node exactly
/// when that text does not yet end in a line break, i.e. the tag sits inline
/// in the prose. Every other tag becomes a standalone node.
#[derive(Debug, Default)]
pub struct AstBuilder {
    nodes: Vec<Node>,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl TokenListener for AstBuilder {
    fn on_token(&mut self, event: &TokenEvent) {
        match event.kind {
            TokenKind::Text => self.nodes.push(Node::Text(Text {
                text: event.value.clone(),
                tags: Vec::new(),
            })),
            TokenKind::Tag => {
                let inline = matches!(
                    self.nodes.last(),
                    Some(Node::Text(text)) if !text.text.ends_with('\n')
                );
                if inline {
                    if let Some(Node::Text(text)) = self.nodes.last_mut() {
                        text.tags.push(Tag {
                            text: event.value.clone(),
                        });
                        return;
                    }
                }
                self.nodes.push(Node::Tag(Tag {
                    text: event.value.clone(),
                }));
            }
            TokenKind::Label => self.nodes.push(Node::Label(Label {
                name: event.value.clone(),
            })),
            TokenKind::EndOfInput => {}
        }
    }
}

/// Parse `source` straight to script nodes.
pub fn parse_to_ast(source: &str) -> Result<Vec<Node>, ParseError> {
    let events = parse_events(source)?;
    let mut builder = AstBuilder::new();
    for event in &events {
        builder.on_token(event);
    }
    Ok(builder.into_nodes())
}
