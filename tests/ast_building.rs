//! Integration tests for AST construction from the token event stream.

use kag_parser::kag::testing::{collect_events, PAGE_LABEL, SCENE};
use kag_parser::kag::{parse_to_ast, Node};

#[test]
fn page_label_event_stream_snapshot() {
    insta::assert_debug_snapshot!(collect_events(PAGE_LABEL), @r###"
    [
        TokenEvent {
            kind: Label,
            value: "page1",
        },
        TokenEvent {
            kind: EndOfInput,
            value: "",
        },
    ]
    "###);
}

#[test]
fn scene_ast_shape() {
    let nodes = parse_to_ast(SCENE).unwrap();

    // Two label segments, six standalone directives, and four text runs
    // (the bare line-break run before @sestop is its own node).
    let labels: Vec<&str> = nodes
        .iter()
        .filter_map(|n| n.as_label())
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(labels, vec!["page0", "&f.scripttitle"]);

    let tags: Vec<&Node> = nodes.iter().filter(|n| n.as_tag().is_some()).collect();
    assert_eq!(tags.len(), 6);

    let texts: Vec<&Node> = nodes.iter().filter(|n| n.as_text().is_some()).collect();
    assert_eq!(texts.len(), 4);

    let first_text = nodes
        .iter()
        .find_map(|n| n.as_text())
        .expect("scene has prose");
    assert_eq!(first_text.text, "　经过长途跋涉，到达了郊外的森林。");
    assert_eq!(first_text.tags.len(), 1);
    assert_eq!(first_text.tags[0].text, "lr");
}

#[test]
fn inline_tags_attach_but_line_directives_do_not() {
    let nodes = parse_to_ast("prose[lr]\n@pg\n").unwrap();
    assert_eq!(nodes.len(), 3);

    let prose = nodes[0].as_text().unwrap();
    assert_eq!(prose.text, "prose");
    assert_eq!(prose.tags[0].text, "lr");

    // The line break after [lr] is its own (tagless) run, and @pg stands
    // alone because that run ends in a newline.
    let gap = nodes[1].as_text().unwrap();
    assert_eq!(gap.text, "\n");
    assert!(gap.tags.is_empty());

    assert_eq!(nodes[2].as_tag().unwrap().text, "pg");
}

#[test]
fn ast_round_trips_through_json() {
    let nodes = parse_to_ast(SCENE).unwrap();
    let json = serde_json::to_string(&nodes).unwrap();
    let back: Vec<Node> = serde_json::from_str(&json).unwrap();
    assert_eq!(nodes, back);
}
