//! Integration tests for document loading, options and statistics.

use std::io::Write;

use strapi_richtext::render::{to_html, to_html_with_stats};
use strapi_richtext::{
    parse_file, parse_str, Document, Error, ListFormat, Node, RenderOptions, TextNode,
};
use tempfile::NamedTempFile;

const ARTICLE: &str = r#"[
    { "type": "heading", "level": 2, "children": [{ "type": "text", "text": "Intro" }] },
    { "type": "paragraph", "children": [
        { "type": "text", "text": "Hello " },
        { "type": "text", "text": "world", "bold": true }
    ]},
    { "type": "list", "format": "ordered", "children": [
        { "type": "list-item", "children": [{ "type": "text", "text": "one" }] },
        { "type": "list-item", "children": [{ "type": "text", "text": "two" }] }
    ]},
    { "type": "callout", "children": [{ "type": "text", "text": "note" }] }
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_file_and_render() {
    let file = write_temp(ARTICLE);
    let html = strapi_richtext::to_html(file.path()).unwrap();
    assert_eq!(
        html,
        "<h2>Intro</h2><p>Hello <strong>world</strong></p>\
         <ol><li>one</li><li>two</li></ol>note"
    );
}

#[test]
fn test_parse_file_matches_render_of_value() {
    let file = write_temp(ARTICLE);
    let doc = parse_file(file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(ARTICLE).unwrap();
    assert_eq!(
        to_html(&doc, &RenderOptions::default()),
        strapi_richtext::render(&value)
    );
}

#[test]
fn test_parse_file_invalid_json() {
    let file = write_temp("[{ \"type\": ");
    let result = parse_file(file.path());
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_to_html_with_options() {
    let file = write_temp(r#"[{ "type": "heading", "level": 6, "children": [] }]"#);
    let options = RenderOptions::new().with_max_heading(4);
    let html = strapi_richtext::to_html_with_options(file.path(), &options).unwrap();
    assert_eq!(html, "<h4></h4>");
}

#[test]
fn test_stats_for_article() {
    let doc = parse_str(ARTICLE).unwrap();
    let result = to_html_with_stats(&doc, &RenderOptions::default());

    assert_eq!(result.content, to_html(&doc, &RenderOptions::default()));
    let stats = &result.stats;
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.list_count, 1);
    assert_eq!(stats.list_item_count, 2);
    assert_eq!(stats.text_count, 6);
    assert_eq!(stats.passthrough_count, 1);
    assert_eq!(stats.word_count, 6);
    assert_eq!(stats.total_nodes() as usize, doc.node_count());
}

#[test]
fn test_stats_serialize() {
    let doc = parse_str(ARTICLE).unwrap();
    let result = to_html_with_stats(&doc, &RenderOptions::default());
    let json = serde_json::to_value(&result.stats).unwrap();
    assert_eq!(json["list_item_count"], 2);
    assert_eq!(json["passthrough_count"], 1);
}

#[test]
fn test_built_document_renders_like_json() {
    let doc = Document::new()
        .with_node(Node::heading(2, vec![Node::text("Intro")]))
        .with_node(Node::paragraph(vec![
            Node::text("Hello "),
            TextNode::new("world").bold().into(),
        ]))
        .with_node(Node::list(
            ListFormat::Ordered,
            vec![
                Node::list_item(vec![Node::text("one")]),
                Node::list_item(vec![Node::text("two")]),
            ],
        ))
        .with_node(Node::Other {
            kind: "callout".to_string(),
            children: vec![Node::text("note")],
        });

    assert_eq!(doc, parse_str(ARTICLE).unwrap());
}
