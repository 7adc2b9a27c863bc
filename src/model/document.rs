//! Document-level types.

use super::Node;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A rich-text document: the ordered sequence of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Top-level nodes in document order
    pub nodes: Vec<Node>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Build a document from an arbitrary JSON value.
    ///
    /// Only a JSON array is a document. Any other root yields an empty
    /// document, and array elements that are not objects are dropped.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self {
                nodes: items.iter().filter_map(Node::from_value).collect(),
            },
            other => {
                log::debug!(
                    "Rich-text root is {}, not an array; treating as empty",
                    value_kind(other)
                );
                Self::new()
            }
        }
    }

    /// Append a top-level node.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append a top-level node, builder style.
    pub fn with_node(mut self, node: Node) -> Self {
        self.add_node(node);
        self
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the document has no top-level nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::node_count).sum()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl From<&Value> for Document {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl<'de> Deserialize<'de> for Document {
    /// Accepts any JSON shape; only syntax errors fail.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListFormat;
    use serde_json::json;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.node_count(), 0);
    }

    #[test]
    fn test_from_value_non_array() {
        assert!(Document::from_value(&Value::Null).is_empty());
        assert!(Document::from_value(&json!({})).is_empty());
        assert!(Document::from_value(&json!("x")).is_empty());
        assert!(Document::from_value(&json!(12)).is_empty());
    }

    #[test]
    fn test_from_value_array() {
        let doc = Document::from_value(&json!([
            { "type": "paragraph", "children": [{ "type": "text", "text": "a" }] },
            null,
            "stray",
            { "type": "list", "format": "ordered", "children": [] }
        ]));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.nodes[0].kind(), "paragraph");
        assert_eq!(doc.nodes[1], Node::list(ListFormat::Ordered, vec![]));
        assert_eq!(doc.node_count(), 3);
    }

    #[test]
    fn test_deserialize_any_shape() {
        let doc: Document = serde_json::from_str(r#"{"type":"paragraph"}"#).unwrap();
        assert!(doc.is_empty());

        let doc: Document =
            serde_json::from_str(r#"[{"type":"heading","level":"x","children":[]}]"#).unwrap();
        assert_eq!(doc.nodes, vec![Node::heading(2, vec![])]);
    }

    #[test]
    fn test_deserialize_syntax_error() {
        assert!(serde_json::from_str::<Document>("[{").is_err());
    }

    #[test]
    fn test_builder() {
        let doc = Document::new()
            .with_node(Node::heading(1, vec![Node::text("Title")]))
            .with_node(Node::paragraph(vec![Node::text("Body")]));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.node_count(), 4);
    }
}
