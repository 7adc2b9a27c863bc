//! Node-level types for rich-text blocks and inline text.

use serde_json::{Map, Value};

/// A single node in a rich-text tree.
///
/// Recognized block types get their own variant. Any other `type` string is
/// kept as [`Node::Other`], which renders its children without a wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf text run
    Text(TextNode),

    /// A paragraph block
    Paragraph {
        /// Child nodes in document order
        children: Vec<Node>,
    },

    /// A heading block
    Heading {
        /// Resolved heading level
        level: HeadingLevel,
        /// Child nodes in document order
        children: Vec<Node>,
    },

    /// An ordered or unordered list
    List {
        /// List numbering format
        format: ListFormat,
        /// Child nodes (usually list items)
        children: Vec<Node>,
    },

    /// A list item
    ListItem {
        /// Child nodes in document order
        children: Vec<Node>,
    },

    /// Unrecognized block type, rendered as its children only
    Other {
        /// The original `type` tag (empty when missing or not a string)
        kind: String,
        /// Child nodes in document order
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode::new(text))
    }

    /// Create a paragraph with the given children.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    /// Create a heading. The level is clamped to 1-6.
    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Heading {
            level: HeadingLevel::new(level),
            children,
        }
    }

    /// Create a list with the given format.
    pub fn list(format: ListFormat, children: Vec<Node>) -> Self {
        Node::List { format, children }
    }

    /// Create a list item.
    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem { children }
    }

    /// Convert a JSON value into a node.
    ///
    /// Returns `None` for anything that is not a JSON object; such values
    /// contribute nothing to the output. Objects always convert: missing or
    /// mistyped attributes fall back to their defaults.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();

        if kind == "text" {
            return Some(Node::Text(TextNode::from_object(obj)));
        }

        let children = children_of(obj);
        let node = match kind {
            "paragraph" => Node::Paragraph { children },
            "heading" => Node::Heading {
                level: HeadingLevel::coerce(obj.get("level")),
                children,
            },
            "list" => Node::List {
                format: ListFormat::from_value(obj.get("format")),
                children,
            },
            "list-item" => Node::ListItem { children },
            other => Node::Other {
                kind: other.to_string(),
                children,
            },
        };
        Some(node)
    }

    /// The wire `type` tag of this node.
    pub fn kind(&self) -> &str {
        match self {
            Node::Text(_) => "text",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "list-item",
            Node::Other { kind, .. } => kind.as_str(),
        }
    }

    /// Child nodes. Always empty for text nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Other { children, .. } => children,
        }
    }

    /// Check if this node uses the pass-through fallback.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Node::Other { .. })
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }
}

/// Convert the `children` attribute; anything but an array yields no children.
fn children_of(obj: &Map<String, Value>) -> Vec<Node> {
    match obj.get("children") {
        Some(Value::Array(items)) => items.iter().filter_map(Node::from_value).collect(),
        _ => Vec::new(),
    }
}

/// A leaf run of text with optional inline styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    /// Raw, unescaped text
    pub text: String,

    /// Render inside `<strong>`
    pub bold: bool,

    /// Render inside `<em>`
    pub italic: bool,

    /// Render inside `<u>`
    pub underline: bool,
}

impl TextNode {
    /// Create an unstyled text node.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Mark the text as bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the text as italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Mark the text as underlined.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if any inline style is set.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline
    }

    fn from_object(obj: &Map<String, Value>) -> Self {
        let flag = |key: &str| obj.get(key).is_some_and(is_truthy);
        Self {
            text: obj.get("text").map(text_of).unwrap_or_default(),
            bold: flag("bold"),
            italic: flag("italic"),
            underline: flag("underline"),
        }
    }
}

impl From<TextNode> for Node {
    fn from(run: TextNode) -> Self {
        Node::Text(run)
    }
}

/// Textual form of a `text` attribute. Scalars keep their display form,
/// structured values and null become empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Loose truthiness used for style flags.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A heading level, always within 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Smallest heading level (`<h1>`).
    pub const MIN: u8 = 1;

    /// Largest heading level (`<h6>`).
    pub const MAX: u8 = 6;

    /// Level used when none is given or it cannot be read as a number.
    pub const DEFAULT: HeadingLevel = HeadingLevel(2);

    /// Create a heading level, clamping to 1-6.
    pub fn new(level: u8) -> Self {
        HeadingLevel(level.clamp(Self::MIN, Self::MAX))
    }

    /// Resolve an authored `level` attribute.
    ///
    /// The value is coerced to a number, rounded half away from zero and
    /// clamped to 1-6. Absent, null, and non-numeric values give the default.
    ///
    /// ```
    /// use serde_json::json;
    /// use strapi_richtext::model::HeadingLevel;
    ///
    /// assert_eq!(HeadingLevel::coerce(Some(&json!(99))).get(), 6);
    /// assert_eq!(HeadingLevel::coerce(Some(&json!("4"))).get(), 4);
    /// assert_eq!(HeadingLevel::coerce(Some(&json!("abc"))).get(), 2);
    /// assert_eq!(HeadingLevel::coerce(None).get(), 2);
    /// ```
    pub fn coerce(value: Option<&Value>) -> Self {
        match value.and_then(coerce_number) {
            Some(n) if !n.is_nan() => {
                let clamped = n.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
                HeadingLevel(clamped as u8)
            }
            _ => Self::DEFAULT,
        }
    }

    /// Numeric level.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Numeric reading of a JSON value. `None` means "not a number".
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric(s),
    }
}

fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // Rust's float parser also takes "inf" and "nan"; only plain decimals count here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// List numbering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListFormat {
    /// Numbered list (`<ol>`)
    Ordered,
    /// Bulleted list (`<ul>`)
    #[default]
    Unordered,
}

impl ListFormat {
    /// Read a `format` attribute. Only the exact string `"ordered"` is ordered.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("ordered") => ListFormat::Ordered,
            _ => ListFormat::Unordered,
        }
    }

    /// HTML tag name for this list.
    pub fn tag(self) -> &'static str {
        match self {
            ListFormat::Ordered => "ol",
            ListFormat::Unordered => "ul",
        }
    }

    /// Check if this is an ordered list.
    pub fn is_ordered(self) -> bool {
        matches!(self, ListFormat::Ordered)
    }
}
