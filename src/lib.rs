//! # strapi-richtext
//!
//! Render Strapi rich-text block JSON into safe, well-formed HTML.
//!
//! The input is the array of block nodes a Strapi "blocks" field returns.
//! Rendering is a single recursive pass: text is HTML-escaped and wrapped in
//! its inline styles, paragraphs, headings, lists and list items get their
//! tags, and unrecognized block types pass their children through untagged.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! let content = json!([
//!     { "type": "heading", "level": 1, "children": [{ "type": "text", "text": "Hello" }] },
//!     { "type": "paragraph", "children": [
//!         { "type": "text", "text": "Fish & chips", "bold": true }
//!     ]}
//! ]);
//!
//! let html = strapi_richtext::render(&content);
//! assert_eq!(html, "<h1>Hello</h1><p><strong>Fish &amp; chips</strong></p>");
//! ```
//!
//! ## Robustness
//!
//! [`render`] never fails. A root that is not an array renders to an empty
//! string, missing attributes take their defaults, and malformed nodes
//! degrade to the most conservative output. Only the I/O helpers
//! ([`parse_file`], [`parse_reader`], ...) return errors, and only for I/O
//! failures or JSON that is not syntactically valid.

pub mod error;
pub mod model;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, HeadingLevel, ListFormat, Node, TextNode};
pub use render::{RenderOptions, RenderResult, RenderStats};

use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Render a rich-text JSON value to HTML.
///
/// Accepts any value. If it is not an array, the result is empty. Otherwise
/// each element is rendered in order and the results are concatenated.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use strapi_richtext::render;
///
/// let content = json!([{ "type": "list", "format": "ordered", "children": [
///     { "type": "list-item", "children": [{ "type": "text", "text": "a" }] }
/// ]}]);
/// assert_eq!(render(&content), "<ol><li>a</li></ol>");
/// assert_eq!(render(&json!({})), "");
/// ```
pub fn render(content: &Value) -> String {
    let doc = Document::from_value(content);
    render::to_html(&doc, &RenderOptions::default())
}

/// Parse a rich-text document from a JSON string.
///
/// Any JSON shape is accepted; only syntax errors fail.
///
/// # Example
///
/// ```
/// use strapi_richtext::parse_str;
///
/// let doc = parse_str(r#"[{"type":"paragraph","children":[]}]"#)?;
/// assert_eq!(doc.len(), 1);
/// # Ok::<(), strapi_richtext::Error>(())
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a rich-text document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse a rich-text document from a reader.
///
/// # Example
///
/// ```no_run
/// use strapi_richtext::parse_reader;
///
/// let doc = parse_reader(std::io::stdin().lock())?;
/// # Ok::<(), strapi_richtext::Error>(())
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a rich-text document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use strapi_richtext::parse_file;
///
/// let doc = parse_file("article.json")?;
/// println!("Nodes: {}", doc.node_count());
/// # Ok::<(), strapi_richtext::Error>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

/// Convert a rich-text JSON file to HTML with default options.
///
/// # Example
///
/// ```no_run
/// use strapi_richtext::to_html;
///
/// let html = to_html("article.json")?;
/// std::fs::write("article.html", html)?;
/// # Ok::<(), strapi_richtext::Error>(())
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_html(&doc, &RenderOptions::default()))
}

/// Convert a rich-text JSON file to HTML with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_html(&doc, options))
}
