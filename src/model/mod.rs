//! Document model types for rich-text content.
//!
//! This module defines a typed, lenient view of the block JSON produced by
//! the CMS. Conversion from `serde_json::Value` never fails: unknown block
//! types become pass-through nodes and missing attributes take defaults.

mod document;
mod node;

pub use document::Document;
pub use node::{HeadingLevel, ListFormat, Node, TextNode};
