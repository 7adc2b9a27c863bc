//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Node statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of paragraphs rendered
    pub paragraph_count: u32,

    /// Number of headings rendered
    pub heading_count: u32,

    /// Number of lists rendered
    pub list_count: u32,

    /// Number of list items rendered
    pub list_item_count: u32,

    /// Number of text nodes rendered
    pub text_count: u32,

    /// Number of unrecognized blocks passed through without a tag
    pub passthrough_count: u32,

    /// Approximate word count of raw text (whitespace-separated tokens)
    pub word_count: u32,

    /// Characters of raw text, before escaping
    pub character_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment pass-through count.
    pub fn add_passthrough(&mut self) {
        self.passthrough_count += 1;
    }

    /// Count a text node and its words and characters.
    pub fn add_text(&mut self, text: &str) {
        self.text_count += 1;
        self.word_count += text.split_whitespace().count() as u32;
        self.character_count += text.chars().count() as u32;
    }

    /// Total number of nodes rendered.
    pub fn total_nodes(&self) -> u32 {
        self.paragraph_count
            + self.heading_count
            + self.list_count
            + self.list_item_count
            + self.text_count
            + self.passthrough_count
    }
}
