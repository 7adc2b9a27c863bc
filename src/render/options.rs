//! Rendering options and configuration.

use crate::model::HeadingLevel;

/// Options for rendering a rich-text document to HTML.
///
/// The defaults reproduce the standard output exactly; [`crate::render()`]
/// always uses them.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum heading level (1-6); deeper headings are capped to it
    pub max_heading_level: u8,

    /// Collect node statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(HeadingLevel::MIN, HeadingLevel::MAX);
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: HeadingLevel::MAX,
            collect_stats: false,
        }
    }
}
