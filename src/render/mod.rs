//! Rendering module for converting rich-text documents to HTML.

mod escape;
mod html;
mod options;
mod result;

pub use escape::{escape_html, escape_html_into};
pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
