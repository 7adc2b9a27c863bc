//! HTML rendering for rich-text documents.

use crate::model::{Document, Node, TextNode};

use super::{escape_html_into, RenderOptions, RenderResult, RenderStats};

/// Opening and closing tags for `<h1>` through `<h6>`.
const HEADING_TAGS: [(&str, &str); 6] = [
    ("<h1>", "</h1>"),
    ("<h2>", "</h2>"),
    ("<h3>", "</h3>"),
    ("<h4>", "</h4>"),
    ("<h5>", "</h5>"),
    ("<h6>", "</h6>"),
];

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
///
/// A single recursive pass over the tree. Text is escaped, recognized block
/// types are wrapped in their tag, and anything else contributes only its
/// children. Rendering cannot fail.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> String {
        self.render_internal(doc)
    }

    /// Render a document to HTML with node statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut output = String::new();
        self.render_nodes(&mut output, &doc.nodes);
        log::trace!(
            "Rendered {} top-level nodes into {} bytes of HTML",
            doc.len(),
            output.len()
        );
        output
    }

    fn render_nodes(&mut self, output: &mut String, nodes: &[Node]) {
        for node in nodes {
            self.render_node(output, node);
        }
    }

    fn render_node(&mut self, output: &mut String, node: &Node) {
        match node {
            Node::Text(run) => self.render_text(output, run),
            Node::Paragraph { children } => {
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                self.render_wrapped(output, "<p>", "</p>", children);
            }
            Node::Heading { level, children } => {
                if self.options.collect_stats {
                    self.stats.add_heading();
                }
                let level = level.get().min(self.options.max_heading_level).max(1);
                let (open, close) = HEADING_TAGS[usize::from(level) - 1];
                self.render_wrapped(output, open, close, children);
            }
            Node::List { format, children } => {
                if self.options.collect_stats {
                    self.stats.add_list();
                }
                let (open, close) = if format.is_ordered() {
                    ("<ol>", "</ol>")
                } else {
                    ("<ul>", "</ul>")
                };
                self.render_wrapped(output, open, close, children);
            }
            Node::ListItem { children } => {
                if self.options.collect_stats {
                    self.stats.add_list_item();
                }
                self.render_wrapped(output, "<li>", "</li>", children);
            }
            Node::Other { kind, children } => {
                log::debug!(
                    "Unrecognized block type {:?}, rendering {} children without a tag",
                    kind,
                    children.len()
                );
                if self.options.collect_stats {
                    self.stats.add_passthrough();
                }
                self.render_nodes(output, children);
            }
        }
    }

    fn render_wrapped(&mut self, output: &mut String, open: &str, close: &str, children: &[Node]) {
        output.push_str(open);
        self.render_nodes(output, children);
        output.push_str(close);
    }

    /// Bold wraps the text first, then italic, then underline, so the
    /// outermost tag is `<u>` and the innermost is `<strong>`.
    fn render_text(&mut self, output: &mut String, run: &TextNode) {
        if self.options.collect_stats {
            self.stats.add_text(&run.text);
        }

        if run.underline {
            output.push_str("<u>");
        }
        if run.italic {
            output.push_str("<em>");
        }
        if run.bold {
            output.push_str("<strong>");
        }

        escape_html_into(&run.text, output);

        if run.bold {
            output.push_str("</strong>");
        }
        if run.italic {
            output.push_str("</em>");
        }
        if run.underline {
            output.push_str("</u>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListFormat;

    fn html(nodes: Vec<Node>) -> String {
        to_html(&Document::from(nodes), &RenderOptions::default())
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(
            html(vec![Node::paragraph(vec![Node::text("Hello")])]),
            "<p>Hello</p>"
        );
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(html(vec![Node::paragraph(vec![])]), "<p></p>");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let out = html(vec![Node::heading(level, vec![Node::text("H")])]);
            assert_eq!(out, format!("<h{level}>H</h{level}>"));
        }
    }

    #[test]
    fn test_lists() {
        let items = || vec![Node::list_item(vec![Node::text("a")])];
        assert_eq!(
            html(vec![Node::list(ListFormat::Ordered, items())]),
            "<ol><li>a</li></ol>"
        );
        assert_eq!(
            html(vec![Node::list(ListFormat::Unordered, items())]),
            "<ul><li>a</li></ul>"
        );
    }

    #[test]
    fn test_passthrough() {
        let node = Node::Other {
            kind: "quote".to_string(),
            children: vec![Node::text("x"), Node::text("y")],
        };
        assert_eq!(html(vec![node]), "xy");
    }

    #[test]
    fn test_inline_styles() {
        let out = |run: TextNode| html(vec![Node::Text(run)]);
        assert_eq!(out(TextNode::new("b").bold()), "<strong>b</strong>");
        assert_eq!(out(TextNode::new("i").italic()), "<em>i</em>");
        assert_eq!(out(TextNode::new("u").underline()), "<u>u</u>");
        assert_eq!(
            out(TextNode::new("bi").bold().italic()),
            "<em><strong>bi</strong></em>"
        );
        assert_eq!(
            out(TextNode::new("iu").italic().underline()),
            "<u><em>iu</em></u>"
        );
        assert_eq!(
            out(TextNode::new("all").bold().italic().underline()),
            "<u><em><strong>all</strong></em></u>"
        );
    }

    #[test]
    fn test_text_escaped_inside_styles() {
        assert_eq!(
            html(vec![Node::Text(TextNode::new("<x>").bold())]),
            "<strong>&lt;x&gt;</strong>"
        );
    }

    #[test]
    fn test_max_heading_level_caps() {
        let doc = Document::from(vec![Node::heading(5, vec![Node::text("Deep")])]);
        let options = RenderOptions::new().with_max_heading(3);
        assert_eq!(to_html(&doc, &options), "<h3>Deep</h3>");
    }

    #[test]
    fn test_render_with_stats() {
        let doc = Document::from(vec![
            Node::heading(1, vec![Node::text("Title")]),
            Node::paragraph(vec![Node::text("two words"), Node::text("!")]),
            Node::list(
                ListFormat::Unordered,
                vec![Node::list_item(vec![Node::text("a")])],
            ),
            Node::Other {
                kind: "code".to_string(),
                children: vec![],
            },
        ]);

        let result = to_html_with_stats(&doc, &RenderOptions::default());
        assert_eq!(result.content, to_html(&doc, &RenderOptions::default()));
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.list_count, 1);
        assert_eq!(result.stats.list_item_count, 1);
        assert_eq!(result.stats.text_count, 4);
        assert_eq!(result.stats.passthrough_count, 1);
        assert_eq!(result.stats.word_count, 5);
        assert_eq!(result.stats.character_count, 16);
        assert_eq!(result.stats.total_nodes() as usize, doc.node_count());
    }

    #[test]
    fn test_stats_off_by_default() {
        let doc = Document::from(vec![Node::paragraph(vec![Node::text("x")])]);
        let mut renderer = HtmlRenderer::new(RenderOptions::default());
        let mut out = String::new();
        renderer.render_nodes(&mut out, &doc.nodes);
        assert_eq!(out, "<p>x</p>");
        assert_eq!(renderer.stats, RenderStats::default());
    }
}
