use comrak::Options;

use crate::markdown::engine::{create_comrak_options, render_markdown};

/// Markdown renderer shared by the page and template loaders
pub struct MarkdownRenderer {
    options: Options<'static>,
}

impl MarkdownRenderer {
    /// Create a renderer with the site's markdown dialect
    pub fn new() -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
        }
    }

    /// Render Markdown content to HTML
    pub fn render(&self, content: &str) -> String {
        render_markdown(content, &self.options)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Hello World!");

        assert_eq!(html, "<p>Hello World!</p>\n");
    }

    #[test]
    fn test_heading_ids() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## Section One");

        assert!(html.contains("id=\"section-one\""));
    }
}
