use comrak::Options;

/// Create ComrakOptions for site content
///
/// GitHub Flavored Markdown, a line break on every newline, heading ids,
/// and raw HTML passed through untouched (no tag filter, no sanitizing).
pub fn create_comrak_options() -> Options<'static> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = false;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());

    // Render options
    options.render.hardbreaks = true;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true;

    // Parse options
    options.parse.smart = false;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    comrak::markdown_to_html(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options();
        let html = render_markdown("# Hello, World!\n\nThis is a **bold** statement.", &options);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_newlines_become_line_breaks() {
        let options = create_comrak_options();
        let html = render_markdown("first line\nsecond line", &options);

        assert!(html.contains("first line<br />"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let options = create_comrak_options();
        let html = render_markdown("<div class=\"hero\">\n<script>go()</script>\n</div>\n", &options);

        assert!(html.contains("<div class=\"hero\">"));
        assert!(html.contains("<script>go()</script>"));
    }

    #[test]
    fn test_gfm_tables() {
        let options = create_comrak_options();
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n", &options);

        assert!(html.contains("<table>"));
    }
}
