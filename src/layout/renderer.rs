use log::{debug, warn};

use crate::builder::page::{Page, DEFAULT_TEMPLATE};
use crate::builder::template::TemplateMap;

/// Title used when a page has none
const DEFAULT_TITLE: &str = "Page";

/// Main element class used when a page has none
const DEFAULT_MAIN_CLASS: &str = "p-8";

/// Render a page into a full HTML document using its template
///
/// An unknown template yields a minimal fallback document instead of an error.
pub fn render_page(page: &Page, templates: &TemplateMap) -> String {
    let template_name = if page.template.is_empty() {
        DEFAULT_TEMPLATE
    } else {
        page.template.as_str()
    };

    let template = match templates.get(template_name) {
        Some(template) => template,
        None => {
            warn!("Template '{}' not found for page '/{}'", template_name, page.slug);
            return fallback_document(template_name, &page.html);
        }
    };

    debug!("Rendering '/{}' with template '{}'", page.slug, template_name);
    apply_placeholders(&template.html, page)
}

/// Substitute the known placeholders, in order, every occurrence of each
///
/// Values are inserted as-is and unknown tokens are left in place.
pub fn apply_placeholders(template_html: &str, page: &Page) -> String {
    let title = if page.title.is_empty() {
        DEFAULT_TITLE
    } else {
        page.title.as_str()
    };

    let main_class = if page.main_class.is_empty() {
        DEFAULT_MAIN_CLASS
    } else {
        page.main_class.as_str()
    };

    template_html
        .replace("{{main}}", &page.html)
        .replace("{{title}}", title)
        .replace("{{navColorClass}}", nav_color_class(&page.nav_color))
        .replace("{{mainClass}}", main_class)
        .replace("{{backgroundStyle}}", &background_style(page.background.as_deref()))
}

/// Classes for the navigation bar
pub fn nav_color_class(nav_color: &str) -> &'static str {
    if nav_color == "black" {
        "bg-black text-white"
    } else {
        "bg-white text-black"
    }
}

/// Inline style attribute for a background image
pub fn background_style(background: Option<&str>) -> String {
    match background {
        Some(url) if !url.is_empty() => format!("style=\"background-image: url('{}');\"", url),
        _ => String::new(),
    }
}

/// Document served when the page's template is missing
pub fn fallback_document(template_name: &str, html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <title>Template Not Found</title>\n</head>\n<body>\n  <h1>Template \"{}\" not found</h1>\n  <div>{}</div>\n</body>\n</html>",
        template_name, html
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::page::assemble_page;
    use crate::builder::template::Template;
    use crate::front_matter::FrontMatter;
    use std::path::Path;

    fn page_with(front_matter: FrontMatter, html: &str) -> Page {
        assemble_page(front_matter, html.to_string(), Path::new("p.md"), Path::new("p.md"))
    }

    fn templates(name: &str, html: &str) -> TemplateMap {
        let mut map = TemplateMap::new();
        map.insert(name.to_string(), Template::new(html));
        map
    }

    #[test]
    fn test_default_nav_color() {
        let page = page_with(FrontMatter::default(), "<p>hi</p>");
        let map = templates("homeWithTopNav", "<body class=\"{{navColorClass}}\">{{main}}</body>");

        assert_eq!(
            render_page(&page, &map),
            "<body class=\"bg-black text-white\"><p>hi</p></body>"
        );
    }

    #[test]
    fn test_light_nav_color() {
        let page = page_with(
            FrontMatter {
                nav_color: Some("white".to_string()),
                ..FrontMatter::default()
            },
            "",
        );
        let map = templates("homeWithTopNav", "{{navColorClass}}");

        assert_eq!(render_page(&page, &map), "bg-white text-black");
    }

    #[test]
    fn test_background_style() {
        let with_bg = page_with(
            FrontMatter {
                background: Some("/img/x.png".to_string()),
                ..FrontMatter::default()
            },
            "",
        );
        let without_bg = page_with(FrontMatter::default(), "");
        let map = templates("homeWithTopNav", "<div {{backgroundStyle}}>");

        assert_eq!(
            render_page(&with_bg, &map),
            "<div style=\"background-image: url('/img/x.png');\">"
        );
        assert_eq!(render_page(&without_bg, &map), "<div >");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let page = page_with(
            FrontMatter {
                title: Some("About".to_string()),
                ..FrontMatter::default()
            },
            "",
        );
        let map = templates("homeWithTopNav", "{{title}}|{{title}}|{{mainClass}}");

        assert_eq!(render_page(&page, &map), "About|About|pt-[75px] m-0");
    }

    #[test]
    fn test_empty_fields_use_defaults() {
        let mut page = page_with(FrontMatter::default(), "");
        page.title = String::new();
        page.main_class = String::new();
        let map = templates("homeWithTopNav", "{{title}} {{mainClass}}");

        assert_eq!(render_page(&page, &map), "Page p-8");
    }

    #[test]
    fn test_unknown_placeholders_kept() {
        let page = page_with(FrontMatter::default(), "x");
        let map = templates("homeWithTopNav", "{{main}} {{footer}}");

        assert_eq!(render_page(&page, &map), "x {{footer}}");
    }

    #[test]
    fn test_missing_template_fallback() {
        let page = page_with(
            FrontMatter {
                template: Some("nope".to_string()),
                ..FrontMatter::default()
            },
            "<p>body</p>",
        );

        let html = render_page(&page, &TemplateMap::new());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Template \"nope\" not found</h1>"));
        assert!(html.contains("<div><p>body</p></div>"));
    }
}
