use std::path::Path;

use crate::builder::page::model::{Page, DEFAULT_NAV_COLOR, DEFAULT_TEMPLATE, PAGE_MAIN_CLASS};
use crate::front_matter::FrontMatter;
use crate::utils::path::get_stem;

const RESERVED_KEYS: &[&str] = &["html", "mainClass"];

/// Derive a slug from a path relative to the pages directory
///
/// `blog/first-post.md` becomes `blog/first-post`.
pub fn default_slug(relative_path: &Path) -> String {
    let normalized = relative_path.to_string_lossy().replace('\\', "/");

    match normalized.strip_suffix(".md") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

/// Assemble a page record from its front matter and rendered body
pub fn assemble_page(front_matter: FrontMatter, html: String, relative_path: &Path, source: &Path) -> Page {
    // An explicit slug wins, even an empty one
    let slug = front_matter
        .slug
        .unwrap_or_else(|| default_slug(relative_path));

    let title = non_empty(front_matter.title)
        .or_else(|| get_stem(relative_path))
        .unwrap_or_default();

    // Keys the record sets itself are not passed through
    let mut extra = front_matter.extra;
    for key in RESERVED_KEYS {
        extra.remove(*key);
    }

    Page {
        slug,
        template: non_empty(front_matter.template).unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
        title,
        nav_color: non_empty(front_matter.nav_color).unwrap_or_else(|| DEFAULT_NAV_COLOR.to_string()),
        background: front_matter.background,
        html,
        main_class: PAGE_MAIN_CLASS.to_string(),
        source: source.to_path_buf(),
        extra,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_slug() {
        assert_eq!(default_slug(Path::new("about.md")), "about");
        assert_eq!(default_slug(Path::new("subroute/subpage.md")), "subroute/subpage");
        assert_eq!(default_slug(Path::new("a/b/c.md")), "a/b/c");
    }

    #[test]
    fn test_defaults_without_front_matter() {
        let page = assemble_page(
            FrontMatter::default(),
            "<p>x</p>\n".to_string(),
            Path::new("blog/post.md"),
            Path::new("/site/pages/blog/post.md"),
        );

        assert_eq!(page.slug, "blog/post");
        assert_eq!(page.template, DEFAULT_TEMPLATE);
        assert_eq!(page.title, "post");
        assert_eq!(page.nav_color, "black");
        assert_eq!(page.main_class, PAGE_MAIN_CLASS);
        assert_eq!(page.background, None);
        assert_eq!(page.source, PathBuf::from("/site/pages/blog/post.md"));
    }

    #[test]
    fn test_front_matter_overrides() {
        let mut front_matter = FrontMatter {
            slug: Some(String::new()),
            template: Some("plain".to_string()),
            title: Some("Home".to_string()),
            nav_color: Some("white".to_string()),
            background: Some("/img/x.png".to_string()),
            ..FrontMatter::default()
        };
        front_matter
            .extra
            .insert("hero".to_string(), serde_yaml::Value::Bool(true));
        front_matter
            .extra
            .insert("mainClass".to_string(), serde_yaml::Value::String("p-0".to_string()));

        let page = assemble_page(front_matter, String::new(), Path::new("index.md"), Path::new("index.md"));

        assert_eq!(page.slug, "");
        assert_eq!(page.template, "plain");
        assert_eq!(page.title, "Home");
        assert_eq!(page.nav_color, "white");
        assert_eq!(page.background.as_deref(), Some("/img/x.png"));
        assert_eq!(page.extra.get("hero"), Some(&serde_yaml::Value::Bool(true)));
        assert_eq!(page.main_class, PAGE_MAIN_CLASS);
        assert!(!page.extra.contains_key("mainClass"));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let front_matter = FrontMatter {
            template: Some(String::new()),
            title: Some(String::new()),
            nav_color: Some(String::new()),
            ..FrontMatter::default()
        };

        let page = assemble_page(front_matter, String::new(), Path::new("contact.md"), Path::new("contact.md"));

        assert_eq!(page.template, DEFAULT_TEMPLATE);
        assert_eq!(page.title, "contact");
        assert_eq!(page.nav_color, DEFAULT_NAV_COLOR);
    }
}
