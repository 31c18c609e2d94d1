use std::path::PathBuf;

use serde::Serialize;

use crate::front_matter::Metadata;

/// Template used when a page does not name one
pub const DEFAULT_TEMPLATE: &str = "homeWithTopNav";

/// Navigation color used when a page does not set one
pub const DEFAULT_NAV_COLOR: &str = "black";

/// Layout class applied to the main element of every markdown page
pub const PAGE_MAIN_CLASS: &str = "pt-[75px] m-0";

/// A content page, loaded from one markdown file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// URL path segment identifying the page ("" for the home page)
    pub slug: String,

    /// Name of the template to render with
    pub template: String,

    /// Page title
    pub title: String,

    /// Navigation color scheme
    #[serde(rename = "navColor")]
    pub nav_color: String,

    /// Background image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Rendered body, includes resolved
    pub html: String,

    /// Class of the main layout element
    #[serde(rename = "mainClass")]
    pub main_class: String,

    /// Markdown file the page was loaded from
    #[serde(skip)]
    pub source: PathBuf,

    /// Front matter keys with no dedicated field
    #[serde(flatten)]
    pub extra: Metadata,
}
