//! `{{include:'path'}}` directives for pages and templates.

pub mod directive;
pub mod resolver;

pub use resolver::{resolve_page_includes, resolve_template_includes};
