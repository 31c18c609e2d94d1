use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::builder::template::model::{Template, TemplateMap};
use crate::front_matter::{self, Metadata};
use crate::includes::resolve_template_includes;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::path::{get_stem, has_extension};

/// Name of the templates directory inside a project
pub const TEMPLATES_DIR: &str = "templates";

/// Load the `*.md` templates sitting directly in `<project>/templates`
///
/// Subdirectories are not searched. A missing directory yields an empty map.
pub fn load_templates(project_dir: &Path, markdown: &MarkdownRenderer) -> SiteResult<TemplateMap> {
    let templates_dir = project_dir.join(TEMPLATES_DIR);
    let mut templates = TemplateMap::new();

    if !templates_dir.is_dir() {
        info!("No templates directory at {}", templates_dir.display());
        return Ok(templates);
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(&templates_dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, "md") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        let name = match get_stem(&path) {
            Some(name) => name,
            None => continue,
        };

        debug!("Loading template {} from {}", name, path.display());
        let template = load_template(&path, &templates_dir, markdown)?;
        templates.insert(name, template);
    }

    Ok(templates)
}

/// Load a single template file
pub fn load_template(path: &Path, templates_dir: &Path, markdown: &MarkdownRenderer) -> SiteResult<Template> {
    let raw = fs::read_to_string(path).map_err(|e| SiteError::from(e).in_file(path))?;
    let (metadata, body): (Metadata, String) =
        front_matter::split(&raw).map_err(|e| SiteError::Template(e.to_string()).in_file(path))?;

    // Templates already hold HTML and placeholders, so only the includes
    // go through markdown
    let html = resolve_template_includes(&body, templates_dir, markdown);

    Ok(Template {
        metadata,
        ..Template::new(html)
    })
}
