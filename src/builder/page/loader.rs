use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::builder::page::collector::{collect_markdown_files, MarkdownSource};
use crate::builder::page::model::Page;
use crate::builder::page::utils::assemble_page;
use crate::front_matter::{self, FrontMatter};
use crate::includes::resolve_page_includes;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{SiteError, SiteResult};

/// Load every markdown page under `pages_dir`
///
/// A missing directory means there is no content yet and yields no pages.
/// Any page that fails to load aborts the whole pass.
pub fn load_pages(
    pages_dir: &Path,
    workspace_root: &Path,
    markdown: &MarkdownRenderer,
) -> SiteResult<Vec<Page>> {
    if !pages_dir.is_dir() {
        info!("No pages directory at {}", pages_dir.display());
        return Ok(Vec::new());
    }

    let sources = collect_markdown_files(pages_dir)?;
    let mut pages = Vec::with_capacity(sources.len());

    for source in &sources {
        pages.push(load_page(source, workspace_root, markdown)?);
    }

    Ok(pages)
}

/// Load a single markdown page
pub fn load_page(
    source: &MarkdownSource,
    workspace_root: &Path,
    markdown: &MarkdownRenderer,
) -> SiteResult<Page> {
    debug!("Loading page {}", source.path.display());

    let raw = fs::read_to_string(&source.path).map_err(|e| SiteError::from(e).in_file(&source.path))?;
    let (front_matter, body): (FrontMatter, String) =
        front_matter::split(&raw).map_err(|e| e.in_file(&source.path))?;

    // Each page gets a fresh visited set
    let mut visited = HashSet::new();
    let expanded = resolve_page_includes(&body, &source.path, workspace_root, &mut visited);
    let html = markdown.render(&expanded);

    Ok(assemble_page(front_matter, html, &source.relative_path, &source.path))
}
