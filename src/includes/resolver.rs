use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use regex::Captures;

use crate::front_matter;
use crate::includes::directive::{
    error_marker, not_found_marker, resolve_from_page, resolve_from_templates, INCLUDE_DIRECTIVE,
};
use crate::markdown::MarkdownRenderer;
use crate::utils::error::SiteResult;
use crate::utils::path::normalize_path;

/// Splice included files into a page body, recursively
///
/// `visited` holds every file already expanded under the current top-level
/// call. Reaching one of them again returns its content unexpanded, which
/// breaks include cycles. The caller owns the set and should start each page
/// with an empty one.
pub fn resolve_page_includes(
    content: &str,
    current_file: &Path,
    workspace_root: &Path,
    visited: &mut HashSet<PathBuf>,
) -> String {
    let current_file = normalize_path(current_file);

    if !visited.insert(current_file.clone()) {
        warn!("Circular include detected: {}", current_file.display());
        return content.to_string();
    }

    INCLUDE_DIRECTIVE
        .replace_all(content, |caps: &Captures| {
            let include_path = &caps[1];
            let resolved = resolve_from_page(include_path, &current_file, workspace_root);

            if !resolved.exists() {
                warn!(
                    "Include file not found: {} (resolved: {})",
                    include_path,
                    resolved.display()
                );
                return not_found_marker(include_path);
            }

            match read_include(&resolved) {
                Ok(body) => {
                    debug!("Including {} into {}", resolved.display(), current_file.display());
                    resolve_page_includes(&body, &resolved, workspace_root, visited)
                }
                Err(e) => {
                    error!("Error reading include file {}: {}", include_path, e);
                    error_marker(include_path)
                }
            }
        })
        .into_owned()
}

/// Splice included files into a template, rendering each one as markdown
///
/// Paths are always taken relative to `templates_dir`. Included files are
/// not scanned for further includes.
pub fn resolve_template_includes(
    content: &str,
    templates_dir: &Path,
    markdown: &MarkdownRenderer,
) -> String {
    INCLUDE_DIRECTIVE
        .replace_all(content, |caps: &Captures| {
            let include_path = &caps[1];
            let resolved = resolve_from_templates(include_path, templates_dir);

            if !resolved.exists() {
                warn!("Template include not found: {}", include_path);
                return not_found_marker(include_path);
            }

            match read_include(&resolved) {
                Ok(body) => markdown.render(&body),
                Err(e) => {
                    error!("Error reading template include {}: {}", include_path, e);
                    error_marker(include_path)
                }
            }
        })
        .into_owned()
}

/// Read an included file, dropping its front matter if it has any
fn read_include(path: &Path) -> SiteResult<String> {
    let content = fs::read_to_string(path)?;

    if front_matter::has_front_matter(&content) {
        return front_matter::strip(&content);
    }

    Ok(content)
}
