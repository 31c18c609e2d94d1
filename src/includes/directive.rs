use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::path::normalize_path;

lazy_static! {
    // {{include:'file.md'}} or {{include:"file.md"}}
    pub static ref INCLUDE_DIRECTIVE: Regex =
        Regex::new(r#"\{\{include:['"]([^'"]+)['"]\}\}"#).unwrap();
}

/// Marker left in place of an include whose target does not exist
pub fn not_found_marker(include_path: &str) -> String {
    format!("<!-- Include not found: {} -->", include_path)
}

/// Marker left in place of an include that could not be read
pub fn error_marker(include_path: &str) -> String {
    format!("<!-- Error including: {} -->", include_path)
}

/// Resolve an include path for a content page
///
/// A leading `/` anchors the path at the workspace root, anything else is
/// relative to the directory of the including file.
pub fn resolve_from_page(include_path: &str, current_file: &Path, workspace_root: &Path) -> PathBuf {
    let joined = match include_path.strip_prefix('/') {
        Some(rooted) => workspace_root.join(rooted.trim_start_matches('/')),
        None => current_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(include_path),
    };

    normalize_path(joined)
}

/// Resolve an include path for a template; always relative to the templates directory
pub fn resolve_from_templates(include_path: &str, templates_dir: &Path) -> PathBuf {
    normalize_path(templates_dir.join(include_path.trim_start_matches('/')))
}
