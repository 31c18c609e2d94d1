use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::SiteResult;
use crate::utils::path::has_extension;

/// A markdown file discovered under the pages directory
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownSource {
    /// Full path to the file
    pub path: PathBuf,
    /// Path relative to the pages directory; the basis of the default slug
    pub relative_path: PathBuf,
}

/// Collect every markdown file under the pages directory, at any depth
///
/// Entries are visited depth-first in file name order.
pub fn collect_markdown_files(pages_dir: &Path) -> SiteResult<Vec<MarkdownSource>> {
    debug!("Collecting markdown files in {}", pages_dir.display());
    let mut sources = Vec::new();

    let walker = WalkDir::new(pages_dir)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() || !has_extension(path, "md") {
            continue;
        }

        let relative_path = path.strip_prefix(pages_dir).unwrap_or(path).to_path_buf();
        sources.push(MarkdownSource {
            path: path.to_path_buf(),
            relative_path,
        });
    }

    debug!("Collected {} markdown files", sources.len());

    Ok(sources)
}
