use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::warn;
use walkdir::{DirEntry, WalkDir};

use crate::indexer::structures::{FolderRef, TreeNode};
use crate::utils::error::SiteResult;

/// File name skipped everywhere
const IGNORED_FILE: &str = ".DS_Store";

fn is_ignored(name: &str) -> bool {
    name == IGNORED_FILE
}

/// Build the folder tree under `dir`, entries sorted by name
pub fn build_tree(dir: &Path) -> SiteResult<TreeNode> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?);
    }
    entries.sort_by_key(|e| e.file_name());

    let mut children = Vec::with_capacity(entries.len());
    for entry in entries {
        let child_name = entry.file_name().to_string_lossy().into_owned();
        if is_ignored(&child_name) {
            continue;
        }

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            children.push(build_tree(&entry.path())?);
        } else if file_type.is_file() {
            children.push(TreeNode::File { name: child_name });
        }
    }

    Ok(TreeNode::Folder { name, children })
}

/// Build the folder-to-files and file-to-folder maps
///
/// Files sitting directly in `root` are left out of both.
pub fn build_maps(
    root: &Path,
) -> SiteResult<(BTreeMap<String, Vec<String>>, BTreeMap<String, FolderRef>)> {
    let mut flat: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut paths: BTreeMap<String, FolderRef> = BTreeMap::new();

    let walker = WalkDir::new(root)
        .min_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(folder) = folder_of(&entry, root) else {
            continue;
        };
        let file_name = entry.file_name().to_string_lossy().into_owned();

        flat.entry(folder.clone()).or_default().push(file_name.clone());

        match paths.entry(file_name) {
            Entry::Vacant(slot) => {
                slot.insert(FolderRef::Single(folder));
            }
            Entry::Occupied(mut slot) => {
                warn!(
                    "Duplicate filename \"{}\" in {}, its folders will be stored as a list",
                    slot.key(),
                    root.join(&folder).display()
                );
                slot.get_mut().push(folder);
            }
        }
    }

    Ok((flat, paths))
}

/// `/`-separated path of the entry's folder, relative to `root`
fn folder_of(entry: &DirEntry, root: &Path) -> Option<String> {
    let parent = entry.path().parent()?.strip_prefix(root).ok()?;
    let segments: Vec<String> = parent
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_tree_skips_ds_store() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        touch(&root, "b.png");
        touch(&root, ".DS_Store");
        touch(&root, "art/a.png");
        touch(&root, "art/.DS_Store");

        let tree = build_tree(&root).unwrap();

        assert_eq!(
            tree,
            TreeNode::Folder {
                name: "img".to_string(),
                children: vec![
                    TreeNode::Folder {
                        name: "art".to_string(),
                        children: vec![TreeNode::File { name: "a.png".to_string() }],
                    },
                    TreeNode::File { name: "b.png".to_string() },
                ],
            }
        );
    }

    #[test]
    fn test_maps_exclude_root_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        touch(&root, "loose.png");
        touch(&root, "art/a.png");
        touch(&root, "art/b.png");
        touch(&root, "art/old/c.png");

        let (flat, paths) = build_maps(&root).unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat["art"], vec!["a.png", "b.png"]);
        assert_eq!(flat["art/old"], vec!["c.png"]);
        assert_eq!(paths["c.png"], FolderRef::Single("art/old".to_string()));
        assert!(!paths.contains_key("loose.png"));
    }

    #[test]
    fn test_duplicate_names_become_lists() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        touch(&root, "a/cover.png");
        touch(&root, "b/cover.png");

        let (_, paths) = build_maps(&root).unwrap();

        assert_eq!(
            paths["cover.png"],
            FolderRef::Many(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_empty_folders_not_in_flat() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        fs::create_dir_all(root.join("empty")).unwrap();

        let (flat, paths) = build_maps(&root).unwrap();

        assert!(flat.is_empty());
        assert!(paths.is_empty());
    }
}
