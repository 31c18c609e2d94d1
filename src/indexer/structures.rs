use std::collections::BTreeMap;

use serde::Serialize;

/// A node of the image folder tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Folder { name: String, children: Vec<TreeNode> },
    File { name: String },
}

/// Folder(s) a file name was found in
///
/// A single folder serializes as a string, several as a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FolderRef {
    Single(String),
    Many(Vec<String>),
}

impl FolderRef {
    /// Record another folder holding the same file name
    pub fn push(&mut self, folder: String) {
        match self {
            FolderRef::Single(first) => {
                let first = std::mem::take(first);
                *self = FolderRef::Many(vec![first, folder]);
            }
            FolderRef::Many(folders) => folders.push(folder),
        }
    }
}

/// JSON index of an image folder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageIndex {
    /// Full folder tree
    pub tree: TreeNode,
    /// Sub-folder path to the file names it holds
    pub flat: BTreeMap<String, Vec<String>>,
    /// File name to the sub-folder(s) holding it
    pub path: BTreeMap<String, FolderRef>,
}
