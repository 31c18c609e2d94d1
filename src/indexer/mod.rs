//! JSON index of an image folder, for client-side galleries.

mod structures;
mod tree;

use std::path::Path;

use log::info;

use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs::write_file;

pub use structures::ImageIndex;

/// Index every image under `root`
pub fn index_images(root: &Path) -> SiteResult<ImageIndex> {
    if !root.is_dir() {
        return Err(SiteError::Generic(format!(
            "Image directory does not exist: {}",
            root.display()
        )));
    }

    let tree = tree::build_tree(root)?;
    let (flat, path) = tree::build_maps(root)?;

    Ok(ImageIndex { tree, flat, path })
}

/// Write the index as pretty-printed JSON
pub fn write_index(index: &ImageIndex, output: &Path) -> SiteResult<()> {
    let json = serde_json::to_string_pretty(index)
        .map_err(|e| SiteError::Generic(format!("Failed to serialize image index: {}", e)))?;
    write_file(output, &json)?;

    info!("Image index written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_index_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("img");
        fs::create_dir_all(root.join("trips")).unwrap();
        fs::write(root.join("trips/sea.jpg"), "").unwrap();

        let index = index_images(&root).unwrap();
        let output = dir.path().join("out/folder.json");
        write_index(&index, &output).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["tree"]["name"], "img");
        assert_eq!(json["tree"]["children"][0]["name"], "trips");
        assert_eq!(json["flat"]["trips"], serde_json::json!(["sea.jpg"]));
        assert_eq!(json["path"]["sea.jpg"], "trips");
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(index_images(&dir.path().join("nope")).is_err());
    }
}
