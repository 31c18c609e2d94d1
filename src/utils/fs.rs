use std::fs;
use std::path::Path;

use crate::utils::error::SiteResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    if path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/index.html");

        write_file(&target, "<p>hi</p>").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_remove_missing_directory_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_directory(dir.path().join("nope")).is_ok());
    }
}
