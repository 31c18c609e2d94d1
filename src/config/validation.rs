use log::{info, warn};

use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};

/// Validate the configuration
pub fn validate_config(config: &Config) -> SiteResult<()> {
    validate_workspace_root(config)?;
    validate_project(config)?;
    Ok(())
}

/// The workspace root must be an existing directory
fn validate_workspace_root(config: &Config) -> SiteResult<()> {
    let root = &config.workspace_root;

    if !root.exists() {
        return Err(SiteError::Config(format!(
            "Workspace root does not exist: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(SiteError::Config(format!(
            "Workspace root is not a directory: {}",
            root.display()
        )));
    }

    info!("Workspace root: {}", root.display());
    Ok(())
}

/// The project must be a single directory name; a missing one only warns
fn validate_project(config: &Config) -> SiteResult<()> {
    let name = &config.project;

    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SiteError::Config(format!("Invalid project name: '{}'", name)));
    }

    let project_dir = config.project_dir();
    if !project_dir.is_dir() {
        warn!(
            "Project directory does not exist, the site will be empty: {}",
            project_dir.display()
        );
        return Ok(());
    }

    info!("Project directory: {}", project_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_workspace_root() {
        let config = Config {
            workspace_root: PathBuf::from("/definitely/not/here"),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_project_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            workspace_root: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_project_name_cannot_escape() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["", "..", "a/b", "a\\b"] {
            let config = Config {
                workspace_root: dir.path().to_path_buf(),
                project: name.to_string(),
                ..Config::default()
            };
            assert!(validate_config(&config).is_err(), "accepted {:?}", name);
        }
    }
}
