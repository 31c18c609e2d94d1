use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{SiteError, SiteResult};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load configuration for a workspace
///
/// Uses `config_file` when given, otherwise the first default config file
/// found in the workspace root, otherwise the built-in defaults.
pub fn load_config<P: AsRef<Path>>(workspace_root: P, config_file: Option<PathBuf>) -> SiteResult<Config> {
    let workspace_root = workspace_root.as_ref();

    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(workspace_root),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    // The workspace given on the command line wins unless the file set one
    if config.workspace_root == Path::new(".") {
        config.workspace_root = workspace_root.to_path_buf();
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in the workspace root
fn find_default_config_file(workspace_root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| workspace_root.join(name))
        .find(|path| path.is_file())
}

/// Parse a configuration file based on its extension
fn parse_config_file(config_path: &Path) -> SiteResult<Config> {
    let content = fs::read_to_string(config_path).map_err(|e| {
        SiteError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| {
            SiteError::Config(format!(
                "Failed to parse TOML configuration ({}): {}",
                config_path.display(),
                e
            ))
        }),
        // Assume YAML for anything else
        _ => {
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            serde_yaml::from_str(&content).map_err(|e| {
                SiteError::Config(format!(
                    "Failed to parse YAML configuration ({}): {}",
                    config_path.display(),
                    e
                ))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.workspace_root, dir.path());
        assert_eq!(config.project, "main");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_yaml_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "project: write\nserver:\n  watch: true\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.project, "write");
        assert!(config.server.watch);
    }

    #[test]
    fn test_toml_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "project = \"books\"\n\n[server]\nport = 4000\n").unwrap();

        let config = load_config(dir.path(), Some(path)).unwrap();

        assert_eq!(config.project, "books");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "server: [not, a, map]\n").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
    }
}
