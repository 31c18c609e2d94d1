use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,

    /// Reload pages and templates when a markdown file changes
    #[serde(default)]
    pub watch: bool,

    /// Quiet period before a reload, in milliseconds
    #[serde(default = "defaults::default_watch_debounce_ms")]
    pub watch_debounce_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: defaults::default_host(),
            port: defaults::default_port(),
            watch: false,
            watch_debounce_ms: defaults::default_watch_debounce_ms(),
        }
    }
}

/// Site configuration structure
///
/// Relative paths are taken from the workspace root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Workspace root; absolute includes resolve from here
    #[serde(default = "defaults::default_workspace_root")]
    pub workspace_root: PathBuf,

    /// Project to load from `projects/<name>`
    #[serde(default = "defaults::default_project")]
    pub project: String,

    /// Static assets directory
    #[serde(default = "defaults::default_public_dir")]
    pub public_dir: PathBuf,

    /// Output directory for rendered pages
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Image directory to index
    #[serde(default = "defaults::default_images_dir")]
    pub images_dir: PathBuf,

    /// Where to write the image index
    #[serde(default = "defaults::default_images_index")]
    pub images_index: PathBuf,

    /// Server settings
    #[serde(default)]
    pub server: ServerSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workspace_root: defaults::default_workspace_root(),
            project: defaults::default_project(),
            public_dir: defaults::default_public_dir(),
            destination: defaults::default_destination(),
            images_dir: defaults::default_images_dir(),
            images_index: defaults::default_images_index(),
            server: ServerSettings::default(),
        }
    }
}

impl Config {
    /// Resolve a configured path against the workspace root
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        }
    }

    /// Directory holding every project
    pub fn projects_dir(&self) -> PathBuf {
        self.workspace_root.join("projects")
    }

    /// Directory of the selected project
    pub fn project_dir(&self) -> PathBuf {
        self.projects_dir().join(&self.project)
    }

    /// Directory of the selected project's markdown pages
    pub fn pages_dir(&self) -> PathBuf {
        self.project_dir().join("pages")
    }

    /// Static assets directory
    pub fn public_path(&self) -> PathBuf {
        self.resolve(&self.public_dir)
    }
}
