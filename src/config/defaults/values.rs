use std::path::PathBuf;

/// Default workspace root
pub fn default_workspace_root() -> PathBuf {
    PathBuf::from(".")
}

/// Default project, loaded from `projects/<name>`
pub fn default_project() -> String {
    "main".to_string()
}

/// Default static assets directory
pub fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Default output directory for `build`
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default image directory for `index`
pub fn default_images_dir() -> PathBuf {
    PathBuf::from("public/img")
}

/// Default output file for `index`
pub fn default_images_index() -> PathBuf {
    PathBuf::from("public/folder.json")
}

/// Default host to bind to
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default port to listen on
pub fn default_port() -> u16 {
    3000
}

/// Default delay before reloading after a change, in milliseconds
pub fn default_watch_debounce_ms() -> u64 {
    500
}
