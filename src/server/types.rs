use std::path::PathBuf;

use crate::builder::site::SiteHandle;

/// State shared with request handlers
#[derive(Clone)]
pub struct AppState {
    /// Current site, swapped on reload
    pub site: SiteHandle,

    /// Directory of static assets
    pub public_dir: PathBuf,

    /// Directory holding every project, served under `/projects`
    pub projects_dir: PathBuf,
}
