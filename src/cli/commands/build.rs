use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::builder::site::{load_site, Site};
use crate::config::Config;
use crate::layout::render_page;
use crate::utils::error::{BoxResult, SiteError, SiteResult};
use crate::utils::fs::{remove_directory, write_file};
use crate::utils::path::join_within;

/// Handle the build command
pub fn handle_build_command(mut config: Config, destination: Option<&PathBuf>, clean: bool) -> BoxResult<()> {
    if let Some(destination) = destination {
        config.destination = destination.clone();
    }
    let destination = config.resolve(&config.destination);

    if clean {
        if config.workspace_root.starts_with(&destination) {
            return Err(format!(
                "Refusing to clean {}, it contains the workspace",
                destination.display()
            )
            .into());
        }
        info!("Cleaning {}", destination.display());
        remove_directory(&destination)?;
    }

    info!("Building site...");
    let site = load_site(&config)?;
    let written = write_site(&site, &destination)?;
    info!("Site built successfully: {} pages written to {}", written, destination.display());

    Ok(())
}

/// Render every page to `<destination>/<slug>/index.html`
pub fn write_site(site: &Site, destination: &Path) -> SiteResult<usize> {
    let mut written = 0;

    for page in site.pages() {
        let dir = join_within(destination, &page.slug).ok_or_else(|| {
            SiteError::Generic(format!(
                "Slug '{}' escapes the destination ({})",
                page.slug,
                page.source.display()
            ))
        })?;
        let output = dir.join("index.html");

        debug!("Writing /{} to {}", page.slug, output.display());
        write_file(&output, &render_page(page, site.templates()))?;
        written += 1;
    }

    Ok(written)
}
