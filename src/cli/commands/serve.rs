use log::info;

use crate::builder::site::{load_site, SiteHandle};
use crate::config::Config;
use crate::server::{self, ServerConfig};
use crate::utils::error::BoxResult;

/// Handle the serve command
pub async fn handle_serve_command(
    mut config: Config,
    host: Option<&String>,
    port: Option<u16>,
    watch: bool,
) -> BoxResult<()> {
    // Command line options take precedence over the config file
    if let Some(host) = host {
        config.server.host = host.clone();
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if watch {
        config.server.watch = true;
    }

    info!("Starting server...");
    let site = load_site(&config)?;
    for page in site.pages() {
        info!("  - /{} ({})", page.slug, page.template);
    }

    let server_config = ServerConfig::from_config(&config);
    server::serve(&server_config, &config, SiteHandle::new(site)).await
}
