use std::net::SocketAddr;

use log::{error, info};
use tokio::signal;

use crate::builder::site::SiteHandle;
use crate::builder::watcher::watch_site;
use crate::config::Config;
use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::server::types::AppState;
use crate::utils::error::BoxResult;

/// Serve the site until the server stops or Ctrl+C is received
///
/// With watching enabled, markdown changes under the project reload the site.
pub async fn serve(server_config: &ServerConfig, config: &Config, site: SiteHandle) -> BoxResult<()> {
    // Dropping the watcher stops it, so it lives as long as the server
    let _watcher = if server_config.watch {
        Some(watch_site(config, &site)?)
    } else {
        None
    };

    let state = AppState {
        site,
        public_dir: config.public_path(),
        projects_dir: config.projects_dir(),
    };
    let app = create_app(state);

    let addr: SocketAddr = server_config.address_string().parse()?;

    info!("Serving static files from {}", config.public_path().display());
    print_server_banner(server_config);

    let server = axum_server::bind(addr).serve(app.into_make_service());

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(e.into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig) {
    println!("\n{}", "-".repeat(60));
    println!(" Folio Server");
    println!(" - URL: {}", server_config.url());
    println!(" - Watch: {}", if server_config.watch { "Enabled" } else { "Disabled" });
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
