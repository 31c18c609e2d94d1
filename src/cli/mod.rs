pub mod commands;
pub mod logging;
pub mod types;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;

use crate::config::{self, Config};
use crate::utils::error::BoxResult;

/// Run the command-line interface
pub async fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    if let Err(e) = dispatch(&cli).await {
        error!("{}", e);
        process::exit(1);
    }
}

async fn dispatch(cli: &types::Cli) -> BoxResult<()> {
    let config = load_cli_config(cli)?;

    match &cli.command {
        // Serving is the default
        Some(types::Commands::Serve) | None => {
            commands::handle_serve_command(config, cli.host.as_ref(), cli.port, cli.watch).await
        }
        Some(types::Commands::Build { destination, clean }) => {
            commands::handle_build_command(config, destination.as_ref(), *clean)
        }
        Some(types::Commands::Index { images, output }) => {
            commands::handle_index_command(&config, images.as_ref(), output.as_ref())
        }
        Some(types::Commands::Pages { json }) => commands::handle_pages_command(&config, *json),
    }
}

/// Load the configuration, then apply the global command line overrides
fn load_cli_config(cli: &types::Cli) -> BoxResult<Config> {
    let workspace_root = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&workspace_root, cli.config.clone())?;

    if let Some(project) = &cli.project {
        config.project = project.clone();
        config::validate_config(&config)?;
    }

    Ok(config)
}
