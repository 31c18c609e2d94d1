use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Markdown personal site server", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Project to load from projects/<NAME>
    #[arg(long, value_name = "NAME", env = "FOLIO_PROJECT")]
    pub project: Option<String>,

    /// Custom configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Host to bind to
    #[arg(short = 'H', long, value_name = "HOST", global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short = 'P', long, value_name = "PORT", env = "PORT", global = true)]
    pub port: Option<u16>,

    /// Reload pages and templates when markdown files change
    #[arg(short = 'w', long, env = "FOLIO_WATCH", default_value_t = false, global = true)]
    pub watch: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the site locally (default)
    #[command(alias = "s", alias = "server")]
    Serve,

    /// Render every page to static HTML
    #[command(alias = "b")]
    Build {
        /// Destination directory (defaults to ./_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Remove the destination directory first
        #[arg(long, default_value_t = false)]
        clean: bool,
    },

    /// Write the JSON index of the image folder
    Index {
        /// Image directory (defaults to ./public/img)
        #[arg(short, long, value_name = "DIR")]
        images: Option<PathBuf>,

        /// Output file (defaults to ./public/folder.json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the loaded pages
    Pages {
        /// Print pages as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
