// Module declarations
mod builder;
mod cli;
mod config;
mod front_matter;
mod includes;
mod indexer;
mod layout;
mod markdown;
mod server;
mod utils;

#[tokio::main]
async fn main() {
    // Run the CLI
    cli::run().await;
}
