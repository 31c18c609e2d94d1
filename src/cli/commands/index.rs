use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::indexer::{index_images, write_index};
use crate::utils::error::BoxResult;

/// Handle the index command
pub fn handle_index_command(
    config: &Config,
    images: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> BoxResult<()> {
    let images = config.resolve(images.unwrap_or(&config.images_dir));
    let output = config.resolve(output.unwrap_or(&config.images_index));

    info!("Indexing images in {}", images.display());
    let index = index_images(&images)?;
    write_index(&index, &output)?;

    Ok(())
}
