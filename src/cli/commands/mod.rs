mod build;
mod index;
mod pages;
mod serve;

pub use build::handle_build_command;
pub use index::handle_index_command;
pub use pages::handle_pages_command;
pub use serve::handle_serve_command;
