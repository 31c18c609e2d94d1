mod collector;
mod loader;
mod model;
mod utils;

pub use loader::load_pages;
pub use model::{Page, DEFAULT_TEMPLATE};
pub use utils::assemble_page;
