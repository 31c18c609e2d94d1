mod loader;
mod model;

pub use loader::load_templates;
pub use model::{Template, TemplateMap};
