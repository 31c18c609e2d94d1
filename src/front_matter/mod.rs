pub mod parser;
pub mod types;

// Re-export the most common items for convenience
pub use parser::{has_front_matter, split, strip};
pub use types::{FrontMatter, Metadata};
