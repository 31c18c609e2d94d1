pub mod page;
pub mod site;
pub mod template;
pub mod watcher;
