mod fs_watcher;

pub use fs_watcher::{handle_file_changes, watch_site};
