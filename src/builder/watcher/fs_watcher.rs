use std::path::Path;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

use log::{debug, error, info};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Result as NotifyResult, Watcher};

use crate::builder::site::SiteHandle;
use crate::config::Config;
use crate::utils::error::SiteResult;
use crate::utils::path::has_extension;

/// Watch the project's markdown sources and reload the site when they change
///
/// The returned watcher must be kept alive for as long as watching should last.
pub fn watch_site(config: &Config, handle: &SiteHandle) -> SiteResult<RecommendedWatcher> {
    let project_dir = config.project_dir();
    info!("Watching for markdown changes in {}", project_dir.display());

    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
        Ok(event) => {
            if is_relevant(&event) {
                tx.send(event).unwrap_or_else(|e| {
                    error!("Error sending file event: {}", e);
                });
            }
        }
        Err(e) => error!("Watch error: {}", e),
    })?;

    watcher.watch(&project_dir, RecursiveMode::Recursive)?;

    let config = config.clone();
    let handle = handle.clone();
    let debounce = Duration::from_millis(config.server.watch_debounce_ms);
    thread::spawn(move || handle_file_changes(rx, &config, &handle, debounce));

    Ok(watcher)
}

/// Only create, modify and remove events touching markdown files matter
fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| is_markdown(p))
}

fn is_markdown(path: &Path) -> bool {
    has_extension(path, "md")
}

/// Reload the site for each burst of file events
///
/// Returns once the sending side of the channel is gone.
pub fn handle_file_changes(rx: Receiver<Event>, config: &Config, handle: &SiteHandle, debounce: Duration) {
    while let Ok(event) = rx.recv() {
        debug!("File event: {:?}", event);

        // Let the burst settle, then fold it into one reload
        thread::sleep(debounce);
        while rx.try_recv().is_ok() {}

        info!("Markdown change detected, reloading site...");
        if let Err(e) = handle.reload(config) {
            error!("Error reloading site, keeping previous content: {}", e);
        }
    }

    debug!("File watcher channel closed");
}
