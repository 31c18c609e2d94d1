mod handle;
mod loader;
mod snapshot;

pub use handle::SiteHandle;
pub use loader::load_site;
pub use snapshot::Site;
