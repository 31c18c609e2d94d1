//! Shared site state with atomic reload.
//!
//! Request handlers read the current [`Site`] without locking; the watcher
//! swaps in a freshly loaded one when sources change. Readers that loaded
//! the old site keep it alive until they finish.

use std::sync::Arc;

use arc_swap::ArcSwap;
use log::info;

use crate::builder::site::{load_site, Site};
use crate::config::Config;
use crate::utils::error::SiteResult;

/// Cloneable handle to the current site
#[derive(Clone)]
pub struct SiteHandle {
    inner: Arc<ArcSwap<Site>>,
}

impl SiteHandle {
    pub fn new(site: Site) -> Self {
        SiteHandle {
            inner: Arc::new(ArcSwap::from_pointee(site)),
        }
    }

    /// Current site; stays valid across later reloads
    #[inline]
    pub fn snapshot(&self) -> Arc<Site> {
        self.inner.load_full()
    }

    /// Replace the current site
    pub fn replace(&self, site: Site) {
        self.inner.store(Arc::new(site));
    }

    /// Reload pages and templates from disk
    ///
    /// On error the current site is kept.
    pub fn reload(&self, config: &Config) -> SiteResult<()> {
        let site = load_site(config)?;
        info!(
            "Reloaded {} pages and {} templates",
            site.page_count(),
            site.template_count()
        );
        self.replace(site);
        Ok(())
    }
}
