use std::collections::HashMap;

use log::warn;

use crate::builder::page::Page;
use crate::builder::template::TemplateMap;

/// Every page and template of one project, as loaded at a point in time
#[derive(Debug, Clone, Default)]
pub struct Site {
    pages: HashMap<String, Page>,
    templates: TemplateMap,
}

impl Site {
    /// Index pages by slug
    ///
    /// When two pages share a slug the one loaded last wins.
    pub fn new(pages: Vec<Page>, templates: TemplateMap) -> Self {
        let mut by_slug: HashMap<String, Page> = HashMap::with_capacity(pages.len());

        for page in pages {
            if let Some(previous) = by_slug.get(&page.slug) {
                warn!(
                    "Duplicate slug '{}': {} replaces {}",
                    page.slug,
                    page.source.display(),
                    previous.source.display()
                );
            }
            by_slug.insert(page.slug.clone(), page);
        }

        Site {
            pages: by_slug,
            templates,
        }
    }

    /// Look up a page by slug
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// All pages, ordered by slug
    pub fn pages(&self) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.values().collect();
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        pages
    }

    pub fn templates(&self) -> &TemplateMap {
        &self.templates
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}
