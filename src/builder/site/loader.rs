use log::info;

use crate::builder::page::load_pages;
use crate::builder::site::Site;
use crate::builder::template::load_templates;
use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::SiteResult;

/// Load every page and template of the configured project
pub fn load_site(config: &Config) -> SiteResult<Site> {
    let markdown = MarkdownRenderer::new();
    let project_dir = config.project_dir();

    info!("Loading markdown pages...");
    let pages = load_pages(&config.pages_dir(), &config.workspace_root, &markdown)?;
    info!("Loaded {} markdown pages", pages.len());

    info!("Loading templates...");
    let templates = load_templates(&project_dir, &markdown)?;
    info!("Loaded {} templates", templates.len());

    Ok(Site::new(pages, templates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_site_from_project() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("projects/main");
        fs::create_dir_all(project.join("pages/blog")).unwrap();
        fs::create_dir_all(project.join("templates")).unwrap();
        fs::create_dir_all(dir.path().join("shared")).unwrap();

        fs::write(project.join("pages/index.md"), "---\nslug: \"\"\ntitle: Home\n---\n# Hi\n").unwrap();
        fs::write(
            project.join("pages/blog/first.md"),
            "Intro\n\n{{include:'/shared/footer.md'}}\n",
        )
        .unwrap();
        fs::write(dir.path().join("shared/footer.md"), "bye").unwrap();
        fs::write(project.join("templates/homeWithTopNav.md"), "<main>{{main}}</main>").unwrap();

        let config = Config {
            workspace_root: dir.path().to_path_buf(),
            ..Config::default()
        };
        let site = load_site(&config).unwrap();

        assert_eq!(site.page_count(), 2);
        assert_eq!(site.template_count(), 1);
        assert_eq!(site.page("").unwrap().title, "Home");

        let post = site.page("blog/first").unwrap();
        assert!(post.html.contains("<p>bye</p>"));
        assert_eq!(post.template, "homeWithTopNav");
    }

    #[test]
    fn test_load_site_without_project() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            workspace_root: dir.path().to_path_buf(),
            ..Config::default()
        };

        let site = load_site(&config).unwrap();

        assert_eq!(site.page_count(), 0);
        assert_eq!(site.template_count(), 0);
    }
}
