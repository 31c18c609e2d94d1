use crate::builder::site::load_site;
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Handle the pages command
pub fn handle_pages_command(config: &Config, json: bool) -> BoxResult<()> {
    let site = load_site(config)?;
    let pages = site.pages();

    if json {
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    for page in pages {
        let marker = if site.templates().contains_key(&page.template) {
            ""
        } else {
            " [missing template]"
        };
        println!("/{}\t{}{}", page.slug, page.template, marker);
    }

    Ok(())
}
