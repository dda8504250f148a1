//! `<head>` markup for the configured site.

use crate::{
    config::SiteConfig,
    log,
    opengraph,
    render::{ToJsonLd, ToMetaTags},
    schemaorg::{self, BreadcrumbList, WebPage, log_validation_warnings},
    twittercard::TwitterCard,
};
use anyhow::Result;

/// OpenGraph, Twitter card, WebSite, WebPage and navigation markup, one block
/// per line.
///
/// Validation warnings of the JSON-LD entities are logged, never fatal.
pub fn render_head(config: &SiteConfig) -> Result<String> {
    let base = &config.base;
    let url = base.url_or_empty();

    let og = opengraph::WebSite::new(&base.title, url, &base.description, &base.image);
    let card = TwitterCard::summary(
        &base.title,
        &base.description,
        &base.image,
        &base.twitter,
        &base.twitter,
    );
    let page = WebPage {
        in_language: base.language.clone(),
        primary_image: base.image.clone(),
        ..WebPage::new(url, &base.title, &base.title, &base.description)
    };
    let site = schemaorg::WebSite::new(url, &base.title, &base.description, None);
    let navigation = config.navigation_list();

    let mut warnings = log_validation_warnings(&site) + log_validation_warnings(&page);
    let mut blocks = vec![
        og.to_meta_tags()?,
        card.to_meta_tags()?,
        site.to_json_ld()?,
        page.to_json_ld()?,
    ];
    // An unconfigured menu is skipped, not reported.
    if !navigation.is_empty() {
        warnings += log_validation_warnings(&navigation);
        blocks.push(navigation.to_json_ld()?);
    }
    if warnings > 0 {
        log!("head"; "{warnings} schema warnings");
    }
    Ok(blocks.join("\n"))
}

/// BreadcrumbList JSON-LD for `url`.
pub fn render_breadcrumb(url: &str) -> Result<String> {
    let breadcrumb = BreadcrumbList::from_url(url)?;
    log!("breadcrumb"; "{} items for {url}", breadcrumb.items.len());
    Ok(breadcrumb.to_json_ld()?)
}
