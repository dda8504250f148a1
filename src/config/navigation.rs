//! `[navigation]` section configuration.

use crate::navigation::NavigationLink;
use serde::{Deserialize, Serialize};

/// `[navigation]` section in teseo.toml - the site's main menu.
///
/// # Example
/// ```toml
/// [navigation]
/// identifier = "main"
/// links = [
///   { name = "Home", url = "https://example.com/", description = "Start page" },
///   { name = "Blog", url = "https://example.com/blog" },
/// ]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    /// Used as the JSON-LD script id suffix.
    #[serde(default)]
    pub identifier: Option<String>,

    /// Menu entries in display order.
    #[serde(default)]
    pub links: Vec<NavigationLink>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_navigation_links() {
        let config: SiteConfig = toml::from_str(
            r#"
            [navigation]
            identifier = "main"
            links = [
              { name = "Home", url = "https://example.com/", description = "Start page" },
              { name = "Blog", url = "https://example.com/blog" },
            ]
        "#,
        )
        .unwrap();

        let nav = &config.navigation;
        assert_eq!(nav.identifier.as_deref(), Some("main"));
        assert_eq!(nav.links.len(), 2);
        assert_eq!(nav.links[0].description, "Start page");
        assert_eq!(nav.links[1].description, "");
    }

    #[test]
    fn test_navigation_link_unknown_field() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [navigation]
            links = [{ name = "Home", href = "/" }]
        "#,
        );
        assert!(result.is_err());
    }
}
