//! Site configuration management for `teseo.toml`.
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[base]`       | Site metadata (title, url, image, twitter)     |
//! | `[sitemap]`    | Sitemap output (enable, path)                  |
//! | `[navigation]` | Main menu links, rendered as JSON-LD / sitemap |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Example"
//! description = "An example site"
//! url = "https://example.com"
//!
//! [sitemap]
//! path = "public/sitemap.xml"
//!
//! [navigation]
//! identifier = "main"
//! links = [
//!   { name = "Home", url = "https://example.com/" },
//! ]
//! ```

mod base;
pub mod defaults;
mod error;
mod navigation;
mod sitemap;

pub use base::BaseConfig;
pub use error::ConfigError;
pub use navigation::NavigationConfig;
pub use sitemap::SitemapConfig;

use crate::{
    cli::Cli,
    navigation::{NavigationList, items_from_links},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing teseo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root; relative paths in the config resolve against it.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `cli.config` from the project root and apply CLI overrides.
    ///
    /// A missing config file yields the defaults, so `breadcrumb` and `read`
    /// work outside a configured project.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let path = root.join(&cli.config);

        let mut config = if path.exists() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };
        config.update_with_root(&root);
        Ok(config)
    }

    /// Resolve relative paths against `root`.
    pub fn update_with_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        if self.sitemap.path.is_relative() {
            self.sitemap.path = root.join(&self.sitemap.path);
        }
    }

    /// Check values that parse fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            return Err(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into(),
            ));
        }

        if let Some(position) = self.navigation.links.iter().position(|link| link.url.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "[navigation.links] entry {} is missing `url`",
                position + 1
            )));
        }

        Ok(())
    }

    /// Navigation links as a `NavigationList` with positions `1..=n`.
    pub fn navigation_list(&self) -> NavigationList {
        NavigationList::new(
            self.navigation.identifier.as_deref(),
            items_from_links(&self.navigation.links),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL: &str = r#"
        [base]
        title = "Example"
        description = "An example site"
        url = "https://example.com"

        [sitemap]
        path = "out/sitemap.xml"

        [navigation]
        identifier = "main"
        links = [
          { name = "Home", url = "https://example.com/", description = "Start page" },
          { name = "Blog", url = "https://example.com/blog" },
        ]
    "#;

    #[test]
    fn test_from_str_full() {
        let config = SiteConfig::from_str(FULL).unwrap();

        assert_eq!(config.base.title, "Example");
        assert_eq!(config.navigation.links.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_str_empty_uses_defaults() {
        let config = SiteConfig::from_str("").unwrap();

        assert!(config.sitemap.enable);
        assert!(config.navigation.links.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = SiteConfig::from_str("[build]\nminify = true").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teseo.toml");

        let err = SiteConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(p, _) if p == path));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("teseo.toml");
        fs::write(&path, FULL).unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.navigation.identifier.as_deref(), Some("main"));
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let config = SiteConfig::from_str("[base]\nurl = \"example.com\"").unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("[base.url]")));
    }

    #[test]
    fn test_validate_link_without_url() {
        let config = SiteConfig::from_str(
            r#"
            [navigation]
            links = [{ name = "Home", url = "/" }, { name = "Blog" }]
        "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(msg) if msg.contains("entry 2")));
    }

    #[test]
    fn test_update_with_root() {
        let mut config = SiteConfig::from_str(FULL).unwrap();
        config.update_with_root(Path::new("/srv/site"));

        assert_eq!(config.root, Path::new("/srv/site"));
        assert_eq!(config.sitemap.path, Path::new("/srv/site/out/sitemap.xml"));
    }

    #[test]
    fn test_update_with_root_keeps_absolute_path() {
        let mut config = SiteConfig::from_str("[sitemap]\npath = \"/tmp/sitemap.xml\"").unwrap();
        config.update_with_root(Path::new("/srv/site"));

        assert_eq!(config.sitemap.path, Path::new("/tmp/sitemap.xml"));
    }

    #[test]
    fn test_navigation_list() {
        let list = SiteConfig::from_str(FULL).unwrap().navigation_list();
        let items = list.items().unwrap();

        assert_eq!(list.identifier.as_deref(), Some("main"));
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].position, items[0].name.as_str()), (1, "Home"));
        assert_eq!(items[0].description, "Start page");
        assert_eq!((items[1].position, items[1].url.as_str()), (2, "https://example.com/blog"));
    }

    #[test]
    fn test_load_without_config_file() {
        let dir = TempDir::new().unwrap();
        let cli = Cli {
            config: "teseo.toml".into(),
            root: Some(dir.path().to_path_buf()),
            command: crate::cli::Commands::Breadcrumb {
                url: "https://example.com".into(),
            },
        };

        let config = SiteConfig::load(&cli).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.sitemap.path, dir.path().join("public/sitemap.xml"));
    }
}
