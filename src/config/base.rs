//! `[base]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in teseo.toml - site metadata shared by every renderer.
///
/// # Example
/// ```toml
/// [base]
/// title = "Example"
/// description = "An example site"
/// url = "https://example.com"
/// image = "https://example.com/logo.png"
/// twitter = "@example"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used for `og:title`, `twitter:title` and the WebPage name.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Canonical site URL.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Preview image URL.
    #[serde(default)]
    pub image: String,

    /// `@handle` used for `twitter:site` and `twitter:creator`.
    #[serde(default)]
    pub twitter: String,

    /// BCP 47 language code for the WebPage entity.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

impl BaseConfig {
    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Example"
            description = "An example site"
            url = "https://example.com"
            image = "https://example.com/logo.png"
            twitter = "@example"
            language = "es"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Example");
        assert_eq!(config.base.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.base.image, "https://example.com/logo.png");
        assert_eq!(config.base.twitter, "@example");
        assert_eq!(config.base.language, "es");
    }

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]\ntitle = \"Test\"").unwrap();

        assert_eq!(config.base.url, None);
        assert_eq!(config.base.url_or_empty(), "");
        assert_eq!(config.base.language, "en");
        assert_eq!(config.base.twitter, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[base]\nauthor = \"Alice\"");

        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
