//! OpenGraph meta tags (<https://ogp.me>).
//!
//! Every object shares the [`OpenGraphObject`] fields and adds its own
//! namespaced properties. Rendering goes through [`ToMetaTags`], which drops
//! tags with empty content.
//!
//! [`ToMetaTags`]: crate::render::ToMetaTags

mod article;
mod product;
mod restaurant;
mod website;

pub use article::Article;
pub use product::Product;
pub use restaurant::Restaurant;
pub use website::WebSite;

use crate::render::MetaTag;

/// Common `og:*` metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraphObject {
    /// `og:type`, filled from the owning object when empty.
    pub og_type: String,
    pub title: String,
    /// Canonical URL.
    pub url: String,
    pub description: String,
    /// Image URL.
    pub image: String,
}

impl OpenGraphObject {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            og_type: String::new(),
            title: title.into(),
            url: url.into(),
            description: description.into(),
            image: image.into(),
        }
    }

    /// `og:type`, `og:title`, `og:url`, `og:description`, `og:image`.
    ///
    /// `default_type` is used when `og_type` is empty.
    fn base_tags(&self, default_type: &str) -> Vec<MetaTag> {
        let og_type = if self.og_type.is_empty() {
            default_type
        } else {
            &self.og_type
        };
        vec![
            MetaTag::new("og:type", og_type),
            MetaTag::new("og:title", &self.title),
            MetaTag::new("og:url", &self.url),
            MetaTag::new("og:description", &self.description),
            MetaTag::new("og:image", &self.image),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tags_default_type() {
        let og = OpenGraphObject::new("Title", "https://example.com", "", "");
        let tags = og.base_tags("website");

        assert_eq!(tags[0], MetaTag::new("og:type", "website"));
        assert_eq!(tags[1], MetaTag::new("og:title", "Title"));
        assert_eq!(tags[3].content, "");
    }

    #[test]
    fn test_base_tags_explicit_type() {
        let og = OpenGraphObject {
            og_type: "blog".into(),
            ..Default::default()
        };
        assert_eq!(og.base_tags("website")[0].content, "blog");
    }
}
