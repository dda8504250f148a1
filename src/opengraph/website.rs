use super::OpenGraphObject;
use crate::render::{MetaTag, ToMetaTags};

/// `og:type=website`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebSite {
    pub og: OpenGraphObject,
}

impl WebSite {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            og: OpenGraphObject::new(title, url, description, image),
        }
    }
}

impl ToMetaTags for WebSite {
    fn meta_tags(&self) -> Vec<MetaTag> {
        self.og.base_tags("website")
    }
}
