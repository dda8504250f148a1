//! <https://schema.org/WebPage>

use super::{SchemaValidator, defaults, require};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::web_page())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub headline: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub about: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keywords: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub in_language: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub is_part_of: String,

    #[serde(rename = "primaryImageOfPage", default, skip_serializing_if = "String::is_empty")]
    pub primary_image: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_published: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_modified: String,
}

impl WebPage {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        headline: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            headline: headline.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

impl SchemaValidator for WebPage {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        require(&mut warnings, self.url.is_empty(), "url");
        require(&mut warnings, self.name.is_empty(), "name");
        require(&mut warnings, self.headline.is_empty(), "headline");
        require(&mut warnings, self.description.is_empty(), "description");
        warnings
    }
}

impl ToJsonLd for WebPage {
    fn id_prefix(&self) -> &'static str {
        "webpage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let page = WebPage::new("https://example.com", "Example", "Welcome", "An example site");
        assert!(page.validate().is_empty());

        let partial = WebPage::new("https://example.com", "Example", "", "");
        assert_eq!(
            partial.validate(),
            ["missing recommended field: headline", "missing recommended field: description"]
        );
    }

    #[test]
    fn test_json_field_names() {
        let page = WebPage {
            in_language: "en".into(),
            primary_image: "https://example.com/cover.png".into(),
            ..WebPage::new("https://example.com", "Example", "", "")
        };
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "WebPage");
        assert_eq!(value["inLanguage"], "en");
        assert_eq!(value["primaryImageOfPage"], "https://example.com/cover.png");
        assert!(value.get("headline").is_none());
    }

    #[test]
    fn test_json_ld_prefix() {
        let html = WebPage::new("https://example.com", "", "", "").to_json_ld().unwrap();
        assert!(html.starts_with(r#"<script id="webpage-"#));
    }
}
