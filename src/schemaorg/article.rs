//! <https://schema.org/Article>

use super::{Organization, Person, SchemaValidator, defaults, require};
use crate::render::ToJsonLd;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    #[educe(Default = defaults::context())]
    pub context: String,

    #[serde(rename = "@type")]
    #[educe(Default = defaults::article())]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub headline: String,

    /// Image URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,

    /// ISO 8601 date.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_published: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_modified: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Article {
    pub fn new(
        headline: impl Into<String>,
        image: Vec<String>,
        author: Option<Person>,
        publisher: Option<Organization>,
        date_published: impl Into<String>,
    ) -> Self {
        let mut article = Self {
            headline: headline.into(),
            image,
            author,
            publisher,
            date_published: date_published.into(),
            ..Default::default()
        };
        article.ensure_defaults();
        article
    }

    fn ensure_defaults(&mut self) {
        if self.context.is_empty() {
            self.context = defaults::context();
        }
        if self.kind.is_empty() {
            self.kind = defaults::article();
        }
        if let Some(author) = &mut self.author {
            author.ensure_defaults();
        }
        if let Some(publisher) = &mut self.publisher {
            publisher.ensure_defaults();
        }
    }
}

impl SchemaValidator for Article {
    fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        require(&mut warnings, self.headline.is_empty(), "headline");
        require(&mut warnings, self.image.is_empty(), "image");
        require(&mut warnings, self.date_published.is_empty(), "datePublished");
        require(
            &mut warnings,
            self.author.is_none() && self.publisher.is_none(),
            "author or publisher",
        );
        warnings
    }
}

impl ToJsonLd for Article {
    fn id_prefix(&self) -> &'static str {
        "article"
    }
}
